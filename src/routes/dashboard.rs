//! Dashboard route.

use axum::extract::State;
use axum::response::Json;

use crate::routes::auth::CurrentUser;
use crate::services::dashboard::{self, DashboardSummary};
use crate::state::AppState;

/// `GET /api/dashboard`
pub async fn summary(State(state): State<AppState>, user: CurrentUser) -> Json<DashboardSummary> {
    Json(dashboard::summary(&state, &user.account).await)
}
