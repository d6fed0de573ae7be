//! Landing page data.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::models::{Service, ServiceProvider};
use crate::services::{catalog, provider};
use crate::state::AppState;

const FEATURED_SERVICES: usize = 8;
const FEATURED_PROVIDERS: usize = 6;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub services: Vec<Service>,
    pub providers: Vec<ServiceProvider>,
}

/// `GET /api/home`: featured services and approved providers.
pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    let (mut services, mut providers) =
        tokio::join!(catalog::list_services(&state), provider::list_providers(&state));
    services.truncate(FEATURED_SERVICES);
    providers.truncate(FEATURED_PROVIDERS);
    Json(HomeResponse { services, providers })
}
