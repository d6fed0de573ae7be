//! Admin console routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::models::{Account, Report, Role, Service, ServiceProvider, SystemStats, User};
use crate::routes::ApiError;
use crate::routes::auth::AdminUser;
use crate::services::{admin, catalog, report};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// Customer accounts only; admins are not listed.
    pub users: Vec<User>,
    pub providers: Vec<ServiceProvider>,
    pub pending_providers: Vec<ServiceProvider>,
    pub services: Vec<Service>,
    pub reports: Vec<Report>,
    pub stats: SystemStats,
}

/// `GET /api/admin/overview`: every admin tab's data in one concurrent fetch.
pub async fn overview(State(state): State<AppState>, _admin: AdminUser) -> Json<Overview> {
    let (accounts, pending_providers, services, reports, stats) = tokio::join!(
        admin::list_users(&state),
        admin::pending_providers(&state),
        catalog::list_services(&state),
        report::list_reports(&state),
        admin::system_stats(&state),
    );

    let mut users = Vec::new();
    let mut providers = Vec::new();
    for account in accounts {
        match account {
            Account::Provider(p) if p.is_approved => providers.push(p),
            Account::Provider(_) => {}
            Account::User(u) if u.role == Role::User => users.push(u),
            Account::User(_) => {}
        }
    }

    Json(Overview { users, providers, pending_providers, services, reports, stats })
}

/// `POST /api/admin/providers/{id}/approve`
pub async fn approve(
    State(state): State<AppState>,
    AdminUser(caller): AdminUser,
    Path(id): Path<String>,
) -> Result<Json<ServiceProvider>, ApiError> {
    admin::approve_provider(&state, &id)
        .await
        .map(Json)
        .map_err(ApiError::localize(caller.language))
}

/// `POST /api/admin/providers/{id}/reject`
pub async fn reject(
    State(state): State<AppState>,
    AdminUser(caller): AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    admin::reject_provider(&state, &id)
        .await
        .map_err(ApiError::localize(caller.language))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers;

    async fn with_pending(state: &AppState) {
        let pending = ServiceProvider::pending(test_helpers::dummy_user("p-9", "p9@example.com"));
        state.store.write().await.providers.push(pending);
    }

    #[tokio::test]
    async fn overview_splits_accounts() {
        let state = test_helpers::test_app_state();
        with_pending(&state).await;
        let admin = test_helpers::signed_in_admin(&state).await;

        let Json(view) = overview(State(state), admin).await;
        assert_eq!(view.users.len(), 1);
        assert_eq!(view.providers.len(), 6);
        assert_eq!(view.pending_providers.len(), 1);
        assert_eq!(view.services.len(), 8);
        assert_eq!(view.reports.len(), 6);
        assert_eq!(view.stats.pending_providers, 1);
    }

    #[tokio::test]
    async fn approve_then_reject_unknown() {
        let state = test_helpers::test_app_state();
        with_pending(&state).await;

        let admin = test_helpers::signed_in_admin(&state).await;
        let Json(approved) = approve(State(state.clone()), admin.clone(), Path("p-9".into())).await.unwrap();
        assert!(approved.is_approved);

        let err = reject(State(state), admin, Path("ghost".into())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
