//! Service catalog routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::models::{Role, Service};
use crate::routes::ApiError;
use crate::routes::auth::{AdminUser, Client, CurrentUser};
use crate::services::catalog::{self, NewService, ServicePatch};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ServiceQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub services: Vec<Service>,
    /// Every category in the catalog, for the filter dropdown.
    pub categories: Vec<String>,
}

/// `GET /api/services`: search by localized name or category.
pub async fn list(
    State(state): State<AppState>,
    client: Client,
    Query(query): Query<ServiceQuery>,
) -> Json<ServicesResponse> {
    let all = catalog::list_services(&state).await;
    let lang = client.language;
    Json(ServicesResponse {
        categories: catalog::categories(&all, lang),
        services: catalog::filter_services(&all, &query.q, &query.category, lang),
    })
}

/// `POST /api/services`: admins publish directly; providers submit a
/// request that waits for approval.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<NewService>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let requested_by = match user.account.role() {
        Role::Admin => None,
        Role::Provider => Some(user.account.id()),
        Role::User => return Err(ApiError::forbidden(user.language)),
    };
    let service = catalog::add_service(&state, body, requested_by).await;
    Ok((StatusCode::CREATED, Json(service)))
}

/// `PATCH /api/services/{id}`
pub async fn update(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
    Json(patch): Json<ServicePatch>,
) -> Result<Json<Service>, ApiError> {
    catalog::update_service(&state, &id, patch)
        .await
        .map(Json)
        .map_err(ApiError::localize(admin.language))
}

/// `DELETE /api/services/{id}`
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    catalog::delete_service(&state, &id)
        .await
        .map_err(ApiError::localize(admin.language))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
