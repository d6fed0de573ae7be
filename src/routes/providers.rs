//! Provider directory, provider detail and review routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::models::{Review, ReviewRatings, Role, Service, ServiceProvider};
use crate::routes::ApiError;
use crate::routes::auth::{Client, CurrentUser};
use crate::services::catalog;
use crate::services::provider::{self, ProviderPatch, ProviderQuery};
use crate::services::review::{self, NewReview};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<ServiceProvider>,
    /// Every working area among approved providers, for the filter dropdown.
    pub locations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProviderDetail {
    pub provider: ServiceProvider,
    /// Profile description in the viewer's language.
    pub about: String,
    /// Catalog entries for the provider's offered service ids.
    pub services: Vec<Service>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBody {
    pub booking_id: String,
    pub ratings: ReviewRatings,
    #[serde(default)]
    pub comment: Option<String>,
}

/// `GET /api/providers`: search, filter and sort approved providers.
pub async fn list(
    State(state): State<AppState>,
    client: Client,
    Query(query): Query<ProviderQuery>,
) -> Json<ProvidersResponse> {
    let (providers, services) = tokio::join!(provider::list_providers(&state), catalog::list_services(&state));
    let lang = client.language;
    Json(ProvidersResponse {
        locations: provider::locations(&providers, lang),
        providers: provider::filter_providers(&providers, &services, &query, lang),
    })
}

/// `GET /api/providers/{id}`
pub async fn detail(
    State(state): State<AppState>,
    client: Client,
    Path(id): Path<String>,
) -> Result<Json<ProviderDetail>, ApiError> {
    let (found, services, reviews) = tokio::join!(
        provider::get_provider(&state, &id),
        catalog::list_services(&state),
        review::list_reviews(&state, &id),
    );
    let provider = found.ok_or_else(|| ApiError::not_found("provider", &id, client.language))?;
    let services = services.into_iter().filter(|s| provider.services.contains(&s.id)).collect();
    let about = provider.description(client.language).to_owned();
    Ok(Json(ProviderDetail { provider, about, services, reviews }))
}

/// `PATCH /api/providers/{id}`: a provider edits their own profile; admins
/// may edit any.
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(patch): Json<ProviderPatch>,
) -> Result<Json<ServiceProvider>, ApiError> {
    if user.account.id() != id && user.account.role() != Role::Admin {
        tracing::warn!(user_id = user.account.id(), provider_id = %id, "profile edit refused");
        return Err(ApiError::forbidden(user.language));
    }
    provider::update_provider(&state, &id, patch)
        .await
        .map(Json)
        .map_err(ApiError::localize(user.language))
}

/// `GET /api/providers/{id}/reviews`
pub async fn reviews(State(state): State<AppState>, Path(id): Path<String>) -> Json<Vec<Review>> {
    Json(review::list_reviews(&state, &id).await)
}

/// `POST /api/providers/{id}/reviews`: review written by the signed-in account.
pub async fn create_review(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<ReviewBody>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let new = NewReview {
        user_id: user.account.id().to_owned(),
        provider_id: id,
        booking_id: body.booking_id,
        ratings: body.ratings,
        comment: body.comment,
    };
    let review = review::create_review(&state, new)
        .await
        .map_err(ApiError::localize(user.language))?;
    Ok((StatusCode::CREATED, Json(review)))
}

#[cfg(test)]
#[path = "providers_test.rs"]
mod tests;
