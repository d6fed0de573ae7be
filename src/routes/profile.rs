//! Profile view for the signed-in account.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::models::{Account, Review, Service};
use crate::routes::auth::CurrentUser;
use crate::services::{catalog, provider, review};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub account: Account,
    /// Offered services; empty for non-providers.
    pub services: Vec<Service>,
    /// Reviews received; empty for non-providers.
    pub reviews: Vec<Review>,
}

/// `GET /api/profile`: providers get their live profile from the store, so
/// edits made since sign-in show up here.
pub async fn profile(State(state): State<AppState>, user: CurrentUser) -> Json<ProfileView> {
    let CurrentUser { account, .. } = user;
    let Some(snapshot) = account.as_provider() else {
        return Json(ProfileView { account, services: Vec::new(), reviews: Vec::new() });
    };

    let id = snapshot.id();
    let (live, services, reviews) = tokio::join!(
        provider::get_provider(&state, id),
        catalog::list_services(&state),
        review::list_reviews(&state, id),
    );
    let current = live.unwrap_or_else(|| snapshot.clone());
    let services = services.into_iter().filter(|s| current.services.contains(&s.id)).collect();
    Json(ProfileView { account: Account::Provider(current), services, reviews })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::provider::ProviderPatch;
    use crate::state::test_helpers::{self, PROVIDER_EMAIL, USER_EMAIL};

    #[tokio::test]
    async fn customer_profile_has_no_provider_sections() {
        let state = test_helpers::test_app_state();
        let john = test_helpers::signed_in(&state, USER_EMAIL).await;
        let Json(view) = profile(State(state), john).await;
        assert_eq!(view.account.id(), "1");
        assert!(view.services.is_empty() && view.reviews.is_empty());
    }

    #[tokio::test]
    async fn provider_profile_reflects_later_edits() {
        let state = test_helpers::test_app_state();
        let ahmed = test_helpers::signed_in(&state, PROVIDER_EMAIL).await;
        let patch = ProviderPatch { services: Some(vec!["1".into()]), ..ProviderPatch::default() };
        provider::update_provider(&state, "3", patch).await.unwrap();

        let Json(view) = profile(State(state), ahmed).await;
        assert_eq!(view.services.len(), 1);
        assert_eq!(view.reviews.len(), 1);
        assert_eq!(view.account.as_provider().map(|p| p.services.len()), Some(1));
    }
}
