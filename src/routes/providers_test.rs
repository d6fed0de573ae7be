use super::*;
use crate::i18n::Language;
use crate::routes::auth::AdminUser;
use crate::services::provider::ProviderSort;
use crate::state::test_helpers::{self, PROVIDER_EMAIL, USER_EMAIL};

fn en() -> Client {
    Client { id: None, language: Language::En }
}

fn ratings(score: u8) -> ReviewRatings {
    ReviewRatings { cost: score, speed: score, punctuality: score }
}

#[tokio::test]
async fn list_applies_query_and_reports_locations() {
    let state = test_helpers::test_app_state();
    let query = ProviderQuery { service: Some("1".into()), sort: ProviderSort::Name, ..ProviderQuery::default() };
    let Json(page) = list(State(state), en(), Query(query)).await;
    assert!(page.providers.iter().all(|p| p.services.iter().any(|s| s == "1")));
    assert_eq!(page.providers[0].id(), "3");
    assert!(page.locations.iter().any(|l| l == "Riyadh"));
}

#[tokio::test]
async fn detail_resolves_services_and_reviews() {
    let state = test_helpers::test_app_state();
    let Json(detail) = detail(State(state), en(), Path("3".into())).await.unwrap();
    let ids: Vec<_> = detail.services.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "5"]);
    assert_eq!(detail.reviews.len(), 1);
    assert!(detail.about.starts_with("Professional plumber"));
}

#[tokio::test]
async fn detail_describes_provider_in_viewer_language() {
    let state = test_helpers::test_app_state();
    let ar = Client { id: None, language: Language::Ar };
    let Json(detail) = detail(State(state), ar, Path("3".into())).await.unwrap();
    assert!(detail.about.starts_with("سباك وكهربائي محترف"));
    assert_eq!(detail.about, detail.provider.description_ar);
}

#[tokio::test]
async fn detail_of_unknown_provider_is_not_found() {
    let state = test_helpers::test_app_state();
    let err = detail(State(state), en(), Path("nope".into())).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn provider_edits_own_profile_only() {
    let state = test_helpers::test_app_state();
    let ahmed = test_helpers::signed_in(&state, PROVIDER_EMAIL).await;
    let patch = ProviderPatch { experience: Some(10), ..ProviderPatch::default() };

    let Json(updated) = update(State(state.clone()), ahmed.clone(), Path("3".into()), Json(patch.clone()))
        .await
        .unwrap();
    assert_eq!(updated.experience, 10);

    let err = update(State(state), ahmed, Path("4".into()), Json(patch)).await.unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_may_edit_any_profile() {
    let state = test_helpers::test_app_state();
    let AdminUser(admin) = test_helpers::signed_in_admin(&state).await;
    let patch = ProviderPatch { experience: Some(1), ..ProviderPatch::default() };
    assert!(update(State(state), admin, Path("5".into()), Json(patch)).await.is_ok());
}

#[tokio::test]
async fn create_review_attributes_to_signed_in_user() {
    let state = test_helpers::test_app_state();
    let john = test_helpers::signed_in(&state, USER_EMAIL).await;
    let body = ReviewBody { booking_id: "1".into(), ratings: ratings(5), comment: None };

    let (status, Json(created)) = create_review(State(state.clone()), john, Path("3".into()), Json(body))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.user_id, "1");
    assert_eq!(created.provider_id, "3");

    let Json(all) = reviews(State(state), Path("3".into())).await;
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn create_review_rejects_out_of_range_scores() {
    let state = test_helpers::test_app_state();
    let john = test_helpers::signed_in(&state, USER_EMAIL).await;
    let body = ReviewBody { booking_id: "1".into(), ratings: ratings(9), comment: None };
    let err = create_review(State(state), john, Path("3".into()), Json(body)).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "Ratings must be between 1 and 5");
}
