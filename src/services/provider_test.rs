use super::*;
use crate::services::catalog;
use crate::state::test_helpers;

async fn fixtures() -> (Vec<ServiceProvider>, Vec<Service>) {
    let state = test_helpers::test_app_state();
    let (providers, services) = tokio::join!(list_providers(&state), catalog::list_services(&state));
    (providers, services)
}

fn ids(providers: &[ServiceProvider]) -> Vec<&str> {
    providers.iter().map(ServiceProvider::id).collect()
}

// =============================================================================
// fetch & update
// =============================================================================

#[tokio::test]
async fn list_hides_unapproved_but_get_does_not() {
    let state = test_helpers::test_app_state();
    state.store.write().await.provider_mut("4").unwrap().is_approved = false;

    let listed = list_providers(&state).await;
    assert_eq!(listed.len(), 5);
    assert!(listed.iter().all(|p| p.id() != "4"));
    assert!(get_provider(&state, "4").await.is_some());
    assert!(get_provider(&state, "404").await.is_none());
}

#[tokio::test]
async fn update_merges_profile_fields() {
    let state = test_helpers::test_app_state();
    let patch = ProviderPatch {
        experience: Some(9),
        description: Some("Now also fixing water heaters.".into()),
        working_area: Some(vec![Localized::new("Dammam", "الدمام")]),
        ..ProviderPatch::default()
    };
    let updated = update_provider(&state, "3", patch).await.unwrap();
    assert_eq!(updated.experience, 9);
    assert_eq!(updated.working_area.len(), 1);
    assert_eq!(updated.user.name, "Ahmed Al-Rashid");
    assert!(updated.is_approved);
    assert_eq!(updated.rating.review_count, 156);

    let stored = get_provider(&state, "3").await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn update_missing_provider_is_not_found() {
    let state = test_helpers::test_app_state();
    let err = update_provider(&state, "nope", ProviderPatch::default()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "provider", .. }));
}

#[test]
fn patch_ignores_approval_and_rating_keys() {
    let patch: ProviderPatch =
        serde_json::from_str(r#"{"isApproved":false,"rating":{"overall":1.0},"experience":3}"#).unwrap();
    assert_eq!(patch.experience, Some(3));
}

// =============================================================================
// filter_providers
// =============================================================================

#[tokio::test]
async fn default_sort_is_rating_desc_and_stable() {
    let (providers, services) = fixtures().await;
    let out = filter_providers(&providers, &services, &ProviderQuery::default(), Language::En);
    // 5 and 7 tie at 4.9 and keep their original order.
    assert_eq!(ids(&out), vec!["5", "7", "3", "6", "4", "8"]);
}

#[tokio::test]
async fn search_matches_name_or_offered_service() {
    let (providers, services) = fixtures().await;

    let query = ProviderQuery { q: "sarah".into(), ..ProviderQuery::default() };
    assert_eq!(ids(&filter_providers(&providers, &services, &query, Language::En)), vec!["4"]);

    let query = ProviderQuery { q: "painting".into(), ..ProviderQuery::default() };
    assert_eq!(ids(&filter_providers(&providers, &services, &query, Language::En)), vec!["7", "6"]);
}

#[tokio::test]
async fn arabic_search_uses_arabic_names() {
    let (providers, services) = fixtures().await;
    let query = ProviderQuery { q: "فاطمة".into(), ..ProviderQuery::default() };
    assert_eq!(ids(&filter_providers(&providers, &services, &query, Language::Ar)), vec!["8"]);
    assert!(filter_providers(&providers, &services, &query, Language::En).is_empty());
}

#[tokio::test]
async fn service_location_and_rating_filters_combine() {
    let (providers, services) = fixtures().await;

    let query = ProviderQuery { service: Some("6".into()), ..ProviderQuery::default() };
    assert_eq!(ids(&filter_providers(&providers, &services, &query, Language::En)), vec!["6", "4", "8"]);

    let query = ProviderQuery {
        service: Some("6".into()),
        min_rating: Some(4.6),
        ..ProviderQuery::default()
    };
    assert_eq!(ids(&filter_providers(&providers, &services, &query, Language::En)), vec!["6", "4"]);

    let query = ProviderQuery { location: Some("دبي".into()), ..ProviderQuery::default() };
    assert_eq!(ids(&filter_providers(&providers, &services, &query, Language::Ar)), vec!["5"]);

    let query = ProviderQuery { service: Some(ALL.into()), location: Some(ALL.into()), ..ProviderQuery::default() };
    assert_eq!(filter_providers(&providers, &services, &query, Language::En).len(), 6);
}

#[tokio::test]
async fn other_sort_orders() {
    let (providers, services) = fixtures().await;
    let sorted = |sort| {
        let query = ProviderQuery { sort, ..ProviderQuery::default() };
        ids(&filter_providers(&providers, &services, &query, Language::En))
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };
    assert_eq!(sorted(ProviderSort::Experience), vec!["7", "5", "3", "6", "4", "8"]);
    assert_eq!(sorted(ProviderSort::Reviews), vec!["7", "5", "3", "6", "4", "8"]);
    assert_eq!(sorted(ProviderSort::Name), vec!["3", "7", "8", "6", "5", "4"]);
}

#[test]
fn sort_parses_from_query_value() {
    let query: ProviderQuery = serde_json::from_str(r#"{"sort":"experience"}"#).unwrap();
    assert_eq!(query.sort, ProviderSort::Experience);
}

#[tokio::test]
async fn locations_follow_language() {
    let (providers, _) = fixtures().await;
    let en = locations(&providers, Language::En);
    assert_eq!(en.len(), 12);
    assert_eq!(en[0], "Riyadh");
    assert_eq!(locations(&providers, Language::Ar)[0], "الرياض");
}
