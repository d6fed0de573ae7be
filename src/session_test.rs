use super::*;
use crate::models::Role;
use crate::state::test_helpers;

#[tokio::test]
async fn fresh_client_has_no_user() {
    let state = test_helpers::test_app_state();
    assert!(current_user(&state, "nobody").await.is_none());
}

#[tokio::test]
async fn login_persists_account_for_client() {
    let state = test_helpers::test_app_state();
    let account = login(&state, "c1", "ahmed@example.com", "pw").await.unwrap();

    let restored = current_user(&state, "c1").await.expect("session user");
    assert_eq!(restored, account);
    assert!(restored.as_provider().is_some(), "provider shape survives storage");

    // Stored as JSON under the `user` key.
    let raw = state.storage.get_item("c1", USER_KEY).await.unwrap();
    assert!(raw.contains("\"isApproved\":true"));
}

#[tokio::test]
async fn failed_login_leaves_session_untouched() {
    let state = test_helpers::test_app_state();
    login(&state, "c1", "john@example.com", "pw").await.unwrap();
    assert!(login(&state, "c1", "ghost@example.com", "pw").await.is_err());
    assert_eq!(current_user(&state, "c1").await.map(|a| a.id().to_owned()).as_deref(), Some("1"));
}

#[tokio::test]
async fn register_signs_the_new_account_in() {
    let state = test_helpers::test_app_state();
    let request = RegisterRequest {
        name: "Omar".into(),
        email: "omar@example.com".into(),
        phone: String::new(),
        role: Some(Role::Provider),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
    };
    let account = register(&state, "c2", request).await.unwrap();
    assert_eq!(current_user(&state, "c2").await, Some(account));
}

#[tokio::test]
async fn logout_clears_user_only() {
    let state = test_helpers::test_app_state();
    crate::i18n::set_language(&state, "c1", crate::i18n::Language::Ar).await;
    login(&state, "c1", "john@example.com", "pw").await.unwrap();

    logout(&state, "c1").await;
    assert!(current_user(&state, "c1").await.is_none());
    assert_eq!(
        crate::i18n::current_language(&state, Some("c1")).await,
        crate::i18n::Language::Ar
    );

    // Second logout is harmless.
    logout(&state, "c1").await;
}

#[tokio::test]
async fn sessions_are_independent_per_client() {
    let state = test_helpers::test_app_state();
    let (a, _) = test_helpers::login_as(&state, test_helpers::USER_EMAIL).await;
    let (b, _) = test_helpers::login_as(&state, test_helpers::ADMIN_EMAIL).await;
    assert_eq!(current_user(&state, &a).await.unwrap().role(), Role::User);
    assert_eq!(current_user(&state, &b).await.unwrap().role(), Role::Admin);
}
