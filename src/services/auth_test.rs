use super::*;
use crate::state::test_helpers;

fn request(role: Option<Role>, password: &str, confirm: &str) -> RegisterRequest {
    RegisterRequest {
        name: "Nora Saleh".into(),
        email: "nora@example.com".into(),
        phone: "+966500000000".into(),
        role,
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_finds_plain_user_by_email() {
    let state = test_helpers::test_app_state();
    let account = login(&state, "john@example.com", "anything").await.unwrap();
    assert_eq!(account.id(), "1");
    assert_eq!(account.role(), Role::User);
    assert!(account.as_provider().is_none());
}

#[tokio::test]
async fn login_ignores_password() {
    let state = test_helpers::test_app_state();
    let a = login(&state, "admin@example.com", "").await.unwrap();
    let b = login(&state, "admin@example.com", "wrong").await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.role(), Role::Admin);
}

#[tokio::test]
async fn login_returns_provider_profile() {
    let state = test_helpers::test_app_state();
    let account = login(&state, "ahmed@example.com", "x").await.unwrap();
    let provider = account.as_provider().expect("provider account");
    assert_eq!(provider.id(), "3");
    assert_eq!(provider.services, vec!["1", "2", "5"]);
}

#[tokio::test]
async fn login_unknown_email_is_invalid_credentials() {
    let state = test_helpers::test_app_state();
    let err = login(&state, "ghost@example.com", "x").await.unwrap_err();
    assert_eq!(err, StoreError::InvalidCredentials);
}

#[tokio::test]
async fn login_email_match_is_exact() {
    let state = test_helpers::test_app_state();
    assert!(login(&state, "JOHN@example.com", "x").await.is_err());
    assert!(login(&state, " john@example.com", "x").await.is_err());
}

// =============================================================================
// validate_registration
// =============================================================================

#[test]
fn mismatch_reported_before_length() {
    let err = validate_registration(&request(None, "abc", "abd")).unwrap_err();
    assert_eq!(err, StoreError::Validation("error.passwords.no.match"));
}

#[test]
fn short_password_rejected() {
    let err = validate_registration(&request(None, "abcde", "abcde")).unwrap_err();
    assert_eq!(err, StoreError::Validation("error.password.length"));
    assert!(validate_registration(&request(None, "abcdef", "abcdef")).is_ok());
}

#[test]
fn role_defaults_to_user_and_admin_is_refused() {
    assert_eq!(validate_registration(&request(None, "secret1", "secret1")), Ok(Role::User));
    assert_eq!(
        validate_registration(&request(Some(Role::Provider), "secret1", "secret1")),
        Ok(Role::Provider)
    );
    assert!(matches!(
        validate_registration(&request(Some(Role::Admin), "secret1", "secret1")),
        Err(StoreError::Forbidden(_))
    ));
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_user_appends_unverified_user() {
    let state = test_helpers::test_app_state();
    let account = register(&state, request(None, "secret1", "secret1")).await.unwrap();

    let user = account.user();
    assert_eq!(user.role, Role::User);
    assert!(!user.is_verified);
    assert_eq!(user.id.len(), 9);

    let store = state.store.read().await;
    assert_eq!(store.users.len(), 3);
    assert_eq!(store.providers.len(), 6);

    drop(store);
    let again = login(&state, "nora@example.com", "").await.unwrap();
    assert_eq!(again.id(), user.id);
}

#[tokio::test]
async fn register_provider_starts_pending_with_default_hours() {
    let state = test_helpers::test_app_state();
    let account = register(&state, request(Some(Role::Provider), "secret1", "secret1")).await.unwrap();

    let provider = account.as_provider().expect("provider account");
    assert!(!provider.is_approved);
    assert_eq!(provider.user.name_ar.as_deref(), Some("Nora Saleh"));
    assert_eq!(provider.experience, 0);
    assert!(provider.working_area.is_empty());
    assert_eq!(provider.working_hours, crate::models::default_working_hours());

    let store = state.store.read().await;
    assert_eq!(store.providers.len(), 7);
    assert_eq!(store.users.len(), 2);
}

#[tokio::test]
async fn register_rejects_before_touching_store() {
    let state = test_helpers::test_app_state();
    assert!(register(&state, request(None, "secret1", "secret2")).await.is_err());
    assert_eq!(state.store.read().await.users.len(), 2);
}
