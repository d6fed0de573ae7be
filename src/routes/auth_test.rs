use super::*;
use axum::http::Request;
use axum::http::header::COOKIE;

use crate::state::test_helpers::{self, ADMIN_EMAIL, USER_EMAIL};

fn parts(path: &str, client_id: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri(path);
    if let Some(id) = client_id {
        builder = builder.header(COOKIE, format!("{CLIENT_COOKIE}={id}"));
    }
    builder.body(()).unwrap().into_parts().0
}

fn fresh_client() -> Client {
    Client { id: None, language: Language::En }
}

fn login_body(email: &str) -> Json<LoginBody> {
    Json(LoginBody { email: email.into(), password: "whatever".into() })
}

// =============================================================================
// extractors
// =============================================================================

#[tokio::test]
async fn client_without_cookie_gets_default_language() {
    let state = test_helpers::test_app_state();
    let Ok(client) = Client::from_request_parts(&mut parts("/api/home", None), &state).await;
    assert_eq!(client, fresh_client());
}

#[tokio::test]
async fn client_reads_stored_language() {
    let state = test_helpers::test_app_state();
    i18n::set_language(&state, "c1", Language::Ar).await;
    let Ok(client) = Client::from_request_parts(&mut parts("/api/home", Some("c1")), &state).await;
    assert_eq!(client.id.as_deref(), Some("c1"));
    assert_eq!(client.language, Language::Ar);
}

#[tokio::test]
async fn current_user_without_session_redirects_to_login() {
    let state = test_helpers::test_app_state();
    let err = CurrentUser::from_request_parts(&mut parts("/api/bookings", Some("nobody")), &state)
        .await
        .unwrap_err();
    assert_eq!(err, GuardRejection(Access::RedirectLogin { from: "/api/bookings".into() }));
}

#[tokio::test]
async fn login_redirect_keeps_query_string() {
    let state = test_helpers::test_app_state();
    let err = CurrentUser::from_request_parts(&mut parts("/api/bookings?status=pending", None), &state)
        .await
        .unwrap_err();
    assert_eq!(err, GuardRejection(Access::RedirectLogin { from: "/api/bookings?status=pending".into() }));
    assert_eq!(err.redirect(), "/login?from=%2Fapi%2Fbookings%3Fstatus%3Dpending");
}

#[tokio::test]
async fn current_user_resolves_session() {
    let state = test_helpers::test_app_state();
    let (client_id, john) = test_helpers::login_as(&state, USER_EMAIL).await;
    let user = CurrentUser::from_request_parts(&mut parts("/api/dashboard", Some(&client_id)), &state)
        .await
        .unwrap();
    assert_eq!(user.account, john);
    assert_eq!(user.client_id, client_id);
}

#[tokio::test]
async fn admin_extractor_sends_other_roles_to_dashboard() {
    let state = test_helpers::test_app_state();
    let (client_id, _) = test_helpers::login_as(&state, USER_EMAIL).await;
    let err = AdminUser::from_request_parts(&mut parts("/api/admin/overview", Some(&client_id)), &state)
        .await
        .unwrap_err();
    assert_eq!(err, GuardRejection(Access::RedirectDashboard));

    let (admin_client, _) = test_helpers::login_as(&state, ADMIN_EMAIL).await;
    let AdminUser(admin) = AdminUser::from_request_parts(&mut parts("/api/admin/overview", Some(&admin_client)), &state)
        .await
        .unwrap();
    assert_eq!(admin.account.role(), Role::Admin);
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn login_issues_cookie_for_new_client() {
    let state = test_helpers::test_app_state();
    let (jar, Json(account)) = login(State(state.clone()), fresh_client(), CookieJar::new(), login_body(USER_EMAIL))
        .await
        .unwrap();
    assert_eq!(account.id(), "1");

    let client_id = jar.get(CLIENT_COOKIE).map(|c| c.value().to_owned()).unwrap();
    assert_eq!(client_id.len(), 32);
    assert_eq!(session::current_user(&state, &client_id).await, Some(account));
}

#[tokio::test]
async fn login_reuses_existing_client() {
    let state = test_helpers::test_app_state();
    let client = Client { id: Some("known".into()), language: Language::En };
    let (jar, _) = login(State(state.clone()), client, CookieJar::new(), login_body(USER_EMAIL))
        .await
        .unwrap();
    assert!(jar.get(CLIENT_COOKIE).is_none());
    assert!(session::current_user(&state, "known").await.is_some());
}

#[tokio::test]
async fn login_unknown_email_is_unauthorized_in_callers_language() {
    let state = test_helpers::test_app_state();
    let client = Client { id: None, language: Language::Ar };
    let err = login(State(state), client, CookieJar::new(), login_body("ghost@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message, i18n::translate(Language::Ar, "error.invalid.credentials"));
}

#[tokio::test]
async fn register_rejects_mismatched_passwords() {
    let state = test_helpers::test_app_state();
    let body = RegisterRequest {
        name: "Sara".into(),
        email: "sara@example.com".into(),
        phone: String::new(),
        role: None,
        password: "secret1".into(),
        confirm_password: "secret2".into(),
    };
    let err = register(State(state), fresh_client(), CookieJar::new(), Json(body)).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "Passwords do not match");
}

#[tokio::test]
async fn logout_then_me_is_rejected() {
    let state = test_helpers::test_app_state();
    let (client_id, _) = test_helpers::login_as(&state, USER_EMAIL).await;
    let client = Client { id: Some(client_id.clone()), language: Language::En };

    let status = logout(State(state.clone()), client).await.into_response().status();
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(CurrentUser::from_request_parts(&mut parts("/api/auth/me", Some(&client_id)), &state).await.is_err());
}
