//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One route module per marketplace view. Handlers resolve the caller's
//! client cookie, session and language through the extractors in `auth`,
//! call into `services::*`, and answer with JSON. Failures are reported as
//! `{code, message}` with the message translated into the caller's language.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod chat;
pub mod dashboard;
pub mod home;
pub mod i18n;
pub mod notifications;
pub mod profile;
pub mod providers;
pub mod reports;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, patch, post};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::i18n::{Language, translate};
use crate::state::AppState;
use crate::store::{ErrorCode, StoreError};

/// Full HTTP API.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/i18n/language", get(i18n::current).put(i18n::switch))
        .route("/api/i18n/languages", get(i18n::languages))
        .route("/api/i18n/translations", get(i18n::translations))
        .route("/api/i18n/t/{key}", get(i18n::lookup))
        .route("/api/home", get(home::home))
        .route("/api/services", get(catalog::list).post(catalog::create))
        .route("/api/services/{id}", patch(catalog::update).delete(catalog::delete))
        .route("/api/providers", get(providers::list))
        .route("/api/providers/{id}", get(providers::detail).patch(providers::update))
        .route("/api/providers/{id}/reviews", get(providers::reviews).post(providers::create_review))
        .route("/api/bookings", get(bookings::list).post(bookings::create))
        .route("/api/bookings/{id}", patch(bookings::update))
        .route("/api/chat/rooms", get(chat::rooms))
        .route("/api/chat/rooms/{id}/messages", get(chat::messages))
        .route("/api/chat/messages", post(chat::send))
        .route("/api/dashboard", get(dashboard::summary))
        .route("/api/profile", get(profile::profile))
        .route("/api/notifications", get(notifications::list))
        .route("/api/notifications/{id}/read", post(notifications::mark_read))
        .route("/api/notifications/read-all", post(notifications::mark_all_read))
        .route("/api/admin/overview", get(admin::overview))
        .route("/api/admin/providers/{id}/approve", post(admin::approve))
        .route("/api/admin/providers/{id}/reject", post(admin::reject))
        .route("/api/reports", get(reports::list).post(reports::create))
        .route("/api/reports/{id}", get(reports::detail).patch(reports::update_status))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// ERRORS
// =============================================================================

/// JSON error response: stable `code` plus a message in the caller's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
}

impl ApiError {
    /// Error whose message is the translation of `key`.
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, key: &str, lang: Language) -> Self {
        Self { status, code, message: translate(lang, key).to_owned() }
    }

    #[must_use]
    pub fn from_store(err: &StoreError, lang: Language) -> Self {
        tracing::warn!(code = err.error_code(), error = %err, "request rejected");
        Self::new(store_error_to_status(err), err.error_code(), err.message_key(), lang)
    }

    /// Map a `StoreError` into the given language; for `map_err`.
    pub fn localize(lang: Language) -> impl Fn(StoreError) -> Self {
        move |err| Self::from_store(&err, lang)
    }

    #[must_use]
    pub fn not_found(entity: &'static str, id: &str, lang: Language) -> Self {
        Self::from_store(&StoreError::not_found(entity, id), lang)
    }

    #[must_use]
    pub fn forbidden(lang: Language) -> Self {
        Self::new(StatusCode::FORBIDDEN, "E_FORBIDDEN", "admin.no.permission", lang)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { code: self.code, message: &self.message };
        (self.status, Json(body)).into_response()
    }
}

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        StoreError::Validation(_) => StatusCode::BAD_REQUEST,
        StoreError::Forbidden(_) => StatusCode::FORBIDDEN,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
