//! Route guard: gate a view on sign-in and, optionally, on role.
//!
//! DESIGN
//! ======
//! Unauthenticated visitors to a protected view are sent to `/login` with
//! the path they asked for, so login can return them there. A signed-in
//! account with the wrong role goes to `/dashboard`. A role requirement on a
//! view that does not require sign-in lets anonymous visitors through.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::models::{Account, Role};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectLogin { from: String },
    RedirectDashboard,
}

/// Decide whether `user` may open the view at `path`.
#[must_use]
pub fn check(user: Option<&Account>, require_auth: bool, required_role: Option<Role>, path: &str) -> Access {
    match (user, required_role) {
        (None, _) if require_auth => Access::RedirectLogin { from: path.to_owned() },
        (Some(account), Some(role)) if account.role() != role => Access::RedirectDashboard,
        _ => Access::Granted,
    }
}

// =============================================================================
// HTTP REJECTION
// =============================================================================

/// A denied [`Access`] rendered as an HTTP response carrying the redirect
/// target for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardRejection(pub Access);

#[derive(Serialize)]
struct RedirectBody {
    code: &'static str,
    redirect: String,
}

impl GuardRejection {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self.0 {
            Access::RedirectLogin { .. } => StatusCode::UNAUTHORIZED,
            Access::RedirectDashboard => StatusCode::FORBIDDEN,
            Access::Granted => StatusCode::OK,
        }
    }

    #[must_use]
    pub fn redirect(&self) -> String {
        match &self.0 {
            Access::RedirectLogin { from } => format!("{LOGIN_PATH}?from={}", urlencoding::encode(from)),
            Access::RedirectDashboard | Access::Granted => DASHBOARD_PATH.to_owned(),
        }
    }
}

impl IntoResponse for GuardRejection {
    fn into_response(self) -> Response {
        let code = match self.0 {
            Access::RedirectLogin { .. } => "E_UNAUTHENTICATED",
            _ => "E_FORBIDDEN",
        };
        let body = RedirectBody { code, redirect: self.redirect() };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
