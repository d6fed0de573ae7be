//! Auth routes and the request extractors that carry client, session and
//! language into every handler.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::guard::{self, Access, GuardRejection};
use crate::i18n::{self, Language};
use crate::models::{Account, Role};
use crate::routes::ApiError;
use crate::services::auth::RegisterRequest;
use crate::session;
use crate::state::AppState;
use crate::storage;

pub const CLIENT_COOKIE: &str = "souq_client";

// =============================================================================
// EXTRACTORS
// =============================================================================

/// The calling client as identified by its cookie, with its language.
/// Never rejects: a first-time visitor has no id and the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: Option<String>,
    pub language: Language,
}

impl<S> FromRequestParts<S> for Client
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let id = jar
            .get(CLIENT_COOKIE)
            .map(Cookie::value)
            .filter(|v| !v.is_empty())
            .map(str::to_owned);
        let app_state = AppState::from_ref(state);
        let language = i18n::current_language(&app_state, id.as_deref()).await;
        Ok(Self { id, language })
    }
}

impl Client {
    /// The client's id, minting one (and the cookie carrying it) for a
    /// first-time visitor.
    #[must_use]
    pub fn ensure_id(&self, jar: CookieJar, secure: bool) -> (String, CookieJar) {
        if let Some(id) = &self.id {
            return (id.clone(), jar);
        }
        let id = storage::generate_client_id();
        let cookie = Cookie::build((CLIENT_COOKIE, id.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(secure);
        tracing::debug!(client_id = %id, "issued client cookie");
        (id, jar.add(cookie))
    }
}

/// Signed-in account behind the request. Rejects with a login redirect.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub account: Account,
    pub client_id: String,
    pub language: Language,
}

/// Signed-in admin. Other roles are redirected to the dashboard.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

async fn guarded<S>(parts: &mut Parts, state: &S, role: Option<Role>) -> Result<CurrentUser, GuardRejection>
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    let Ok(client) = Client::from_request_parts(parts, state).await;
    let app_state = AppState::from_ref(state);
    let account = match client.id.as_deref() {
        Some(id) => session::current_user(&app_state, id).await,
        None => None,
    };

    let path = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    match guard::check(account.as_ref(), true, role, path) {
        Access::Granted => {}
        denied => {
            tracing::debug!(path, ?denied, "guard rejected request");
            return Err(GuardRejection(denied));
        }
    }

    match (account, client.id) {
        (Some(account), Some(client_id)) => Ok(CurrentUser { account, client_id, language: client.language }),
        _ => Err(GuardRejection(Access::RedirectLogin { from: path.to_owned() })),
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = GuardRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        guarded(parts, state, None).await
    }
}

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = GuardRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        guarded(parts, state, Some(Role::Admin)).await.map(Self)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /api/auth/login`: sign in by email and remember the account.
pub async fn login(
    State(state): State<AppState>,
    client: Client,
    jar: CookieJar,
    Json(body): Json<LoginBody>,
) -> Result<(CookieJar, Json<Account>), ApiError> {
    let (client_id, jar) = client.ensure_id(jar, state.config.cookie_secure);
    let account = session::login(&state, &client_id, &body.email, &body.password)
        .await
        .map_err(ApiError::localize(client.language))?;
    Ok((jar, Json(account)))
}

/// `POST /api/auth/register`: create an account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    client: Client,
    jar: CookieJar,
    Json(body): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<Account>), ApiError> {
    let (client_id, jar) = client.ensure_id(jar, state.config.cookie_secure);
    let account = session::register(&state, &client_id, body)
        .await
        .map_err(ApiError::localize(client.language))?;
    Ok((jar, Json(account)))
}

/// `POST /api/auth/logout`: forget the signed-in account. The client cookie
/// stays so the language choice survives.
pub async fn logout(State(state): State<AppState>, client: Client) -> impl IntoResponse {
    if let Some(id) = &client.id {
        session::logout(&state, id).await;
    }
    StatusCode::NO_CONTENT
}

/// `GET /api/auth/me`: return current user.
pub async fn me(user: CurrentUser) -> Json<Account> {
    Json(user.account)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
