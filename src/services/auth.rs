//! Auth service: email lookup login and self-registration.
//!
//! Login is a lookup, not an authentication: the first account whose email
//! matches exactly is returned and the password is ignored.

use serde::Deserialize;

use crate::models::{Account, Role, ServiceProvider, User};
use crate::state::AppState;
use crate::store::{self, StoreError};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Option<Role>,
    pub password: String,
    pub confirm_password: String,
}

/// Find the account registered under `email`. Plain users are searched
/// before providers.
///
/// # Errors
///
/// Returns `StoreError::InvalidCredentials` if no account matches.
pub async fn login(state: &AppState, email: &str, _password: &str) -> Result<Account, StoreError> {
    state.latency.auth().await;
    let store = state.store.read().await;

    if let Some(user) = store.users.iter().find(|u| u.email == email) {
        return Ok(Account::User(user.clone()));
    }
    if let Some(provider) = store.providers.iter().find(|p| p.user.email == email) {
        return Ok(Account::Provider(provider.clone()));
    }

    tracing::debug!(email, "login for unknown email");
    Err(StoreError::InvalidCredentials)
}

/// Check the registration form before anything is stored.
///
/// # Errors
///
/// Password mismatch is reported before length. Admin accounts cannot be
/// self-registered.
pub fn validate_registration(request: &RegisterRequest) -> Result<Role, StoreError> {
    if request.password != request.confirm_password {
        return Err(StoreError::Validation("error.passwords.no.match"));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(StoreError::Validation("error.password.length"));
    }
    match request.role.unwrap_or(Role::User) {
        Role::Admin => Err(StoreError::Forbidden("admin accounts cannot self-register")),
        role => Ok(role),
    }
}

/// Register a new customer or provider.
///
/// Providers start unapproved with an empty profile and default hours.
///
/// # Errors
///
/// Propagates `validate_registration` failures.
pub async fn register(state: &AppState, request: RegisterRequest) -> Result<Account, StoreError> {
    let role = validate_registration(&request)?;
    state.latency.auth().await;

    let user = User {
        id: store::new_id(),
        name: request.name,
        name_ar: None,
        email: request.email,
        phone: request.phone,
        avatar: None,
        role,
        is_verified: false,
        created_at: store::now_rfc3339(),
        nationality: None,
        nationality_ar: None,
        age: None,
    };

    let mut store = state.store.write().await;
    let account = if role == Role::Provider {
        let provider = ServiceProvider::pending(user);
        store.providers.push(provider.clone());
        Account::Provider(provider)
    } else {
        store.users.push(user.clone());
        Account::User(user)
    };

    tracing::info!(user_id = account.id(), role = role.as_str(), "account registered");
    Ok(account)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
