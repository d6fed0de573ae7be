//! Session context: which account, if any, a client is signed in as.
//!
//! The signed-in account is persisted to the client's `user` storage entry
//! as JSON, the same way the browser client keeps it in localStorage. Reads
//! return that snapshot; it is not refreshed from the store.

use crate::models::Account;
use crate::services::auth::{self, RegisterRequest};
use crate::state::AppState;
use crate::storage::USER_KEY;
use crate::store::StoreError;

/// Account currently signed in on `client_id`.
pub async fn current_user(state: &AppState, client_id: &str) -> Option<Account> {
    state.storage.load_json(client_id, USER_KEY).await
}

/// Authenticate and remember the account for `client_id`.
///
/// # Errors
///
/// Returns `StoreError::InvalidCredentials` if no account uses `email`.
pub async fn login(state: &AppState, client_id: &str, email: &str, password: &str) -> Result<Account, StoreError> {
    let account = auth::login(state, email, password).await?;
    state.storage.save_json(client_id, USER_KEY, &account).await;
    tracing::info!(client_id, user_id = account.id(), role = account.role().as_str(), "signed in");
    Ok(account)
}

/// Create an account and sign it in on `client_id`.
///
/// # Errors
///
/// Returns a validation error if the registration form is rejected.
pub async fn register(state: &AppState, client_id: &str, request: RegisterRequest) -> Result<Account, StoreError> {
    let account = auth::register(state, request).await?;
    state.storage.save_json(client_id, USER_KEY, &account).await;
    tracing::info!(client_id, user_id = account.id(), role = account.role().as_str(), "registered");
    Ok(account)
}

/// Forget the signed-in account. Idempotent.
pub async fn logout(state: &AppState, client_id: &str) {
    state.storage.remove_item(client_id, USER_KEY).await;
    tracing::info!(client_id, "signed out");
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
