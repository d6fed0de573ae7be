//! Per-client key/value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in for the browser's `localStorage`: each client (identified by its
//! cookie) owns a small string map. Only two keys are used, `user` for the
//! serialized session account and `language` for the locale choice.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

pub const USER_KEY: &str = "user";
pub const LANGUAGE_KEY: &str = "language";

#[derive(Clone, Default)]
pub struct ClientStorage {
    inner: Arc<RwLock<HashMap<String, HashMap<String, String>>>>,
}

impl ClientStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_item(&self, client_id: &str, key: &str) -> Option<String> {
        let clients = self.inner.read().await;
        clients.get(client_id)?.get(key).cloned()
    }

    pub async fn set_item(&self, client_id: &str, key: &str, value: String) {
        let mut clients = self.inner.write().await;
        clients
            .entry(client_id.to_owned())
            .or_default()
            .insert(key.to_owned(), value);
    }

    /// Remove `key`. A client left with no items is dropped entirely.
    pub async fn remove_item(&self, client_id: &str, key: &str) {
        let mut clients = self.inner.write().await;
        if let Some(items) = clients.get_mut(client_id) {
            items.remove(key);
            if items.is_empty() {
                clients.remove(client_id);
            }
        }
    }

    /// Load a JSON value for `key`. Missing or unparseable entries read as `None`.
    pub async fn load_json<T: DeserializeOwned>(&self, client_id: &str, key: &str) -> Option<T> {
        let raw = self.get_item(client_id, key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(client_id, key, error = %e, "discarding unreadable stored value");
                None
            }
        }
    }

    /// Save a JSON value for `key`.
    pub async fn save_json<T: Serialize>(&self, client_id: &str, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(client_id, key, error = %e, "failed to serialize stored value");
                return;
            }
        };
        self.set_item(client_id, key, raw).await;
    }
}

/// Generate a random 16-byte hex client id.
#[must_use]
pub fn generate_client_id() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes.iter().fold(String::with_capacity(32), |mut out, b| {
        use std::fmt::Write;
        let _ = write!(out, "{b:02x}");
        out
    })
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
