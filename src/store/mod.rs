//! In-memory marketplace store with simulated network latency.
//!
//! DESIGN
//! ======
//! One `Vec` per entity, shared behind a single `RwLock` in `AppState`.
//! Service functions await the artificial delay first and only then take the
//! lock, so the lock is never held across a sleep. Concurrent updates to the
//! same record resolve last-write-wins.
//!
//! ERROR HANDLING
//! ==============
//! `StoreError` carries a stable code for logs and a translation key so the
//! HTTP layer can answer in the caller's language.

pub mod seed;

use std::time::Duration;

use rand::Rng;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::models::{
    Booking, ChatMessage, Notification, Report, Review, Service, ServiceProvider, User,
};

// =============================================================================
// STORE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: Vec<User>,
    pub providers: Vec<ServiceProvider>,
    pub services: Vec<Service>,
    pub messages: Vec<ChatMessage>,
    pub bookings: Vec<Booking>,
    pub reviews: Vec<Review>,
    pub reports: Vec<Report>,
    pub notifications: Vec<Notification>,
}

impl Store {
    /// Store populated with the demo fixtures.
    #[must_use]
    pub fn seeded() -> Self {
        seed::fixtures()
    }

    pub fn provider_mut(&mut self, id: &str) -> Option<&mut ServiceProvider> {
        self.providers.iter_mut().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn provider(&self, id: &str) -> Option<&ServiceProvider> {
        self.providers.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Any identity by id: plain users first, then providers.
    #[must_use]
    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .or_else(|| self.provider(id).map(|p| &p.user))
    }
}

// =============================================================================
// IDS & CLOCK
// =============================================================================

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Random 9-character lowercase base36 id.
#[must_use]
pub fn new_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect()
}

/// Current UTC time as an RFC 3339 string.
#[must_use]
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| OffsetDateTime::UNIX_EPOCH.to_string())
}

// =============================================================================
// LATENCY
// =============================================================================

/// Artificial network delay applied before every store access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    base: Duration,
}

impl Latency {
    #[must_use]
    pub fn new(base_ms: u64) -> Self {
        Self { base: Duration::from_millis(base_ms) }
    }

    #[must_use]
    pub fn base(&self) -> Duration {
        self.base
    }

    /// Delay for ordinary reads and writes.
    pub async fn standard(&self) {
        pause(self.base).await;
    }

    /// Delay for login and registration: twice the base.
    pub async fn auth(&self) {
        pause(self.base * 2).await;
    }

    /// Delay for mark-as-read: two fifths of the base.
    pub async fn quick(&self) {
        pause(self.base * 2 / 5).await;
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors with a stable machine-readable code.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("validation failed: {0}")]
    Validation(&'static str),
    #[error("forbidden: {0}")]
    Forbidden(&'static str),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound { entity, id: id.to_owned() }
    }

    /// Translation key describing the failure to an end user.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "error.not.found",
            Self::InvalidCredentials => "error.invalid.credentials",
            Self::Validation(key) => key,
            Self::Forbidden(_) => "admin.no.permission",
        }
    }
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "E_NOT_FOUND",
            Self::InvalidCredentials => "E_INVALID_CREDENTIALS",
            Self::Validation(_) => "E_VALIDATION",
            Self::Forbidden(_) => "E_FORBIDDEN",
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
