//! Admin console: account listing, provider moderation and platform stats.

use serde_json::json;

use crate::models::{Account, NotificationKind, ReportStatus, ServiceProvider, SystemStats};
use crate::services::notification::{self, Notice};
use crate::state::AppState;
use crate::store::{Store, StoreError};

/// Every account: plain users first, then providers in any approval state.
pub async fn list_users(state: &AppState) -> Vec<Account> {
    state.latency.standard().await;
    let store = state.store.read().await;
    store
        .users
        .iter()
        .cloned()
        .map(Account::User)
        .chain(store.providers.iter().cloned().map(Account::Provider))
        .collect()
}

pub async fn pending_providers(state: &AppState) -> Vec<ServiceProvider> {
    state.latency.standard().await;
    let store = state.store.read().await;
    store.providers.iter().filter(|p| !p.is_approved).cloned().collect()
}

/// Approve a provider and tell them their profile is live.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if no provider has `id`.
pub async fn approve_provider(state: &AppState, id: &str) -> Result<ServiceProvider, StoreError> {
    state.latency.standard().await;
    let mut store = state.store.write().await;
    let provider = store.provider_mut(id).ok_or_else(|| StoreError::not_found("provider", id))?;
    provider.is_approved = true;
    let approved = provider.clone();

    notification::push(
        &mut store,
        id,
        Notice {
            kind: NotificationKind::Approval,
            title: ("Profile Approved", "تمت الموافقة على الملف الشخصي"),
            message: (
                "Congratulations! Your service provider profile has been approved and is now live".to_owned(),
                "تهانينا! تمت الموافقة على ملف مقدم الخدمة الخاص بك وهو الآن متاح".to_owned(),
            ),
            data: json!({ "profileId": id }),
        },
    );
    tracing::info!(provider_id = id, "provider approved");
    Ok(approved)
}

/// Remove a provider from the marketplace.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if no provider has `id`.
pub async fn reject_provider(state: &AppState, id: &str) -> Result<(), StoreError> {
    state.latency.standard().await;
    let mut store = state.store.write().await;
    let before = store.providers.len();
    store.providers.retain(|p| p.id() != id);
    if store.providers.len() == before {
        return Err(StoreError::not_found("provider", id));
    }
    tracing::info!(provider_id = id, "provider rejected");
    Ok(())
}

pub async fn system_stats(state: &AppState) -> SystemStats {
    state.latency.standard().await;
    compute_stats(&*state.store.read().await)
}

#[must_use]
pub fn compute_stats(store: &Store) -> SystemStats {
    let approved = store.providers.iter().filter(|p| p.is_approved).count();
    let reports_in = |status| store.reports.iter().filter(|r| r.status == status).count();
    SystemStats {
        total_users: store.users.len(),
        total_providers: approved,
        pending_providers: store.providers.len() - approved,
        total_bookings: store.bookings.len(),
        total_reviews: store.reviews.len(),
        total_reports: store.reports.len(),
        pending_reports: reports_in(ReportStatus::Pending),
        resolved_reports: reports_in(ReportStatus::Resolved),
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
