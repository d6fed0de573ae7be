//! Service catalog: listing, admin maintenance and provider requests.

use serde::Deserialize;

use crate::i18n::Language;
use crate::models::Service;
use crate::state::AppState;
use crate::store::{self, StoreError};

/// Filter value meaning "no filter" in list queries.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    pub name_ar: String,
    pub category: String,
    pub category_ar: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    "Wrench".to_owned()
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub category: Option<String>,
    pub category_ar: Option<String>,
    pub icon: Option<String>,
    pub is_approved: Option<bool>,
}

pub async fn list_services(state: &AppState) -> Vec<Service> {
    state.latency.standard().await;
    state.store.read().await.services.clone()
}

/// Append a service. Admin additions go live immediately; provider requests
/// wait for approval and remember who asked.
pub async fn add_service(state: &AppState, new: NewService, requested_by: Option<&str>) -> Service {
    state.latency.standard().await;
    let service = Service {
        id: store::new_id(),
        name: new.name,
        name_ar: new.name_ar,
        category: new.category,
        category_ar: new.category_ar,
        icon: new.icon,
        is_approved: requested_by.is_none(),
        requested_by: requested_by.map(str::to_owned),
    };
    state.store.write().await.services.push(service.clone());
    tracing::info!(service_id = %service.id, approved = service.is_approved, "service added");
    service
}

/// # Errors
///
/// Returns `StoreError::NotFound` if no service has `id`.
pub async fn update_service(state: &AppState, id: &str, patch: ServicePatch) -> Result<Service, StoreError> {
    state.latency.standard().await;
    let mut store = state.store.write().await;
    let service = store
        .services
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| StoreError::not_found("service", id))?;

    if let Some(name) = patch.name {
        service.name = name;
    }
    if let Some(name_ar) = patch.name_ar {
        service.name_ar = name_ar;
    }
    if let Some(category) = patch.category {
        service.category = category;
    }
    if let Some(category_ar) = patch.category_ar {
        service.category_ar = category_ar;
    }
    if let Some(icon) = patch.icon {
        service.icon = icon;
    }
    if let Some(approved) = patch.is_approved {
        service.is_approved = approved;
    }
    Ok(service.clone())
}

/// # Errors
///
/// Returns `StoreError::NotFound` if no service has `id`.
pub async fn delete_service(state: &AppState, id: &str) -> Result<(), StoreError> {
    state.latency.standard().await;
    let mut store = state.store.write().await;
    let index = store
        .services
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| StoreError::not_found("service", id))?;
    store.services.remove(index);
    tracing::info!(service_id = id, "service deleted");
    Ok(())
}

// =============================================================================
// FILTERING
// =============================================================================

/// Services whose localized name or category contains `query`
/// (case-insensitive), restricted to `category` unless it is `all`.
#[must_use]
pub fn filter_services(services: &[Service], query: &str, category: &str, lang: Language) -> Vec<Service> {
    let needle = query.trim().to_lowercase();
    services
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.localized_name(lang).to_lowercase().contains(&needle)
                || s.localized_category(lang).to_lowercase().contains(&needle)
        })
        .filter(|s| category.is_empty() || category == ALL || s.localized_category(lang) == category)
        .cloned()
        .collect()
}

/// Distinct localized categories in first-seen order.
#[must_use]
pub fn categories(services: &[Service], lang: Language) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for service in services {
        let category = service.localized_category(lang);
        if !out.iter().any(|c| c == category) {
            out.push(category.to_owned());
        }
    }
    out
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
