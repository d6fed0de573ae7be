//! Provider directory: lookup, profile edits, search and sorting.
//!
//! DESIGN
//! ======
//! The public directory only ever shows approved providers; direct lookup by
//! id ignores approval so a pending provider can still see its own profile.
//! Filtering and sorting are pure functions over already-fetched lists so
//! views can combine them with any fetch.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::i18n::Language;
use crate::models::{Localized, Service, ServiceProvider, WorkingHours};
use crate::services::catalog::ALL;
use crate::state::AppState;
use crate::store::StoreError;

/// Approved providers only.
pub async fn list_providers(state: &AppState) -> Vec<ServiceProvider> {
    state.latency.standard().await;
    let store = state.store.read().await;
    store.providers.iter().filter(|p| p.is_approved).cloned().collect()
}

/// Provider by id regardless of approval state.
pub async fn get_provider(state: &AppState, id: &str) -> Option<ServiceProvider> {
    state.latency.standard().await;
    state.store.read().await.provider(id).cloned()
}

/// Profile fields a provider may edit. Approval, rating, role and id are not
/// part of the patch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPatch {
    pub name: Option<String>,
    pub name_ar: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub nationality: Option<String>,
    pub nationality_ar: Option<String>,
    pub age: Option<u32>,
    pub services: Option<Vec<String>>,
    pub working_area: Option<Vec<Localized>>,
    pub experience: Option<u32>,
    pub working_hours: Option<WorkingHours>,
    pub unavailable_dates: Option<Vec<String>>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
}

impl ProviderPatch {
    fn apply(self, provider: &mut ServiceProvider) {
        let user = &mut provider.user;
        if let Some(v) = self.name {
            user.name = v;
        }
        if let Some(v) = self.name_ar {
            user.name_ar = Some(v);
        }
        if let Some(v) = self.phone {
            user.phone = v;
        }
        if let Some(v) = self.avatar {
            user.avatar = Some(v);
        }
        if let Some(v) = self.nationality {
            user.nationality = Some(v);
        }
        if let Some(v) = self.nationality_ar {
            user.nationality_ar = Some(v);
        }
        if let Some(v) = self.age {
            user.age = Some(v);
        }
        if let Some(v) = self.services {
            provider.services = v;
        }
        if let Some(v) = self.working_area {
            provider.working_area = v;
        }
        if let Some(v) = self.experience {
            provider.experience = v;
        }
        if let Some(v) = self.working_hours {
            provider.working_hours = v;
        }
        if let Some(v) = self.unavailable_dates {
            provider.unavailable_dates = v;
        }
        if let Some(v) = self.description {
            provider.description = v;
        }
        if let Some(v) = self.description_ar {
            provider.description_ar = v;
        }
    }
}

/// Merge `patch` into the provider with `id`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if no provider has `id`.
pub async fn update_provider(state: &AppState, id: &str, patch: ProviderPatch) -> Result<ServiceProvider, StoreError> {
    state.latency.standard().await;
    let mut store = state.store.write().await;
    let provider = store
        .provider_mut(id)
        .ok_or_else(|| StoreError::not_found("provider", id))?;
    patch.apply(provider);
    tracing::info!(provider_id = id, "provider profile updated");
    Ok(provider.clone())
}

// =============================================================================
// SEARCH
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSort {
    #[default]
    Rating,
    Experience,
    Reviews,
    Name,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderQuery {
    #[serde(default)]
    pub q: String,
    /// Service id, or `all`.
    #[serde(default)]
    pub service: Option<String>,
    /// Localized working-area name, or `all`.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub sort: ProviderSort,
}

fn is_set(filter: Option<&str>) -> Option<&str> {
    filter.filter(|v| !v.is_empty() && *v != ALL)
}

/// Apply the directory's search, filters and ordering.
#[must_use]
pub fn filter_providers(
    providers: &[ServiceProvider],
    services: &[Service],
    query: &ProviderQuery,
    lang: Language,
) -> Vec<ServiceProvider> {
    let needle = query.q.trim().to_lowercase();
    let service_filter = is_set(query.service.as_deref());
    let location_filter = is_set(query.location.as_deref());
    let min_rating = query.min_rating.filter(|r| *r > 0.0);

    let mut out: Vec<ServiceProvider> = providers
        .iter()
        .filter(|p| needle.is_empty() || matches_search(p, services, &needle, lang))
        .filter(|p| service_filter.is_none_or(|id| p.services.iter().any(|s| s == id)))
        .filter(|p| location_filter.is_none_or(|loc| p.working_area.iter().any(|a| a.get(lang) == loc)))
        .filter(|p| min_rating.is_none_or(|min| p.rating.overall >= min))
        .cloned()
        .collect();

    out.sort_by(|a, b| compare(a, b, query.sort, lang));
    out
}

fn matches_search(provider: &ServiceProvider, services: &[Service], needle: &str, lang: Language) -> bool {
    if provider.user.display_name(lang).to_lowercase().contains(needle) {
        return true;
    }
    provider.services.iter().any(|id| {
        services
            .iter()
            .find(|s| &s.id == id)
            .is_some_and(|s| s.localized_name(lang).to_lowercase().contains(needle))
    })
}

fn compare(a: &ServiceProvider, b: &ServiceProvider, sort: ProviderSort, lang: Language) -> Ordering {
    match sort {
        ProviderSort::Rating => b.rating.overall.total_cmp(&a.rating.overall),
        ProviderSort::Experience => b.experience.cmp(&a.experience),
        ProviderSort::Reviews => b.rating.review_count.cmp(&a.rating.review_count),
        ProviderSort::Name => a
            .user
            .display_name(lang)
            .to_lowercase()
            .cmp(&b.user.display_name(lang).to_lowercase()),
    }
}

/// Distinct localized working-area names in first-seen order.
#[must_use]
pub fn locations(providers: &[ServiceProvider], lang: Language) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for area in providers.iter().flat_map(|p| &p.working_area) {
        let name = area.get(lang);
        if !out.iter().any(|n| n == name) {
            out.push(name.to_owned());
        }
    }
    out
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
