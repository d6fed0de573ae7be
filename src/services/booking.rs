//! Bookings between customers and providers.
//!
//! Working hours and unavailable dates are informational; a booking can be
//! requested for any date and time.

use serde::Deserialize;
use serde_json::json;

use crate::models::{Booking, BookingStatus, NotificationKind, Service, ServiceProvider};
use crate::services::catalog::ALL;
use crate::services::notification::{self, Notice};
use crate::state::AppState;
use crate::store::{self, StoreError};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: String,
    pub provider_id: String,
    pub service_id: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    pub status: Option<BookingStatus>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

/// Bookings where `user_id` is either the customer or the provider.
pub async fn list_bookings(state: &AppState, user_id: &str) -> Vec<Booking> {
    state.latency.standard().await;
    let store = state.store.read().await;
    store
        .bookings
        .iter()
        .filter(|b| b.user_id == user_id || b.provider_id == user_id)
        .cloned()
        .collect()
}

/// Record a booking and notify the provider of the request.
pub async fn create_booking(state: &AppState, new: NewBooking) -> Booking {
    state.latency.standard().await;
    let booking = Booking {
        id: store::new_id(),
        user_id: new.user_id,
        provider_id: new.provider_id,
        service_id: new.service_id,
        date: new.date,
        time: new.time,
        status: new.status,
        notes: new.notes,
        created_at: store::now_rfc3339(),
    };

    let mut store = state.store.write().await;
    let customer = store.user_by_id(&booking.user_id).map(|u| {
        (u.name.clone(), u.name_ar.clone().unwrap_or_else(|| u.name.clone()))
    });
    store.bookings.push(booking.clone());

    if let Some((name, name_ar)) = customer {
        notification::push(
            &mut store,
            &booking.provider_id,
            Notice {
                kind: NotificationKind::Booking,
                title: ("New Booking Request", "طلب حجز جديد"),
                message: (
                    format!("You have a new booking request from {name} for {} at {}", booking.date, booking.time),
                    format!("لديك طلب حجز جديد من {name_ar} بتاريخ {} في {}", booking.date, booking.time),
                ),
                data: json!({ "bookingId": booking.id, "userId": booking.user_id }),
            },
        );
    }

    tracing::info!(booking_id = %booking.id, provider_id = %booking.provider_id, "booking created");
    booking
}

/// # Errors
///
/// Returns `StoreError::NotFound` if no booking has `id`.
pub async fn update_booking(state: &AppState, id: &str, patch: BookingPatch) -> Result<Booking, StoreError> {
    state.latency.standard().await;
    let mut store = state.store.write().await;
    let booking = store
        .bookings
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| StoreError::not_found("booking", id))?;

    if let Some(status) = patch.status {
        booking.status = status;
    }
    if let Some(date) = patch.date {
        booking.date = date;
    }
    if let Some(time) = patch.time {
        booking.time = time;
    }
    if let Some(notes) = patch.notes {
        booking.notes = Some(notes);
    }
    tracing::info!(booking_id = id, status = booking.status.as_str(), "booking updated");
    Ok(booking.clone())
}

/// Narrow a booking list by status (`all` keeps everything) and a
/// case-insensitive search over provider name, service name and notes.
#[must_use]
pub fn filter_bookings(
    bookings: &[Booking],
    providers: &[ServiceProvider],
    services: &[Service],
    status: &str,
    query: &str,
) -> Vec<Booking> {
    let status = match status {
        "" | ALL => None,
        raw => Some(BookingStatus::from_str(raw)),
    };
    let needle = query.trim().to_lowercase();

    bookings
        .iter()
        .filter(|b| status.is_none_or(|s| s == Some(b.status)))
        .filter(|b| {
            if needle.is_empty() {
                return true;
            }
            let provider = providers.iter().find(|p| p.id() == b.provider_id);
            let service = services.iter().find(|s| s.id == b.service_id);
            provider.is_some_and(|p| p.user.name.to_lowercase().contains(&needle))
                || service.is_some_and(|s| s.name.to_lowercase().contains(&needle))
                || b.notes.as_ref().is_some_and(|n| n.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "booking_test.rs"]
mod tests;
