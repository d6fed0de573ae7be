//! Dashboard summary for the signed-in account.

use serde::Serialize;

use crate::models::{Account, Booking, BookingStatus, Review, Role};
use crate::services::{booking, chat, review};
use crate::state::AppState;

const PREVIEW_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub upcoming_bookings: Vec<Booking>,
    pub recent_reviews: Vec<Review>,
    pub total_bookings: usize,
    pub active_chats: usize,
    pub unread_chats: usize,
    /// Providers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<usize>,
    /// Providers only; taken from the signed-in profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

/// Fetch bookings, chat rooms and (for providers) reviews concurrently and
/// fold them into the dashboard cards.
pub async fn summary(state: &AppState, account: &Account) -> DashboardSummary {
    let user_id = account.id();
    let is_provider = account.role() == Role::Provider;

    let (bookings, rooms, reviews) = tokio::join!(
        booking::list_bookings(state, user_id),
        chat::chat_rooms(state, user_id),
        async {
            if is_provider { review::list_reviews(state, user_id).await } else { Vec::new() }
        },
    );

    let upcoming_bookings = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .take(PREVIEW_LEN)
        .cloned()
        .collect();

    DashboardSummary {
        upcoming_bookings,
        total_bookings: bookings.len(),
        active_chats: rooms.len(),
        unread_chats: rooms.iter().filter(|r| r.unread_count > 0).count(),
        total_reviews: is_provider.then_some(reviews.len()),
        recent_reviews: reviews.into_iter().take(PREVIEW_LEN).collect(),
        average_rating: is_provider.then(|| account.as_provider().map_or(0.0, |p| p.rating.overall)),
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
