//! Booking routes for the signed-in account.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::models::{Booking, BookingStatus};
use crate::routes::ApiError;
use crate::routes::auth::CurrentUser;
use crate::services::booking::{self, BookingPatch, NewBooking};
use crate::services::{catalog, provider};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BookingQuery {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingBody {
    pub provider_id: String,
    pub service_id: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// `GET /api/bookings`: bookings I made or received, filtered.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<BookingQuery>,
) -> Json<Vec<Booking>> {
    let (bookings, providers, services) = tokio::join!(
        booking::list_bookings(&state, user.account.id()),
        provider::list_providers(&state),
        catalog::list_services(&state),
    );
    Json(booking::filter_bookings(&bookings, &providers, &services, &query.status, &query.q))
}

/// `POST /api/bookings`: request a booking as the signed-in customer.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<BookingBody>,
) -> (StatusCode, Json<Booking>) {
    let new = NewBooking {
        user_id: user.account.id().to_owned(),
        provider_id: body.provider_id,
        service_id: body.service_id,
        date: body.date,
        time: body.time,
        status: BookingStatus::Pending,
        notes: body.notes.filter(|n| !n.trim().is_empty()),
    };
    (StatusCode::CREATED, Json(booking::create_booking(&state, new).await))
}

/// `PATCH /api/bookings/{id}`
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(patch): Json<BookingPatch>,
) -> Result<Json<Booking>, ApiError> {
    booking::update_booking(&state, &id, patch)
        .await
        .map(Json)
        .map_err(ApiError::localize(user.language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers::{self, PROVIDER_EMAIL, USER_EMAIL};

    fn body() -> BookingBody {
        BookingBody {
            provider_id: "4".into(),
            service_id: "7".into(),
            date: "2024-03-02".into(),
            time: "10:00".into(),
            notes: Some("   ".into()),
        }
    }

    #[tokio::test]
    async fn create_books_as_signed_in_user() {
        let state = test_helpers::test_app_state();
        let john = test_helpers::signed_in(&state, USER_EMAIL).await;
        let (status, Json(created)) = create(State(state.clone()), john.clone(), Json(body())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.user_id, "1");
        assert_eq!(created.status, BookingStatus::Pending);
        assert!(created.notes.is_none());

        let Json(mine) = list(State(state), john, Query(BookingQuery::default())).await;
        assert!(mine.contains(&created));
    }

    #[tokio::test]
    async fn list_applies_status_filter() {
        let state = test_helpers::test_app_state();
        let ahmed = test_helpers::signed_in(&state, PROVIDER_EMAIL).await;
        let query = BookingQuery { status: "pending".into(), q: String::new() };
        let Json(pending) = list(State(state), ahmed, Query(query)).await;
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn update_unknown_booking_is_not_found() {
        let state = test_helpers::test_app_state();
        let john = test_helpers::signed_in(&state, USER_EMAIL).await;
        let err = update(State(state), john, Path("ghost".into()), Json(BookingPatch::default()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn provider_confirms_booking() {
        let state = test_helpers::test_app_state();
        let ahmed = test_helpers::signed_in(&state, PROVIDER_EMAIL).await;
        let patch = BookingPatch { status: Some(BookingStatus::Completed), ..BookingPatch::default() };
        let Json(updated) = update(State(state), ahmed, Path("1".into()), Json(patch)).await.unwrap();
        assert_eq!(updated.status, BookingStatus::Completed);
    }
}
