//! Notification feed routes.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;

use crate::models::Notification;
use crate::routes::ApiError;
use crate::routes::auth::CurrentUser;
use crate::services::notification::{self, Destination};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug, Serialize)]
pub struct Opened {
    pub notification: Notification,
    pub destination: Destination,
}

#[derive(Debug, Serialize)]
pub struct Marked {
    pub marked: usize,
}

/// `GET /api/notifications`
pub async fn list(State(state): State<AppState>, user: CurrentUser) -> Json<Feed> {
    let notifications = notification::list_notifications(&state, user.account.id()).await;
    let unread_count = notifications.iter().filter(|n| !n.is_read).count();
    Json(Feed { notifications, unread_count })
}

/// `POST /api/notifications/{id}/read`: mark read and tell the client where
/// to navigate.
pub async fn mark_read(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Opened>, ApiError> {
    let notification = notification::mark_as_read(&state, &id)
        .await
        .map_err(ApiError::localize(user.language))?;
    let destination = notification::destination(&notification, user.account.role());
    Ok(Json(Opened { notification, destination }))
}

/// `POST /api/notifications/read-all`
pub async fn mark_all_read(State(state): State<AppState>, user: CurrentUser) -> Result<Json<Marked>, ApiError> {
    let marked = notification::mark_all_as_read(&state, user.account.id())
        .await
        .map_err(ApiError::localize(user.language))?;
    Ok(Json(Marked { marked }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::state::test_helpers::{self, ADMIN_EMAIL, USER_EMAIL};

    #[tokio::test]
    async fn feed_counts_unread() {
        let state = test_helpers::test_app_state();
        let admin = test_helpers::signed_in(&state, ADMIN_EMAIL).await;
        let Json(feed) = list(State(state), admin).await;
        assert_eq!(feed.notifications.len(), 8);
        assert_eq!(feed.unread_count, 5);
    }

    #[tokio::test]
    async fn opening_admin_notice_routes_to_admin_tab() {
        let state = test_helpers::test_app_state();
        let admin = test_helpers::signed_in(&state, ADMIN_EMAIL).await;
        let Json(opened) = mark_read(State(state), admin, Path("8".into())).await.unwrap();
        assert!(opened.notification.is_read);
        assert_eq!(opened.destination.path, "/admin?tab=providers");
    }

    #[tokio::test]
    async fn read_all_clears_the_badge() {
        let state = test_helpers::test_app_state();
        let admin = test_helpers::signed_in(&state, ADMIN_EMAIL).await;
        let Json(marked) = mark_all_read(State(state.clone()), admin.clone()).await.unwrap();
        assert_eq!(marked.marked, 5);
        let Json(feed) = list(State(state), admin).await;
        assert_eq!(feed.unread_count, 0);
    }

    #[tokio::test]
    async fn unknown_notification_is_not_found() {
        let state = test_helpers::test_app_state();
        let john = test_helpers::signed_in(&state, USER_EMAIL).await;
        let err = mark_read(State(state), john, Path("999".into())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
