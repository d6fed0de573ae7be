//! Notifications: per-user feed, read tracking, click destinations.

use serde::Serialize;
use tokio::task::JoinSet;

use crate::models::{Notification, NotificationKind, Role};
use crate::state::AppState;
use crate::store::{self, Store, StoreError};

pub async fn list_notifications(state: &AppState, user_id: &str) -> Vec<Notification> {
    state.latency.standard().await;
    let store = state.store.read().await;
    store.notifications.iter().filter(|n| n.user_id == user_id).cloned().collect()
}

/// Mark one notification read. Uses the short delay.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if no notification has `id`.
pub async fn mark_as_read(state: &AppState, id: &str) -> Result<Notification, StoreError> {
    state.latency.quick().await;
    let mut store = state.store.write().await;
    let notification = store
        .notifications
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or_else(|| StoreError::not_found("notification", id))?;
    notification.is_read = true;
    Ok(notification.clone())
}

/// Mark every unread notification of `user_id` read, one concurrent
/// mark-as-read per notification. Returns how many were marked.
///
/// # Errors
///
/// Returns the first failure among the individual calls; the others still run
/// to completion.
pub async fn mark_all_as_read(state: &AppState, user_id: &str) -> Result<usize, StoreError> {
    let unread: Vec<String> = {
        let store = state.store.read().await;
        store
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .map(|n| n.id.clone())
            .collect()
    };

    let mut tasks = JoinSet::new();
    for id in unread {
        let state = state.clone();
        tasks.spawn(async move { mark_as_read(&state, &id).await });
    }

    let mut marked = 0;
    let mut first_error = None;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(_)) => marked += 1,
            Ok(Err(e)) => {
                tracing::warn!(user_id, error = %e, "mark-as-read failed");
                first_error.get_or_insert(e);
            }
            Err(e) => tracing::error!(user_id, error = %e, "mark-as-read task panicked"),
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(marked),
    }
}

/// Content for a notification generated by the marketplace itself.
pub(crate) struct Notice<'a> {
    pub kind: NotificationKind,
    pub title: (&'a str, &'a str),
    pub message: (String, String),
    pub data: serde_json::Value,
}

/// Append a notification for `user_id` to an already-locked store.
pub(crate) fn push(store: &mut Store, user_id: &str, notice: Notice<'_>) -> String {
    let id = store::new_id();
    store.notifications.push(Notification {
        id: id.clone(),
        user_id: user_id.to_owned(),
        kind: notice.kind,
        title: notice.title.0.to_owned(),
        title_ar: notice.title.1.to_owned(),
        message: notice.message.0,
        message_ar: notice.message.1,
        is_read: false,
        created_at: store::now_rfc3339(),
        data: Some(notice.data),
    });
    tracing::debug!(user_id, notification_id = %id, "notification queued");
    id
}

// =============================================================================
// DESTINATION
// =============================================================================

/// Where the client should navigate when `notification` is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub path: String,
}

impl Destination {
    fn to(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Route for a clicked notification, given the viewer's role.
#[must_use]
pub fn destination(notification: &Notification, role: Role) -> Destination {
    let action = notification.data_str("action");
    if role == Role::Admin {
        if let Some(action) = action {
            return Destination::to(match action {
                "review_provider" | "verify_documents" => "/admin?tab=providers",
                "review_service" | "bulk_approve" => "/admin?tab=services",
                "investigate" => "/admin?tab=users",
                "support_needed" | "view_report" => "/admin?tab=dashboard",
                _ => "/admin",
            });
        }
    }

    if notification.data.is_none() {
        return Destination::to(match notification.kind {
            NotificationKind::Message => "/chat",
            NotificationKind::Booking => "/bookings",
            NotificationKind::Review | NotificationKind::Approval => "/profile",
        });
    }

    let provider_id = notification.data_str("providerId");
    match notification.kind {
        NotificationKind::Message => match provider_id {
            Some(id) => Destination::to(format!("/chat?provider={id}")),
            None => Destination::to("/chat"),
        },
        NotificationKind::Booking => {
            if notification.data_str("bookingId").is_some() {
                Destination::to("/bookings")
            } else {
                Destination::to("/dashboard")
            }
        }
        NotificationKind::Review => match (role, provider_id) {
            (Role::Provider, _) => Destination::to("/profile"),
            (_, Some(id)) => Destination::to(format!("/provider/{id}")),
            _ => Destination::to("/dashboard"),
        },
        NotificationKind::Approval => Destination::to("/profile"),
    }
}

#[cfg(test)]
#[path = "notification_test.rs"]
mod tests;
