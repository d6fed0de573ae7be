//! Chat: rooms derived from the message log, room history, sending.
//!
//! There is no room table. A room is the pair of participants, named
//! `"{me}-{other}"` from the viewer's side, and is rebuilt from the message
//! log on every call. Delivery is store-and-fetch only.

use serde::Deserialize;

use crate::models::{ChatMessage, ChatRoom};
use crate::state::AppState;
use crate::store::{self, StoreError};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
}

/// Rooms `user_id` takes part in, ordered by first contact.
pub async fn chat_rooms(state: &AppState, user_id: &str) -> Vec<ChatRoom> {
    state.latency.standard().await;
    let store = state.store.read().await;
    build_rooms(&store.messages, user_id)
}

pub(crate) fn build_rooms(messages: &[ChatMessage], user_id: &str) -> Vec<ChatRoom> {
    let mut rooms: Vec<ChatRoom> = Vec::new();
    for message in messages {
        let other = if message.sender_id == user_id {
            &message.receiver_id
        } else if message.receiver_id == user_id {
            &message.sender_id
        } else {
            continue;
        };

        let index = match rooms.iter().position(|r| &r.participants[1] == other) {
            Some(index) => index,
            None => {
                rooms.push(ChatRoom {
                    id: room_id(user_id, other),
                    participants: [user_id.to_owned(), other.clone()],
                    last_message: None,
                    unread_count: 0,
                });
                rooms.len() - 1
            }
        };

        let room = &mut rooms[index];
        if message.receiver_id == user_id && !message.is_read {
            room.unread_count += 1;
        }
        room.last_message = Some(message.clone());
    }
    rooms
}

#[must_use]
pub fn room_id(user_id: &str, other_id: &str) -> String {
    format!("{user_id}-{other_id}")
}

/// The counterpart in one of `viewer_id`'s rooms. Ids may contain dashes,
/// so the viewer's prefix is stripped rather than splitting the id.
#[must_use]
pub fn room_counterpart<'a>(room_id: &'a str, viewer_id: &str) -> Option<&'a str> {
    room_id
        .strip_prefix(viewer_id)
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|other| !other.is_empty())
}

/// Messages exchanged in `viewer_id`'s room `room_id`, in log order.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if `room_id` is not one of the viewer's rooms.
pub async fn messages(state: &AppState, viewer_id: &str, room_id: &str) -> Result<Vec<ChatMessage>, StoreError> {
    let other = room_counterpart(room_id, viewer_id).ok_or_else(|| StoreError::not_found("chat room", room_id))?;
    state.latency.standard().await;
    let store = state.store.read().await;
    Ok(store
        .messages
        .iter()
        .filter(|m| {
            (m.sender_id == viewer_id && m.receiver_id == other) || (m.sender_id == other && m.receiver_id == viewer_id)
        })
        .cloned()
        .collect())
}

/// Append a message. Text is trimmed; blank messages are rejected.
///
/// # Errors
///
/// Returns `StoreError::Validation` for blank text.
pub async fn send_message(state: &AppState, new: NewMessage) -> Result<ChatMessage, StoreError> {
    let text = new.message.trim();
    if text.is_empty() {
        return Err(StoreError::Validation("chat.type.message"));
    }

    state.latency.standard().await;
    let message = ChatMessage {
        id: store::new_id(),
        sender_id: new.sender_id,
        receiver_id: new.receiver_id,
        message: text.to_owned(),
        timestamp: store::now_rfc3339(),
        is_read: false,
        is_reported: None,
    };
    state.store.write().await.messages.push(message.clone());
    tracing::debug!(message_id = %message.id, from = %message.sender_id, to = %message.receiver_id, "message sent");
    Ok(message)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
