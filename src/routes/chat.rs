//! Chat routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, ChatRoom};
use crate::routes::ApiError;
use crate::routes::auth::CurrentUser;
use crate::services::chat::{self, NewMessage};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RoomQuery {
    #[serde(default)]
    pub q: String,
}

/// A room plus the counterpart's name in the viewer's language.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    #[serde(flatten)]
    pub room: ChatRoom,
    pub counterpart_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBody {
    pub receiver_id: String,
    pub message: String,
}

/// `GET /api/chat/rooms`: `q` matches the counterpart's name or the last
/// message text.
pub async fn rooms(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<RoomQuery>,
) -> Json<Vec<RoomView>> {
    let rooms = chat::chat_rooms(&state, user.account.id()).await;
    let needle = query.q.trim().to_lowercase();

    let store = state.store.read().await;
    let views = rooms
        .into_iter()
        .map(|room| {
            let counterpart_name = store
                .user_by_id(&room.participants[1])
                .map(|u| u.display_name(user.language).to_owned());
            RoomView { room, counterpart_name }
        })
        .filter(|view| {
            needle.is_empty()
                || view.counterpart_name.as_ref().is_some_and(|n| n.to_lowercase().contains(&needle))
                || view
                    .room
                    .last_message
                    .as_ref()
                    .is_some_and(|m| m.message.to_lowercase().contains(&needle))
        })
        .collect();
    Json(views)
}

/// `GET /api/chat/rooms/{id}/messages`: only the signed-in account's rooms.
pub async fn messages(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    chat::messages(&state, user.account.id(), &room_id)
        .await
        .map(Json)
        .map_err(ApiError::localize(user.language))
}

/// `POST /api/chat/messages`: send as the signed-in account.
pub async fn send(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<SendBody>,
) -> Result<(StatusCode, Json<ChatMessage>), ApiError> {
    let new = NewMessage {
        sender_id: user.account.id().to_owned(),
        receiver_id: body.receiver_id,
        message: body.message,
    };
    let message = chat::send_message(&state, new)
        .await
        .map_err(ApiError::localize(user.language))?;
    Ok((StatusCode::CREATED, Json(message)))
}
