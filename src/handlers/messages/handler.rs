//! Message handler implementations
//!
//! Direct messages are always persisted; the chat socket only adds live
//! delivery on top. A message sent to an offline user is retrievable through
//! history but is not queued for push.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::{AuthService, MessageService, chat_registry::ChatEvent},
    state::AppState,
};

use super::{
    request::{ChatSendFrame, ChatTokenQuery, SendMessageRequest},
    response::{ConversationResponse, MessageResponse, SendMessageResponse},
};

/// Send a direct message
pub async fn send_message(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SendMessageRequest>,
) -> AppResult<Json<SendMessageResponse>> {
    payload.validate()?;

    let (message, delivered) = MessageService::send(
        state.db(),
        state.chat(),
        auth_user.id,
        payload.receiver_id,
        &payload.content,
    )
    .await?;

    Ok(Json(SendMessageResponse {
        message: MessageResponse::from(message),
        delivered,
    }))
}

/// Message history with another user
pub async fn get_history(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<MessageResponse>>> {
    let messages = MessageService::history(state.db(), auth_user.id, user_id).await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// The caller's conversations
pub async fn list_conversations(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<ConversationResponse>>> {
    let conversations = MessageService::conversations(state.db(), auth_user.id).await?;
    Ok(Json(
        conversations
            .into_iter()
            .map(ConversationResponse::from)
            .collect(),
    ))
}

/// Chat socket endpoint. The bearer token travels in the query string and is
/// verified before the upgrade completes.
pub async fn chat_ws(
    State(state): State<AppState>,
    Query(query): Query<ChatTokenQuery>,
    ws: WebSocketUpgrade,
) -> AppResult<Response> {
    let claims = AuthService::verify_token(&query.token, &state.config().jwt.secret)?;
    let user_id = claims.id;

    Ok(ws.on_upgrade(move |socket| handle_socket(state, user_id, socket)))
}

/// Drive one chat connection until it closes.
///
/// The connection is registered in the chat registry on entry and removed on
/// exit; everything written to the socket flows through the registry channel,
/// including the sender's own acks, so there is a single socket writer.
async fn handle_socket(state: AppState, user_id: i64, socket: WebSocket) {
    let (ticket, mut outbound) = state.chat().register(user_id);
    let (mut ws_tx, mut ws_rx) = socket.split();

    tracing::debug!(user_id, "Chat socket connected");

    loop {
        tokio::select! {
            event = outbound.recv() => {
                // The channel closes when a newer connection replaces this one
                let Some(event) = event else { break };
                let Ok(text) = serde_json::to_string(&event) else { continue };
                if ws_tx.send(WsMessage::Text(text.into())).await.is_err() {
                    break;
                }
            }
            frame = ws_rx.next() => {
                match frame {
                    Some(Ok(WsMessage::Text(text))) => {
                        handle_frame(&state, user_id, text.as_str()).await;
                    }
                    Some(Ok(WsMessage::Close(_))) | Some(Err(_)) | None => break,
                    // Ping/pong handled by axum, binary frames ignored
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    state.chat().unregister(user_id, ticket);
    tracing::debug!(user_id, "Chat socket disconnected");
}

/// Process one inbound frame; outcomes are pushed back through the registry
async fn handle_frame(state: &AppState, user_id: i64, raw: &str) {
    let frame: ChatSendFrame = match serde_json::from_str(raw) {
        Ok(frame) => frame,
        Err(_) => {
            state.chat().send_to(
                user_id,
                ChatEvent::Error {
                    message: "Invalid frame: expected {\"receiver_id\", \"content\"}".to_string(),
                },
            );
            return;
        }
    };

    match MessageService::send(
        state.db(),
        state.chat(),
        user_id,
        frame.receiver_id,
        &frame.content,
    )
    .await
    {
        Ok((message, delivered)) => {
            state.chat().send_to(
                user_id,
                ChatEvent::Sent {
                    id: message.id,
                    receiver_id: message.receiver_id,
                    delivered,
                    created_at: message.created_at,
                },
            );
        }
        Err(AppError::NotFound(message)) => {
            state.chat().send_to(user_id, ChatEvent::Error { message });
        }
        Err(e) => {
            tracing::error!(user_id, error = ?e, "Chat message persist failed");
            state.chat().send_to(
                user_id,
                ChatEvent::Error {
                    message: "Message could not be sent".to_string(),
                },
            );
        }
    }
}
