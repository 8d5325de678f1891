//! Conversion logic between DTOs and domain types.

use causette_shared::time::timestamp_to_rfc3339;

use crate::domain::{ChatMessage, ConnectionId, InboundEvent, OutboundEvent, User};
use crate::infrastructure::dto::{http, websocket as dto};
use crate::usecase::RoomState;

// ========================================
// DTO → Domain
// ========================================

impl dto::ClientEvent {
    /// Tag the event with the connection it arrived on.
    pub fn into_inbound(self, connection_id: ConnectionId) -> InboundEvent {
        match self {
            dto::ClientEvent::Join { username } => InboundEvent::Join {
                connection_id,
                username,
            },
            dto::ClientEvent::SendMessage { text } => InboundEvent::SendMessage {
                connection_id,
                text,
            },
            dto::ClientEvent::Typing => InboundEvent::Typing { connection_id },
            dto::ClientEvent::StopTyping => InboundEvent::StopTyping { connection_id },
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<User> for dto::UserDto {
    fn from(model: User) -> Self {
        Self {
            id: model.connection_id.into_string(),
            username: model.username.into_string(),
            joined_at: timestamp_to_rfc3339(model.joined_at.value()),
        }
    }
}

impl From<ChatMessage> for dto::MessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            id: model.id.into_string(),
            username: model.author.into_string(),
            text: model.text.into_string(),
            timestamp: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}

impl From<OutboundEvent> for dto::ServerEvent {
    fn from(event: OutboundEvent) -> Self {
        match event {
            OutboundEvent::Joined(user) => Self::Joined { user: user.into() },
            OutboundEvent::Error(message) => Self::Error { message },
            OutboundEvent::MessageHistory(messages) => Self::MessageHistory {
                messages: messages.into_iter().map(Into::into).collect(),
            },
            OutboundEvent::UsersList(users) => Self::UsersList {
                users: users.into_iter().map(Into::into).collect(),
            },
            OutboundEvent::UserJoined(user) => Self::UserJoined { user: user.into() },
            OutboundEvent::UserLeft(user) => Self::UserLeft { user: user.into() },
            OutboundEvent::NewMessage(message) => Self::NewMessage {
                message: message.into(),
            },
            OutboundEvent::UserTyping(username) => Self::UserTyping {
                username: username.into_string(),
            },
            OutboundEvent::UserStoppedTyping(username) => Self::UserStoppedTyping {
                username: username.into_string(),
            },
        }
    }
}

impl From<RoomState> for http::RoomStateDto {
    fn from(state: RoomState) -> Self {
        Self {
            users: state.users.into_iter().map(Into::into).collect(),
            message_count: state.message_count,
            history_capacity: state.history_capacity,
        }
    }
}
