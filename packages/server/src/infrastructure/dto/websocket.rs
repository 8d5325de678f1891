//! WebSocket event DTOs.
//!
//! Every frame is a JSON object tagged by `type`.

use serde::{Deserialize, Deserializer, Serialize};

/// Events sent from client to server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Register a display name.
    Join {
        #[serde(default, deserialize_with = "null_as_empty")]
        username: String,
    },
    /// Post a chat message.
    SendMessage {
        #[serde(default, deserialize_with = "null_as_empty")]
        text: String,
    },
    Typing,
    StopTyping,
}

/// A `null` field reads the same as a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Events sent from server to client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Join acknowledged.
    Joined { user: UserDto },
    /// Request rejected.
    Error { message: String },
    /// History at join time, oldest first.
    MessageHistory { messages: Vec<MessageDto> },
    /// Everyone currently online.
    UsersList { users: Vec<UserDto> },
    UserJoined { user: UserDto },
    UserLeft { user: UserDto },
    NewMessage { message: MessageDto },
    UserTyping { username: String },
    UserStoppedTyping { username: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub username: String,
    /// RFC 3339 (UTC)
    pub joined_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    /// Author name, `Système` for join/leave notices.
    pub username: String,
    pub text: String,
    /// RFC 3339 (UTC)
    pub timestamp: String,
}
