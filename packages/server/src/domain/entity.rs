//! Domain entities.

use super::value_object::{ConnectionId, MessageId, MessageText, Timestamp, Username};

/// A registered user, bound to one live connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub connection_id: ConnectionId,
    pub username: Username,
    pub joined_at: Timestamp,
}

impl User {
    pub fn new(connection_id: ConnectionId, username: Username, joined_at: Timestamp) -> Self {
        Self {
            connection_id,
            username,
            joined_at,
        }
    }
}

/// An immutable chat message, either written by a user or generated by the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub author: Username,
    pub text: MessageText,
    pub created_at: Timestamp,
}

impl ChatMessage {
    pub fn new(id: MessageId, author: Username, text: MessageText, created_at: Timestamp) -> Self {
        Self {
            id,
            author,
            text,
            created_at,
        }
    }

    /// Create a notice authored by the reserved system name.
    pub fn system(id: MessageId, text: MessageText, created_at: Timestamp) -> Self {
        Self::new(id, Username::system(), text, created_at)
    }

    pub fn is_system(&self) -> bool {
        self.author == Username::system()
    }
}
