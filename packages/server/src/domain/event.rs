//! Inbound and outbound event vocabulary of the hub.

use super::{
    entity::{ChatMessage, User},
    value_object::{ConnectionId, Username},
};

/// Event received from a connection, tagged with its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Join {
        connection_id: ConnectionId,
        username: String,
    },
    SendMessage {
        connection_id: ConnectionId,
        text: String,
    },
    Typing {
        connection_id: ConnectionId,
    },
    StopTyping {
        connection_id: ConnectionId,
    },
    /// Reported by the transport when the connection is gone.
    Disconnect {
        connection_id: ConnectionId,
    },
}

impl InboundEvent {
    pub fn connection_id(&self) -> &ConnectionId {
        match self {
            InboundEvent::Join { connection_id, .. }
            | InboundEvent::SendMessage { connection_id, .. }
            | InboundEvent::Typing { connection_id }
            | InboundEvent::StopTyping { connection_id }
            | InboundEvent::Disconnect { connection_id } => connection_id,
        }
    }

    /// Wire name of the event, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            InboundEvent::Join { .. } => "join",
            InboundEvent::SendMessage { .. } => "sendMessage",
            InboundEvent::Typing { .. } => "typing",
            InboundEvent::StopTyping { .. } => "stopTyping",
            InboundEvent::Disconnect { .. } => "disconnect",
        }
    }
}

/// Event the hub asks the transport to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    Joined(User),
    Error(String),
    MessageHistory(Vec<ChatMessage>),
    UsersList(Vec<User>),
    UserJoined(User),
    UserLeft(User),
    NewMessage(ChatMessage),
    UserTyping(Username),
    UserStoppedTyping(Username),
}

/// Target set of an outbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    /// The given connection only.
    Only(ConnectionId),
    /// Every attached connection except the given one.
    AllExcept(ConnectionId),
    /// Every attached connection.
    All,
}

impl Recipients {
    pub fn includes(&self, connection_id: &ConnectionId) -> bool {
        match self {
            Recipients::Only(target) => target == connection_id,
            Recipients::AllExcept(excluded) => excluded != connection_id,
            Recipients::All => true,
        }
    }
}

/// One outbound event paired with its recipients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub recipients: Recipients,
    pub event: OutboundEvent,
}

impl Delivery {
    pub fn only(connection_id: &ConnectionId, event: OutboundEvent) -> Self {
        Self {
            recipients: Recipients::Only(connection_id.clone()),
            event,
        }
    }

    pub fn all_except(connection_id: &ConnectionId, event: OutboundEvent) -> Self {
        Self {
            recipients: Recipients::AllExcept(connection_id.clone()),
            event,
        }
    }

    pub fn all(event: OutboundEvent) -> Self {
        Self {
            recipients: Recipients::All,
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    #[test]
    fn test_recipients_includes() {
        // テスト項目: 配信対象の判定
        // given (前提条件):
        let a = connection("a");
        let b = connection("b");

        // when (操作) / then (期待する結果):
        assert!(Recipients::Only(a.clone()).includes(&a));
        assert!(!Recipients::Only(a.clone()).includes(&b));
        assert!(!Recipients::AllExcept(a.clone()).includes(&a));
        assert!(Recipients::AllExcept(a.clone()).includes(&b));
        assert!(Recipients::All.includes(&a));
    }

    #[test]
    fn test_inbound_event_accessors() {
        // テスト項目: イベントから接続 ID と名前を取り出せる
        // given (前提条件):
        let event = InboundEvent::SendMessage {
            connection_id: connection("a"),
            text: "hi".to_string(),
        };

        // when (操作) / then (期待する結果):
        assert_eq!(event.connection_id(), &connection("a"));
        assert_eq!(event.name(), "sendMessage");
    }
}
