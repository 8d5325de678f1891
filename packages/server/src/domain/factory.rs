//! Identifier factories.

use uuid::Uuid;

use super::{
    error::ValueObjectError,
    value_object::{ConnectionId, MessageId},
};

/// Generates message ids (UUID v4).
pub struct MessageIdFactory;

impl MessageIdFactory {
    pub fn generate() -> MessageId {
        MessageId::new(Uuid::new_v4().to_string())
    }
}

/// Generates connection ids for accepted sockets (UUID v4).
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    pub fn generate() -> Result<ConnectionId, ValueObjectError> {
        ConnectionId::new(Uuid::new_v4().to_string())
    }
}
