//! Domain layer for the chat hub.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod history;
pub mod pusher;
pub mod room;
pub mod roster;
pub mod value_object;

pub use entity::{ChatMessage, User};
pub use error::{ErrorKind, HubError, MessagePushError, ValueObjectError};
pub use event::{Delivery, InboundEvent, OutboundEvent, Recipients};
pub use factory::{ConnectionIdFactory, MessageIdFactory};
pub use history::{DEFAULT_HISTORY_CAPACITY, History};
pub use pusher::{MessagePusher, PusherChannel};
#[cfg(test)]
pub use pusher::MockMessagePusher;
pub use room::ChatRoom;
pub use roster::Roster;
pub use value_object::{
    ConnectionId, MessageId, MessageText, SYSTEM_AUTHOR, Timestamp, Username,
};
