//! Infrastructure layer: wire DTOs and the WebSocket implementation of `MessagePusher`.

pub mod dto;
pub mod message_pusher;
