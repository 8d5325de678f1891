//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::UserDto;

/// Response of `GET /api/room`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStateDto {
    pub users: Vec<UserDto>,
    pub message_count: usize,
    pub history_capacity: usize,
}
