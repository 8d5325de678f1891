//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::RoomStateDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current room state: online users and history size
pub async fn get_room_state(State(state): State<Arc<AppState>>) -> Json<RoomStateDto> {
    let room_state = state.get_room_state_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(room_state.into())
}
