//! Server state shared by the handlers.

use std::sync::Arc;

use crate::{
    domain::MessagePusher,
    usecase::{GetRoomStateUseCase, Hub},
};

/// Shared application state
pub struct AppState {
    /// Hub（受信イベントの振り分け）
    pub hub: Arc<Hub>,
    /// MessagePusher（接続の登録・登録解除に使用）
    pub message_pusher: Arc<dyn MessagePusher>,
    /// GetRoomStateUseCase（ルーム状態取得のユースケース）
    pub get_room_state_usecase: Arc<GetRoomStateUseCase>,
}
