//! UseCase: ルーム状態の取得（読み取り専用）

use crate::domain::User;

use super::SharedRoom;

/// ある時点のルームの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomState {
    /// オンラインのユーザー（参加時刻順）
    pub users: Vec<User>,
    /// 履歴に保持されているメッセージ数
    pub message_count: usize,
    /// 履歴の上限
    pub history_capacity: usize,
}

/// ルーム状態取得のユースケース
pub struct GetRoomStateUseCase {
    room: SharedRoom,
}

impl GetRoomStateUseCase {
    pub fn new(room: SharedRoom) -> Self {
        Self { room }
    }

    /// 同じロックの下でスナップショットを取得
    pub async fn execute(&self) -> RoomState {
        let room = self.room.lock().await;
        RoomState {
            users: room.roster().snapshot(),
            message_count: room.history().len(),
            history_capacity: room.history().capacity(),
        }
    }
}
