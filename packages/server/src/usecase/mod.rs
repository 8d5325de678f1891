//! UseCase layer
//!
//! 受信イベントごとのユースケースと、それらへ振り分ける `Hub` を提供します。
//! 全てのユースケースは同じ `SharedRoom` のロックを共有し、
//! 状態変更とイベント配信を 1 つのクリティカルセクション内で行います。

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::ChatRoom;

mod dispatcher;
mod get_room_state;
mod join_chat;
mod leave_chat;
mod outbox;
mod relay_typing;
mod send_message;
#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::Hub;
pub use get_room_state::{GetRoomStateUseCase, RoomState};
pub use join_chat::JoinChatUseCase;
pub use leave_chat::LeaveChatUseCase;
pub use relay_typing::RelayTypingUseCase;
pub use send_message::SendMessageUseCase;

/// 全ユースケースで共有するチャットルーム
pub type SharedRoom = Arc<Mutex<ChatRoom>>;

/// `ChatRoom` を共有用にラップ
pub fn new_shared_room(room: ChatRoom) -> SharedRoom {
    Arc::new(Mutex::new(room))
}
