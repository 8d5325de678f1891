//! UseCase: 入力中インジケーターの中継
//!
//! 状態は変更せず、参加済みの接続の入力開始・終了を本人以外に中継する。
//! 未参加の接続からの通知は黙って無視する。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher};

use super::{SharedRoom, outbox::deliver_all};

/// 入力中通知のユースケース
pub struct RelayTypingUseCase {
    room: SharedRoom,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelayTypingUseCase {
    pub fn new(room: SharedRoom, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            room,
            message_pusher,
        }
    }

    /// 入力開始を中継
    pub async fn start(&self, connection_id: &ConnectionId) {
        let room = self.room.lock().await;
        let deliveries = room.typing(connection_id);
        if deliveries.is_empty() {
            tracing::debug!("Ignored typing from unregistered '{}'", connection_id);
        }
        deliver_all(self.message_pusher.as_ref(), deliveries).await;
    }

    /// 入力終了を中継
    pub async fn stop(&self, connection_id: &ConnectionId) {
        let room = self.room.lock().await;
        let deliveries = room.stop_typing(connection_id);
        if deliveries.is_empty() {
            tracing::debug!("Ignored stopTyping from unregistered '{}'", connection_id);
        }
        deliver_all(self.message_pusher.as_ref(), deliveries).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockMessagePusher, OutboundEvent, Recipients, Timestamp},
        usecase::testing::{connection, test_room},
    };

    #[tokio::test]
    async fn test_typing_excludes_sender() {
        // テスト項目: 入力中通知は本人以外に中継される
        // given (前提条件):
        let room = test_room();
        room.lock()
            .await
            .join(&connection("a"), "bob", Timestamp::new(0))
            .unwrap();
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_push()
            .withf(|recipients, event| {
                matches!(recipients, Recipients::AllExcept(id) if id.as_str() == "a")
                    && matches!(event, OutboundEvent::UserTyping(name) if name.as_str() == "bob")
            })
            .times(1)
            .returning(|_, _| Ok(1));
        pusher
            .expect_push()
            .withf(|recipients, event| {
                matches!(recipients, Recipients::AllExcept(id) if id.as_str() == "a")
                    && matches!(
                        event,
                        OutboundEvent::UserStoppedTyping(name) if name.as_str() == "bob"
                    )
            })
            .times(1)
            .returning(|_, _| Ok(1));
        let usecase = RelayTypingUseCase::new(room, Arc::new(pusher));

        // when (操作) / then (期待する結果): モックの期待値で検証
        usecase.start(&connection("a")).await;
        usecase.stop(&connection("a")).await;
    }

    #[tokio::test]
    async fn test_typing_from_unregistered_is_ignored() {
        // テスト項目: 未参加の接続からの入力中通知は何も配信しない
        // given (前提条件):
        let room = test_room();
        let mut pusher = MockMessagePusher::new();
        pusher.expect_push().never();
        let usecase = RelayTypingUseCase::new(room, Arc::new(pusher));

        // when (操作) / then (期待する結果):
        usecase.start(&connection("x")).await;
        usecase.stop(&connection("x")).await;
    }
}
