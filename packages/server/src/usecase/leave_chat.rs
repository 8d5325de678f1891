//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveChatUseCase::execute() メソッド
//! - Roster からの削除、退出通知の履歴追加と残りの接続への配信
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済みの接続の切断
//! - エッジケース：未参加の接続の切断、二重の切断通知（何もしない）

use std::sync::Arc;

use causette_shared::time::Clock;

use crate::domain::{ConnectionId, MessagePusher, Timestamp, User};

use super::{SharedRoom, outbox::deliver_all};

/// 切断のユースケース
pub struct LeaveChatUseCase {
    room: SharedRoom,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl LeaveChatUseCase {
    /// 新しい LeaveChatUseCase を作成
    pub fn new(
        room: SharedRoom,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            room,
            message_pusher,
            clock,
        }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// 退出したユーザー（未参加の接続なら `None`）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<User> {
        let mut room = self.room.lock().await;
        let user = room.roster().lookup(connection_id).cloned();
        let now = Timestamp::new(self.clock.now_millis());

        let deliveries = room.leave(connection_id, now);
        match &user {
            Some(user) => tracing::info!(
                "'{}' left the chat ({} online)",
                user.username,
                room.roster().len()
            ),
            None => tracing::debug!("Connection '{}' closed without joining", connection_id),
        }
        deliver_all(self.message_pusher.as_ref(), deliveries).await;

        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{OutboundEvent, Recipients},
        usecase::testing::{RecordingPusher, connection, test_clock, test_room},
    };

    #[tokio::test]
    async fn test_leave_notifies_remaining() {
        // テスト項目: 切断した参加者が削除され、残りの接続に通知される
        // given (前提条件):
        let room = test_room();
        {
            let mut guard = room.lock().await;
            guard
                .join(&connection("a"), "bob", Timestamp::new(0))
                .unwrap();
            guard
                .join(&connection("b"), "carol", Timestamp::new(1))
                .unwrap();
        }
        let pusher = Arc::new(RecordingPusher::default());
        let usecase = LeaveChatUseCase::new(room.clone(), pusher.clone(), test_clock());

        // when (操作):
        let left = usecase.execute(&connection("b")).await;

        // then (期待する結果):
        assert_eq!(left.unwrap().username.as_str(), "carol");
        let pushed = pusher.pushed().await;
        assert_eq!(pushed.len(), 3);
        assert!(
            pushed
                .iter()
                .all(|(recipients, _)| recipients == &Recipients::AllExcept(connection("b")))
        );
        assert!(matches!(
            &pushed[0].1,
            OutboundEvent::UserLeft(user) if user.username.as_str() == "carol"
        ));
        assert!(matches!(&pushed[1].1, OutboundEvent::UsersList(users) if users.len() == 1));
        assert!(matches!(
            &pushed[2].1,
            OutboundEvent::NewMessage(message) if message.text.as_str() == "carol a quitté le chat"
        ));
        assert_eq!(room.lock().await.roster().len(), 1);
    }

    #[tokio::test]
    async fn test_leave_without_join_is_noop() {
        // テスト項目: 未参加の接続の切断は何も配信しない（冪等性）
        // given (前提条件):
        let room = test_room();
        let pusher = Arc::new(RecordingPusher::default());
        let usecase = LeaveChatUseCase::new(room.clone(), pusher.clone(), test_clock());

        // when (操作):
        let first = usecase.execute(&connection("x")).await;
        let second = usecase.execute(&connection("x")).await;

        // then (期待する結果):
        assert!(first.is_none());
        assert!(second.is_none());
        assert!(pusher.pushed().await.is_empty());
        assert!(room.lock().await.history().is_empty());
    }
}
