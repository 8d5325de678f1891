//! UseCase: チャット参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinChatUseCase::execute() メソッド
//! - ユーザー登録（trim、重複チェック）と参加通知の配信順序
//!
//! ### なぜこのテストが必要か
//! - 参加者本人と他の接続で受け取るイベントが異なる
//! - 失敗時は本人にだけエラーが届き、状態が変化しないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加
//! - 異常系：空のユーザー名、使用中のユーザー名

use std::sync::Arc;

use causette_shared::time::Clock;

use crate::domain::{ConnectionId, HubError, MessagePusher, Timestamp};

use super::{
    SharedRoom,
    outbox::{deliver_all, reject},
};

/// チャット参加のユースケース
pub struct JoinChatUseCase {
    /// 共有チャットルーム
    room: SharedRoom,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 参加時刻の取得元
    clock: Arc<dyn Clock>,
}

impl JoinChatUseCase {
    /// 新しい JoinChatUseCase を作成
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

    /// チャット参加を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 参加する接続の ID
    /// * `raw_username` - クライアントが送ってきたユーザー名（未加工）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 参加成功（イベントは配信済み）
    /// * `Err(HubError)` - 参加失敗（本人にエラーイベントを配信済み）
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        raw_username: &str,
    ) -> Result<(), HubError> {
        let mut room = self.room.lock().await;
        let now = Timestamp::new(self.clock.now_millis());

        match room.join(connection_id, raw_username, now) {
            Ok(deliveries) => {
                tracing::info!(
                    "Connection '{}' joined as '{}' ({} online)",
                    connection_id,
                    raw_username.trim(),
                    room.roster().len()
                );
                deliver_all(self.message_pusher.as_ref(), deliveries).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected join from '{}': {:?}", connection_id, e);
                reject(self.message_pusher.as_ref(), connection_id, &e).await;
                Err(e)
            }
        }
    }
}
