//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 履歴への追加と全員へのブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済みの接続からの送信
//! - 異常系：未参加の接続からの送信（本人にだけエラー）
//! - エッジケース：空白のみのメッセージ（何もしない）

use std::sync::Arc;

use causette_shared::time::Clock;

use crate::domain::{ConnectionId, HubError, MessagePusher, Timestamp};

use super::{
    SharedRoom,
    outbox::{deliver_all, reject},
};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    room: SharedRoom,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
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

    /// メッセージ送信を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 送信成功、または空白のみのため無視
    /// * `Err(HubError::NotJoined)` - 未参加の接続からの送信
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        raw_text: &str,
    ) -> Result<(), HubError> {
        let mut room = self.room.lock().await;
        let now = Timestamp::new(self.clock.now_millis());

        match room.send_message(connection_id, raw_text, now) {
            Ok(deliveries) => {
                if deliveries.is_empty() {
                    tracing::debug!("Ignored blank message from '{}'", connection_id);
                }
                deliver_all(self.message_pusher.as_ref(), deliveries).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected message from '{}': {:?}", connection_id, e);
                reject(self.message_pusher.as_ref(), connection_id, &e).await;
                Err(e)
            }
        }
    }
}
