//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理（参加登録の有無を問わない）
//! - ドメインイベントを JSON フレームにエンコードし、`Recipients` に従って送信
//!
//! ## 設計ノート
//!
//! WebSocket の受け付けと sender の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! 送信先の socket への書き込みは UI 層の pusher ループが担当するため、
//! ここでの送信はブロックしません。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{
        ConnectionId, MessagePushError, MessagePusher, OutboundEvent, PusherChannel, Recipients,
    },
    infrastructure::dto::websocket::ServerEvent,
};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let clients = Arc::new(Mutex::new(HashMap::new()));
/// let pusher = WebSocketMessagePusher::new(clients.clone());
///
/// pusher.register_client(connection_id.clone(), tx).await;
/// pusher.push(&Recipients::All, &event).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの WebSocket sender
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }

    /// 接続中のクライアント数
    pub async fn count_clients(&self) -> usize {
        self.clients.lock().await.len()
    }

    fn encode(event: &OutboundEvent) -> Result<String, MessagePushError> {
        serde_json::to_string(&ServerEvent::from(event.clone()))
            .map_err(|e| MessagePushError::Encode(e.to_string()))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("Client '{}' registered to MessagePusher", connection_id);
        clients.insert(connection_id, sender);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!("Client '{}' unregistered from MessagePusher", connection_id);
    }

    async fn push(
        &self,
        recipients: &Recipients,
        event: &OutboundEvent,
    ) -> Result<usize, MessagePushError> {
        let frame = Self::encode(event)?;
        let clients = self.clients.lock().await;

        if let Recipients::Only(target) = recipients {
            let sender = clients
                .get(target)
                .ok_or_else(|| MessagePushError::ClientNotFound(target.to_string()))?;
            sender
                .send(frame)
                .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
            tracing::debug!("Pushed message to client '{}'", target);
            return Ok(1);
        }

        let mut delivered = 0;
        for (connection_id, sender) in clients.iter() {
            if !recipients.includes(connection_id) {
                continue;
            }
            // ブロードキャストでは切断済みの接続への送信失敗を許容
            if let Err(e) = sender.send(frame.clone()) {
                tracing::warn!(
                    "Failed to push message to client '{}': {}",
                    connection_id,
                    e
                );
            } else {
                delivered += 1;
            }
        }
        tracing::debug!("Broadcasted message to {} client(s)", delivered);

        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Username;
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - Recipients ごとの配信対象の選定
    // - イベントが JSON フレームにエンコードされること
    // - エラーハンドリング（存在しないクライアント、切断済みのチャンネル）
    //
    // 【なぜこのテストが必要か】
    // - MessagePusher は UseCase から呼ばれる通信層の中核
    // - 送信者除外のブロードキャストが正しく行われることを保証する必要がある
    // ========================================

    fn create_test_pusher() -> WebSocketMessagePusher {
        WebSocketMessagePusher::new(Arc::new(Mutex::new(HashMap::new())))
    }

    fn connection(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    fn typing(name: &str) -> OutboundEvent {
        OutboundEvent::UserTyping(Username::new(name).unwrap())
    }

    async fn attach(
        pusher: &WebSocketMessagePusher,
        id: &str,
    ) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        pusher.register_client(connection(id), tx).await;
        rx
    }

    #[tokio::test]
    async fn test_push_only_success() {
        // テスト項目: 特定のクライアントにエンコード済みのイベントを送信できる
        // given (前提条件):
        let pusher = create_test_pusher();
        let mut rx_a = attach(&pusher, "a").await;
        let mut rx_b = attach(&pusher, "b").await;

        // when (操作):
        let result = pusher
            .push(&Recipients::Only(connection("a")), &typing("bob"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(1));
        assert_eq!(
            rx_a.recv().await,
            Some(r#"{"type":"userTyping","username":"bob"}"#.to_string())
        );
        assert!(rx_b.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_push_only_client_not_found() {
        // テスト項目: 存在しないクライアントへの送信はエラーを返す
        // given (前提条件):
        let pusher = create_test_pusher();

        // when (操作):
        let result = pusher
            .push(&Recipients::Only(connection("ghost")), &typing("bob"))
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(MessagePushError::ClientNotFound("ghost".to_string()))
        );
    }

    #[tokio::test]
    async fn test_broadcast_all_except_sender() {
        // テスト項目: 送信者以外の全員にブロードキャストされる
        // given (前提条件):
        let pusher = create_test_pusher();
        let mut rx_a = attach(&pusher, "a").await;
        let mut rx_b = attach(&pusher, "b").await;
        let mut rx_c = attach(&pusher, "c").await;

        // when (操作):
        let result = pusher
            .push(&Recipients::AllExcept(connection("a")), &typing("bob"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Ok(2));
        assert!(rx_a.try_recv().is_err());
        assert!(rx_b.recv().await.is_some());
        assert!(rx_c.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_broadcast_all() {
        // テスト項目: All は全ての接続に届く
        // given (前提条件):
        let pusher = create_test_pusher();
        let mut rx_a = attach(&pusher, "a").await;
        let mut rx_b = attach(&pusher, "b").await;

        // when (操作):
        let result = pusher.push(&Recipients::All, &typing("bob")).await;

        // then (期待する結果):
        assert_eq!(result, Ok(2));
        assert!(rx_a.recv().await.is_some());
        assert!(rx_b.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_broadcast_tolerates_closed_channel() {
        // テスト項目: 切断済みの接続が混ざっていてもブロードキャストは成功する
        // given (前提条件):
        let pusher = create_test_pusher();
        let rx_gone = attach(&pusher, "gone").await;
        drop(rx_gone);
        let mut rx_b = attach(&pusher, "b").await;

        // when (操作):
        let result = pusher.push(&Recipients::All, &typing("bob")).await;

        // then (期待する結果):
        assert_eq!(result, Ok(1));
        assert!(rx_b.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_unregister_client() {
        // テスト項目: 登録解除したクライアントには届かない
        // given (前提条件):
        let pusher = create_test_pusher();
        let _rx_a = attach(&pusher, "a").await;
        assert_eq!(pusher.count_clients().await, 1);

        // when (操作):
        pusher.unregister_client(&connection("a")).await;
        pusher.unregister_client(&connection("a")).await;

        // then (期待する結果):
        assert_eq!(pusher.count_clients().await, 0);
        assert_eq!(pusher.push(&Recipients::All, &typing("bob")).await, Ok(0));
    }

    #[tokio::test]
    async fn test_broadcast_empty() {
        // テスト項目: 接続が無くてもエラーにならない
        // given (前提条件):
        let pusher = create_test_pusher();

        // when (操作):
        let result = pusher.push(&Recipients::All, &typing("bob")).await;

        // then (期待する結果):
        assert_eq!(result, Ok(0));
    }
}
