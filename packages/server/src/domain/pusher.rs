//! MessagePusher trait 定義
//!
//! ドメイン層が必要とする「接続へのイベント配信」のインターフェース。
//! 具体的な実装（WebSocket）は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{
    error::MessagePushError,
    event::{OutboundEvent, Recipients},
    value_object::ConnectionId,
};

/// クライアントへの送信用チャンネル（エンコード済みのフレームを流す）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
///
/// トランスポートに接続中の全てのコネクション（参加登録の有無を問わない）を管理し、
/// `Recipients` で指定された対象にイベントを配信する。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を配信対象として登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続を配信対象から外す（未登録なら何もしない）
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// イベントを配信し、実際に届けた接続数を返す
    ///
    /// ブロードキャストでは切断済みの接続への送信失敗を許容する。
    /// `Recipients::Only` の対象が存在しない場合は `MessagePushError::ClientNotFound`。
    async fn push(
        &self,
        recipients: &Recipients,
        event: &OutboundEvent,
    ) -> Result<usize, MessagePushError>;
}
