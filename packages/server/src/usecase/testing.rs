//! Test doubles for the use case layer.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use causette_shared::time::FixedClock;
use tokio::sync::Mutex;

use crate::domain::{
    ChatRoom, ConnectionId, MessagePushError, MessagePusher, OutboundEvent, PusherChannel,
    Recipients,
};

use super::{SharedRoom, new_shared_room};

/// Records every push in call order.
#[derive(Default)]
pub(crate) struct RecordingPusher {
    pushed: Mutex<Vec<(Recipients, OutboundEvent)>>,
}

impl RecordingPusher {
    pub(crate) async fn pushed(&self) -> Vec<(Recipients, OutboundEvent)> {
        self.pushed.lock().await.clone()
    }
}

#[async_trait]
impl MessagePusher for RecordingPusher {
    async fn register_client(&self, _connection_id: ConnectionId, _sender: PusherChannel) {}

    async fn unregister_client(&self, _connection_id: &ConnectionId) {}

    async fn push(
        &self,
        recipients: &Recipients,
        event: &OutboundEvent,
    ) -> Result<usize, MessagePushError> {
        self.pushed
            .lock()
            .await
            .push((recipients.clone(), event.clone()));
        Ok(1)
    }
}

/// Records like [`RecordingPusher`] but takes `delay` per push.
pub(crate) struct SlowPusher {
    delay: Duration,
    inner: RecordingPusher,
}

impl SlowPusher {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: RecordingPusher::default(),
        }
    }

    pub(crate) async fn pushed(&self) -> Vec<(Recipients, OutboundEvent)> {
        self.inner.pushed().await
    }
}

#[async_trait]
impl MessagePusher for SlowPusher {
    async fn register_client(&self, _connection_id: ConnectionId, _sender: PusherChannel) {}

    async fn unregister_client(&self, _connection_id: &ConnectionId) {}

    async fn push(
        &self,
        recipients: &Recipients,
        event: &OutboundEvent,
    ) -> Result<usize, MessagePushError> {
        tokio::time::sleep(self.delay).await;
        self.inner.push(recipients, event).await
    }
}

pub(crate) fn connection(id: &str) -> ConnectionId {
    ConnectionId::new(id.to_string()).unwrap()
}

pub(crate) fn test_room() -> SharedRoom {
    new_shared_room(ChatRoom::new())
}

pub(crate) fn test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(1_700_000_000_000))
}
