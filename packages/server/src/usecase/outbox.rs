//! Delivery helpers shared by the use cases.

use crate::domain::{ConnectionId, Delivery, HubError, MessagePusher, OutboundEvent};

/// Push every delivery in order. Failures are logged and never abort the batch.
pub(super) async fn deliver_all(message_pusher: &dyn MessagePusher, deliveries: Vec<Delivery>) {
    for delivery in deliveries {
        match message_pusher
            .push(&delivery.recipients, &delivery.event)
            .await
        {
            Ok(count) => {
                tracing::debug!("Delivered {:?} to {} connection(s)", delivery.recipients, count);
            }
            Err(e) => {
                tracing::warn!("Failed to deliver to {:?}: {}", delivery.recipients, e);
            }
        }
    }
}

/// Report a protocol error to the originating connection only.
pub(super) async fn reject(
    message_pusher: &dyn MessagePusher,
    connection_id: &ConnectionId,
    error: &HubError,
) {
    deliver_all(
        message_pusher,
        vec![Delivery::only(
            connection_id,
            OutboundEvent::Error(error.to_string()),
        )],
    )
    .await;
}
