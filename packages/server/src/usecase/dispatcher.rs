//! Hub: routes tagged inbound events to their use case.

use std::sync::Arc;

use crate::domain::{HubError, InboundEvent};

use super::{JoinChatUseCase, LeaveChatUseCase, RelayTypingUseCase, SendMessageUseCase};

/// Entry point of the chat hub for the transport layer.
///
/// The transport converts every frame (and the final close) into an
/// `InboundEvent` and hands it to [`Hub::dispatch`].
#[derive(Clone)]
pub struct Hub {
    join_chat_usecase: Arc<JoinChatUseCase>,
    send_message_usecase: Arc<SendMessageUseCase>,
    relay_typing_usecase: Arc<RelayTypingUseCase>,
    leave_chat_usecase: Arc<LeaveChatUseCase>,
}

impl Hub {
    pub fn new(
        join_chat_usecase: Arc<JoinChatUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        relay_typing_usecase: Arc<RelayTypingUseCase>,
        leave_chat_usecase: Arc<LeaveChatUseCase>,
    ) -> Self {
        Self {
            join_chat_usecase,
            send_message_usecase,
            relay_typing_usecase,
            leave_chat_usecase,
        }
    }

    /// Handle one inbound event.
    ///
    /// Protocol errors have already been reported to the originating
    /// connection when this returns `Err`.
    ///
    /// The event runs on its own task, so dropping or aborting the caller
    /// never leaves a state change with only part of its events pushed.
    pub async fn dispatch(&self, event: InboundEvent) -> Result<(), HubError> {
        tracing::debug!(
            "Dispatching '{}' from '{}'",
            event.name(),
            event.connection_id()
        );

        let hub = self.clone();
        match tokio::spawn(async move { hub.route(event).await }).await {
            Ok(result) => result,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                tracing::error!("Dispatch task did not complete: {}", e);
                Ok(())
            }
        }
    }

    async fn route(&self, event: InboundEvent) -> Result<(), HubError> {
        match event {
            InboundEvent::Join {
                connection_id,
                username,
            } => {
                self.join_chat_usecase
                    .execute(&connection_id, &username)
                    .await
            }
            InboundEvent::SendMessage {
                connection_id,
                text,
            } => self.send_message_usecase.execute(&connection_id, &text).await,
            InboundEvent::Typing { connection_id } => {
                self.relay_typing_usecase.start(&connection_id).await;
                Ok(())
            }
            InboundEvent::StopTyping { connection_id } => {
                self.relay_typing_usecase.stop(&connection_id).await;
                Ok(())
            }
            InboundEvent::Disconnect { connection_id } => {
                self.leave_chat_usecase.execute(&connection_id).await;
                Ok(())
            }
        }
    }
}
