//! WebSocket connection handlers.
//!
//! This is the only place that touches a socket. Each accepted socket gets a
//! fresh connection id, an outbound channel registered with the
//! `MessagePusher`, and a receive loop that turns frames into `InboundEvent`s.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::{mpsc, oneshot};

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, InboundEvent},
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
    usecase::Hub,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// # Arguments
///
/// * `rx` - Channel receiver for frames addressed to this connection
/// * `sender` - WebSocket sink to send frames to this client
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Spawns a task that parses incoming frames and dispatches them to the hub.
///
/// Malformed frames and unknown event types are logged and ignored. The loop
/// only checks `closed` between frames, so a dispatch in progress always runs
/// to completion.
fn receive_loop(
    mut receiver: futures_util::stream::SplitStream<WebSocket>,
    hub: Arc<Hub>,
    connection_id: ConnectionId,
    mut closed: oneshot::Receiver<()>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let next = tokio::select! {
                biased;
                _ = &mut closed => break,
                next = receiver.next() => next,
            };
            let Some(msg) = next else {
                break;
            };
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!(
                                "Ignoring malformed frame from '{}': {}",
                                connection_id,
                                e
                            );
                            continue;
                        }
                    };

                    if let Err(e) = hub
                        .dispatch(event.into_inbound(connection_id.clone()))
                        .await
                    {
                        tracing::debug!("Event from '{}' rejected: {}", connection_id, e);
                    }
                }
                Message::Binary(_) => {
                    tracing::warn!("Ignoring binary frame from '{}'", connection_id);
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = match ConnectionIdFactory::generate() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to assign connection id: {}", e);
            return;
        }
    };
    let (sender, receiver) = socket.split();

    // Register the outbound channel before reading any frame
    let (tx, rx) = mpsc::unbounded_channel();
    state
        .message_pusher
        .register_client(connection_id.clone(), tx)
        .await;
    tracing::info!("Connection '{}' opened", connection_id);

    let (closed_tx, closed_rx) = oneshot::channel();
    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = receive_loop(
        receiver,
        state.hub.clone(),
        connection_id.clone(),
        closed_rx,
    );

    // The pusher loop holds no hub state and can be aborted. The receive
    // loop is told to stop and awaited so it never dies mid-dispatch.
    let send_finished_first = tokio::select! {
        _ = &mut recv_task => false,
        _ = &mut send_task => true,
    };
    if send_finished_first {
        let _ = closed_tx.send(());
        if let Err(e) = recv_task.await {
            tracing::warn!("Receive loop of '{}' failed: {}", connection_id, e);
        }
    } else {
        send_task.abort();
    }

    // The connection is gone: stop delivering to it, then let the hub announce the departure
    state.message_pusher.unregister_client(&connection_id).await;
    if let Err(e) = state
        .hub
        .dispatch(InboundEvent::Disconnect {
            connection_id: connection_id.clone(),
        })
        .await
    {
        tracing::warn!("Failed to process disconnect of '{}': {}", connection_id, e);
    }
    tracing::info!("Connection '{}' closed", connection_id);
}
