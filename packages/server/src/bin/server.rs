//! Real-time chat room server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin causette-server
//! cargo run --bin causette-server -- --host 0.0.0.0 --port 3000
//! PORT=8080 cargo run --bin causette-server
//! ```

use std::{collections::HashMap, sync::Arc};

use causette_server::{
    domain::ChatRoom,
    infrastructure::message_pusher::WebSocketMessagePusher,
    ui::Server,
    usecase::{
        GetRoomStateUseCase, Hub, JoinChatUseCase, LeaveChatUseCase, RelayTypingUseCase,
        SendMessageUseCase, new_shared_room,
    },
};
use causette_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};
use clap::Parser;
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "causette-server")]
#[command(about = "Real-time chat room server over WebSocket", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_BIN_NAME"),
        &args.log_level,
    );

    // Initialize dependencies in order:
    // 1. Shared room (roster + history)
    // 2. MessagePusher
    // 3. UseCases and Hub
    // 4. Server

    // 1. Create the shared room
    let room = new_shared_room(ChatRoom::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 3. Create UseCases
    let join_chat_usecase = Arc::new(JoinChatUseCase::new(
        room.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        room.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));
    let relay_typing_usecase = Arc::new(RelayTypingUseCase::new(
        room.clone(),
        message_pusher.clone(),
    ));
    let leave_chat_usecase = Arc::new(LeaveChatUseCase::new(
        room.clone(),
        message_pusher.clone(),
        clock,
    ));
    let get_room_state_usecase = Arc::new(GetRoomStateUseCase::new(room));
    let hub = Arc::new(Hub::new(
        join_chat_usecase,
        send_message_usecase,
        relay_typing_usecase,
        leave_chat_usecase,
    ));

    // 4. Create and run the server
    let server = Server::new(hub, message_pusher, get_room_state_usecase);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
