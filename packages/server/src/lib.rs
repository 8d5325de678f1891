//! Real-time chat room server.
//!
//! The hub keeps the roster of registered users and a bounded message
//! history, enforces the join protocol, and fans events out to WebSocket
//! connections.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
