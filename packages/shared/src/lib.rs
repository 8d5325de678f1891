//! Utilities shared by the Causette binaries: logger setup and time helpers.

pub mod logger;
pub mod time;
