//! Chat-platform abstractions (Telegram is the only implementation).

pub mod port;
pub mod types;
