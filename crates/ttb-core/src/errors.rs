use std::time::Duration;

/// Core error type for the translation bot.
///
/// Adapter crates map their specific errors into this type so handlers can
/// apply one policy: log, never surface engine failures to the chat.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("{op} timed out after {}ms", .after.as_millis())]
    Timeout { op: &'static str, after: Duration },

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
