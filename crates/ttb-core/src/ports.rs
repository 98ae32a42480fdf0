use async_trait::async_trait;

use crate::{domain::LanguageCode, Result};

/// Hexagonal port for the language detection/translation engine.
///
/// Implementations perform network I/O; callers bound each call with a timeout.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Detect the source language of `text`.
    async fn detect(&self, text: &str) -> Result<LanguageCode>;

    /// Translate `text` (source auto-detected) into `target`.
    async fn translate(&self, text: &str, target: &str) -> Result<String>;
}
