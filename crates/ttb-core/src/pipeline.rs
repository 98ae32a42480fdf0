//! Translation pipeline for plain text messages.
//!
//! Each inbound message runs through a fixed sequence of guards; the first
//! failing guard ends processing without side effects. Eligible messages are
//! detected, translated to English, and answered with exactly one reply.
//! Engine failures are logged and never reported to the chat.

use std::{future::Future, sync::Arc, time::Duration};

use crate::{
    config::Config,
    domain::LanguageCode,
    errors::Error,
    formatting::{translation_reply, truncate_chars},
    languages::{ENGLISH, UNKNOWN_LANGUAGE},
    messaging::{port::ChatPort, types::InboundMessage},
    ports::Translator,
    settings::SettingsStore,
    Result,
};

#[derive(Clone, Copy, Debug)]
pub struct PipelinePolicy {
    /// Minimum length of the trimmed text, in characters.
    pub min_len: usize,
    /// Maximum length of the raw text, in characters. Longer messages are dropped silently.
    pub max_len: usize,
    /// How much of the original is echoed back under the translation.
    pub preview_len: usize,
    /// Bound for each detect/translate call.
    pub call_timeout: Duration,
}

impl PipelinePolicy {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            min_len: cfg.min_message_len,
            max_len: cfg.max_message_len,
            preview_len: cfg.original_preview_len,
            call_timeout: cfg.translate_timeout,
        }
    }
}

impl Default for PipelinePolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Why a message produced no reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NoSender,
    BotSender,
    ChannelForward,
    Disabled,
    TooShort,
    Command,
    TooLong,
    AlreadyEnglish,
    TranslationFailed,
    Unchanged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Skip(SkipReason),
}

pub struct TranslationPipeline {
    settings: Arc<SettingsStore>,
    translator: Arc<dyn Translator>,
    policy: PipelinePolicy,
}

impl TranslationPipeline {
    pub fn new(
        settings: Arc<SettingsStore>,
        translator: Arc<dyn Translator>,
        policy: PipelinePolicy,
    ) -> Self {
        Self {
            settings,
            translator,
            policy,
        }
    }

    pub fn policy(&self) -> PipelinePolicy {
        self.policy
    }

    /// Run the eligibility guards and return the trimmed text to translate.
    pub async fn eligible_text<'a>(
        &self,
        msg: &'a InboundMessage,
    ) -> std::result::Result<&'a str, SkipReason> {
        let Some(sender) = msg.sender.as_ref() else {
            return Err(SkipReason::NoSender);
        };
        if sender.is_bot {
            return Err(SkipReason::BotSender);
        }

        if msg.forward_origin.is_some_and(|o| o.is_channel()) {
            return Err(SkipReason::ChannelForward);
        }

        if msg.chat_kind.is_group_like() && !self.settings.is_enabled(msg.message.chat_id).await
        {
            return Err(SkipReason::Disabled);
        }

        let Some(raw) = msg.text.as_deref() else {
            return Err(SkipReason::TooShort);
        };
        let text = raw.trim();
        if text.chars().count() < self.policy.min_len {
            return Err(SkipReason::TooShort);
        }

        if msg.is_command || raw.starts_with('/') {
            return Err(SkipReason::Command);
        }

        if raw.chars().count() > self.policy.max_len {
            return Err(SkipReason::TooLong);
        }

        Ok(text)
    }

    /// Decide whether and how to answer `msg`. Performs no chat I/O.
    pub async fn process(&self, msg: &InboundMessage) -> Outcome {
        let text = match self.eligible_text(msg).await {
            Ok(t) => t,
            Err(reason) => return Outcome::Skip(reason),
        };

        let detected = match self.bounded("detect", self.translator.detect(text)).await {
            Ok(code) => {
                tracing::info!(
                    "Detected language: {code} for text: {}",
                    truncate_chars(text, 50)
                );
                if code.is_english() {
                    return Outcome::Skip(SkipReason::AlreadyEnglish);
                }
                code
            }
            Err(e) => {
                tracing::warn!("Language detection failed: {e}");
                LanguageCode::new(UNKNOWN_LANGUAGE)
            }
        };

        let translated = match self
            .bounded("translate", self.translator.translate(text, ENGLISH))
            .await
        {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Translation failed: {e}");
                return Outcome::Skip(SkipReason::TranslationFailed);
            }
        };

        let translated = translated.trim();
        if translated.is_empty() || translated == text {
            tracing::info!("Translation same as original, skipping");
            return Outcome::Skip(SkipReason::Unchanged);
        }

        Outcome::Reply(translation_reply(
            detected.as_str(),
            translated,
            text,
            self.policy.preview_len,
        ))
    }

    /// Process `msg` and send the reply, if any. Returns whether a reply was sent.
    pub async fn handle(&self, port: &dyn ChatPort, msg: &InboundMessage) -> Result<bool> {
        match self.process(msg).await {
            Outcome::Reply(html) => {
                port.reply(msg.message, &html).await?;
                Ok(true)
            }
            Outcome::Skip(reason) => {
                tracing::debug!(
                    chat_id = msg.message.chat_id.0,
                    message_id = msg.message.message_id.0,
                    "skipping message: {reason:?}"
                );
                Ok(false)
            }
        }
    }

    async fn bounded<T>(&self, op: &'static str, fut: impl Future<Output = Result<T>>) -> Result<T> {
        let after = self.policy.call_timeout;
        match tokio::time::timeout(after, fut).await {
            Ok(res) => res,
            Err(_) => Err(Error::Timeout { op, after }),
        }
    }
}
