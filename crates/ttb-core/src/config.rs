use std::{env, time::Duration};

use crate::{errors::Error, Result};

pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Typed configuration for the translation bot.
///
/// Only the bot token is required; everything else has a default matching
/// the behaviour of the bot as deployed.
#[derive(Clone, Debug)]
pub struct Config {
    // Core
    pub telegram_bot_token: String,
    pub drop_pending_updates: bool,

    // Message pipeline
    pub max_message_len: usize,
    pub min_message_len: usize,
    pub original_preview_len: usize,

    // Translation engine
    pub translate_api_url: String,
    pub translate_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram_bot_token: String::new(),
            drop_pending_updates: true,
            max_message_len: 1000,
            min_message_len: 2,
            original_preview_len: 200,
            translate_api_url: DEFAULT_TRANSLATE_API_URL.to_string(),
            translate_timeout: Duration::from_millis(5000),
        }
    }
}

impl Config {
    /// Load from the process environment (after an optional `.env`).
    pub fn load() -> Result<Self> {
        // Existing env vars win over `.env` entries.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let telegram_bot_token = lookup("BOT_TOKEN")
            .and_then(non_empty)
            .or_else(|| lookup("TELEGRAM_BOT_TOKEN").and_then(non_empty))
            .ok_or_else(|| {
                Error::Config("BOT_TOKEN environment variable is required".to_string())
            })?;

        let max_message_len = parse_usize(&lookup, "MAX_MESSAGE_LENGTH")?
            .unwrap_or(defaults.max_message_len);
        let min_message_len = parse_usize(&lookup, "MIN_MESSAGE_LENGTH")?
            .unwrap_or(defaults.min_message_len);
        if min_message_len > max_message_len {
            return Err(Error::Config(format!(
                "MIN_MESSAGE_LENGTH ({min_message_len}) exceeds MAX_MESSAGE_LENGTH ({max_message_len})"
            )));
        }
        let original_preview_len = parse_usize(&lookup, "ORIGINAL_PREVIEW_LENGTH")?
            .unwrap_or(defaults.original_preview_len);

        let translate_api_url = lookup("TRANSLATE_API_URL")
            .and_then(non_empty)
            .unwrap_or(defaults.translate_api_url);
        let translate_timeout = parse_u64(&lookup, "TRANSLATE_TIMEOUT_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.translate_timeout);
        if translate_timeout.is_zero() {
            return Err(Error::Config(
                "TRANSLATE_TIMEOUT_MS must be greater than zero".to_string(),
            ));
        }

        let drop_pending_updates = lookup("DROP_PENDING_UPDATES")
            .map(|s| parse_bool(&s))
            .unwrap_or(defaults.drop_pending_updates);

        Ok(Self {
            telegram_bot_token,
            drop_pending_updates,
            max_message_len,
            min_message_len,
            original_preview_len,
            translate_api_url,
            translate_timeout,
        })
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<usize>> {
    let Some(raw) = lookup(key).and_then(non_empty) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|e| Error::Config(format!("{key}: invalid number {raw:?}: {e}")))
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<u64>> {
    let Some(raw) = lookup(key).and_then(non_empty) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|e| Error::Config(format!("{key}: invalid number {raw:?}: {e}")))
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    fn blank_token_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("BOT_TOKEN", "   ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let cfg = Config::from_lookup(lookup_from(&[("BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(cfg.telegram_bot_token, "123:abc");
        assert_eq!(cfg.max_message_len, 1000);
        assert_eq!(cfg.min_message_len, 2);
        assert_eq!(cfg.original_preview_len, 200);
        assert_eq!(cfg.translate_timeout, Duration::from_millis(5000));
        assert_eq!(cfg.translate_api_url, DEFAULT_TRANSLATE_API_URL);
        assert!(cfg.drop_pending_updates);
    }

    #[test]
    fn telegram_bot_token_is_accepted_as_fallback() {
        let cfg =
            Config::from_lookup(lookup_from(&[("TELEGRAM_BOT_TOKEN", "456:def")])).unwrap();
        assert_eq!(cfg.telegram_bot_token, "456:def");
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "t"),
            ("MAX_MESSAGE_LENGTH", "500"),
            ("TRANSLATE_TIMEOUT_MS", "1500"),
            ("DROP_PENDING_UPDATES", "no"),
        ]))
        .unwrap();
        assert_eq!(cfg.max_message_len, 500);
        assert_eq!(cfg.translate_timeout, Duration::from_millis(1500));
        assert!(!cfg.drop_pending_updates);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "t"),
            ("MAX_MESSAGE_LENGTH", "lots"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("MAX_MESSAGE_LENGTH"));

        let err = Config::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "t"),
            ("TRANSLATE_TIMEOUT_MS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
