//! Google Translate adapter (language detection + translation).
//!
//! Talks to the public `translate_a/single` endpoint with `client=gtx`, which
//! needs no API key. The response is a positional JSON array:
//! `[[["Hello world","Bonjour le monde",...], ...], null, "fr", ...]`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use ttb_core::{config::Config, domain::LanguageCode, errors::Error, ports::Translator, Result};

#[derive(Clone, Debug)]
pub struct GoogleTranslator {
    endpoint: String,
    http: reqwest::Client,
}

/// Parsed `translate_a/single` payload.
#[derive(Clone, Debug, PartialEq, Eq)]
struct GtxResponse {
    translated: String,
    source: Option<String>,
}

impl GoogleTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Translation(format!("http client build failed: {e}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(cfg.translate_api_url.clone(), cfg.translate_timeout)
    }

    async fn query(&self, text: &str, target: &str) -> Result<GtxResponse> {
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| Error::Translation(format!("google request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Translation(format!(
                "google translate failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let v: Value = resp
            .json()
            .await
            .map_err(|e| Error::Translation(format!("google json error: {e}")))?;

        parse_gtx(&v)
    }
}

fn parse_gtx(v: &Value) -> Result<GtxResponse> {
    let segments = v
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Translation("google response has no segments".to_string()))?;

    let translated = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect::<String>();

    let source = v
        .get(2)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string);

    Ok(GtxResponse { translated, source })
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn detect(&self, text: &str) -> Result<LanguageCode> {
        let out = self.query(text, ttb_core::languages::ENGLISH).await?;
        let code = out
            .source
            .ok_or_else(|| Error::Translation("google could not detect a language".to_string()))?;
        tracing::debug!("google detected {code}");
        Ok(LanguageCode::new(code))
    }

    async fn translate(&self, text: &str, target: &str) -> Result<String> {
        let out = self.query(text, target).await?;
        Ok(out.translated)
    }
}
