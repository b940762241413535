//! Upstream translation client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{TranslationRequest, TranslationResult};

/// The external translation capability
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate a single request
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult>;
}

/// Translation client backed by the provider's HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl HttpTranslator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| TranslationError::ConfigError {
                message: e.to_string(),
            })?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::load().map_err(|e| TranslationError::ConfigError {
            message: e.to_string(),
        })?;
        Self::new(config)
    }

    /// Send the actual HTTP request
    async fn send_request(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let source_lang = request.source_lang.as_deref().unwrap_or("auto");

        let response = self
            .client
            .get(&self.config.api_endpoint)
            .query(&[
                ("client", "gtx"),
                ("dj", "1"),
                ("dt", "t"),
                ("sl", source_lang),
                ("tl", request.target_lang.as_str()),
                ("q", request.text.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslationError::TimeoutError
                } else {
                    TranslationError::NetworkError {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let json: serde_json::Value = response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

            parse_response(&json)
        } else {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();

            if status_code == 429 {
                return Err(TranslationError::RateLimitError { retry_after: None });
            }

            Err(TranslationError::ApiError {
                status: status_code,
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl Translate for HttpTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        debug!(
            "Translating {} chars ({} -> {})",
            request.text.len(),
            request.source_lang.as_deref().unwrap_or("auto"),
            request.target_lang
        );

        self.send_request(request).await
    }
}

/// Parse the provider response.
///
/// With `dj=1` the provider returns an object whose `sentences` array holds
/// the translated fragments and whose top-level `src` names the detected
/// source language.
fn parse_response(json: &serde_json::Value) -> Result<TranslationResult> {
    let sentences = json["sentences"]
        .as_array()
        .ok_or_else(|| TranslationError::InvalidResponseError {
            message: "No sentences in response".to_string(),
        })?;

    let translated_text: String = sentences
        .iter()
        .filter_map(|s| s["trans"].as_str())
        .collect();

    if translated_text.is_empty() {
        return Err(TranslationError::InvalidResponseError {
            message: "No translation in response".to_string(),
        });
    }

    let detected_source_lang = json["src"].as_str().map(|s| s.to_string());

    Ok(TranslationResult {
        translated_text,
        detected_source_lang,
    })
}
