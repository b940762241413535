//! Configuration management

use serde::{Deserialize, Serialize};

/// Default provider endpoint. This is the public endpoint the gtx web client
/// uses, so no API key is involved.
const DEFAULT_API_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// User agent sent to the provider. The public endpoint rejects some
/// non-browser agents.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub api_endpoint: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_ms: 30000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let api_endpoint = std::env::var("TRANSLATE_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        let user_agent = std::env::var("TRANSLATE_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            api_endpoint,
            timeout_ms,
            user_agent,
        })
    }

    /// Load configuration
    pub fn load() -> anyhow::Result<Self> {
        Self::from_env()
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }
}
