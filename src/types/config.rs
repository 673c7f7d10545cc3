use crate::Error;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding the gateway base URL.
pub const BASE_URL_ENV: &str = "PORTKEY_BASE_URL";

/// Environment variable holding the gateway API key.
pub const API_KEY_ENV: &str = "PORTKEY_API_KEY";

/// Gateway endpoint used when `PORTKEY_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://ai-gateway.apps.cloud.rt.nyu.edu/v1";

/// Connection settings for the Portkey gateway.
#[derive(Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: String,
}

impl GatewayConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset: a blank base URL falls back to
    /// [`DEFAULT_BASE_URL`] and a blank API key is a missing credential.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_url = non_blank(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = non_blank(API_KEY_ENV).ok_or_else(|| {
            Error::config(format!(
                "missing credential: {API_KEY_ENV} environment variable is required"
            ))
        })?;

        Ok(Self { base_url, api_key })
    }
}

// Keeps the API key out of logs and panic messages.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Token usage information reported by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// A chat-completion request as sent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<super::message::Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}
