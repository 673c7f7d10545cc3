use serde::Deserialize;

/// OpenAI-style error response returned by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayErrorBody {
    pub error: ErrorDetails,
}

/// Error details from the gateway.
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)] // For debugging output
pub struct ErrorDetails {
    pub message: String,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

impl GatewayErrorBody {
    /// Extract a human-readable message from a raw error body.
    /// Falls back to the raw text when the body is not an OpenAI-style error.
    pub fn message_from(raw: &str) -> String {
        match serde_json::from_str::<GatewayErrorBody>(raw) {
            Ok(body) => body.error.message,
            Err(_) => raw.trim().to_string(),
        }
    }
}
