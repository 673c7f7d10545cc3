use super::types::GatewayErrorBody;
use crate::provider::ChatProvider;
use crate::{ChatCompletion, ChatRequest, Error, GatewayConfig};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Header Portkey reads the gateway API key from.
const PORTKEY_API_KEY_HEADER: &str = "x-portkey-api-key";

/// Portkey gateway provider implementation.
pub struct PortkeyProvider {
    client: Client,
    config: GatewayConfig,
}

impl PortkeyProvider {
    /// Create a new provider. The HTTP client is built once and reused.
    pub fn new(config: GatewayConfig) -> Result<Self, Error> {
        let client = Client::builder().build()?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Full URL of the chat-completions endpoint.
    pub fn endpoint(&self) -> String {
        join_url(&self.config.base_url, CHAT_COMPLETIONS_PATH)
    }

    /// Map a non-success gateway status to an error.
    fn convert_error(status: StatusCode, body: &str) -> Error {
        let message = GatewayErrorBody::message_from(body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::auth(message),
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimit,
            StatusCode::NOT_FOUND => Error::ModelNotAvailable(message),
            _ => Error::service(status.as_u16(), message),
        }
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[async_trait::async_trait]
impl ChatProvider for PortkeyProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, Error> {
        if request.messages.is_empty() {
            return Err(Error::config("chat request must contain at least one message"));
        }

        let url = self.endpoint();
        debug!(
            %url,
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = ?request.max_tokens,
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(PORTKEY_API_KEY_HEADER, &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "gateway responded");

        if !status.is_success() {
            warn!(status = status.as_u16(), "gateway returned an error status");
            return Err(Self::convert_error(status, &body));
        }

        serde_json::from_str::<ChatCompletion>(&body)
            .map_err(|e| Error::response_shape(format!("invalid chat completion body: {e}")))
    }
}
