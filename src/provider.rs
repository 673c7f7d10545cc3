use crate::{ChatCompletion, ChatRequest, Error};

/// A trait for gateways that can answer chat-completion requests.
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync + 'static {
    /// Send one chat-completion request and wait for the full response.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, Error>;
}
