//! The single request/print cycle.

use crate::{ChatProvider, ChatRequest, Error, Prompt};
use std::io::Write;
use tracing::{debug, info};

/// Model revision the request is routed to.
pub const MODEL: &str = "@vertexai/anthropic.claude-opus-4-5@20251101";

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub const USER_PROMPT: &str = "What is Portkey";

pub const MAX_TOKENS: u32 = 512;

/// Build the fixed chat request.
pub fn build_request() -> ChatRequest {
    let prompt = Prompt::system(SYSTEM_PROMPT).with_user(USER_PROMPT);

    ChatRequest {
        model: MODEL.to_string(),
        messages: prompt.into_messages(),
        max_tokens: Some(MAX_TOKENS),
    }
}

/// Send the fixed request once and write the first choice's text, plus a
/// newline, to `out`. Nothing is written if any step fails.
pub async fn run<W>(provider: &dyn ChatProvider, out: &mut W) -> Result<String, Error>
where
    W: Write + ?Sized,
{
    let request = build_request();
    let completion = provider.complete(&request).await?;

    if let Some(usage) = &completion.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "token usage"
        );
    }

    let text = completion.first_choice_text()?;
    info!(bytes = text.len(), "received completion");

    writeln!(out, "{text}")?;
    out.flush()?;

    Ok(text)
}
