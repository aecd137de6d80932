//! Anthropic Messages request envelope for Bedrock `InvokeModel`.

use serde::{Deserialize, Serialize};

use parley_core::models::chat::ChatMessage;
use parley_core::settings::Settings;

/// Protocol version tag Bedrock requires on Anthropic Messages bodies.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Model choice and sampling parameters for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model_id: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
    pub system_prompt: Option<String>,
}

impl From<&Settings> for GenerationParams {
    fn from(settings: &Settings) -> Self {
        Self {
            model_id: settings.model_id.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            top_p: settings.top_p,
            top_k: settings.top_k,
            system_prompt: Some(settings.system_prompt.clone()),
        }
    }
}

/// Body sent to `InvokeModel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

/// Build the request body: `history` in order, then `message` as the final
/// user turn. The `system` field is only set for a non-empty prompt.
pub fn build_request(
    message: &str,
    params: &GenerationParams,
    history: &[ChatMessage],
) -> MessagesRequest {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(message));

    MessagesRequest {
        anthropic_version: ANTHROPIC_VERSION.to_string(),
        max_tokens: params.max_tokens,
        temperature: params.temperature,
        top_p: params.top_p,
        top_k: params.top_k,
        messages,
        system: params
            .system_prompt
            .as_ref()
            .filter(|p| !p.is_empty())
            .cloned(),
    }
}
