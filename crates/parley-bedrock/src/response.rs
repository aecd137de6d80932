//! Parsing of Anthropic Messages response bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::BedrockError;

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Option<Vec<ContentBlock>>,
    #[serde(default)]
    usage: Option<Map<String, Value>>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// The parts of a model reply that are passed back to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    pub text: String,
    pub usage: Map<String, Value>,
    pub stop_reason: Option<String>,
}

/// Extract the first content block's text plus usage and stop reason.
///
/// A missing `content` field or a block without text yields empty text; an
/// empty `content` array is malformed.
pub fn parse_response(body: &[u8]) -> Result<ParsedResponse, BedrockError> {
    let response: MessagesResponse = serde_json::from_slice(body)
        .map_err(|e| BedrockError::MalformedResponse(format!("invalid response body: {e}")))?;

    let text = match response.content {
        None => String::new(),
        Some(blocks) => blocks
            .into_iter()
            .next()
            .ok_or_else(|| BedrockError::MalformedResponse("empty content array".to_string()))?
            .text
            .unwrap_or_default(),
    };

    Ok(ParsedResponse {
        text,
        usage: response.usage.unwrap_or_default(),
        stop_reason: response.stop_reason,
    })
}
