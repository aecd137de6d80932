use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed classification of model invocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    Authentication,
    MalformedResponse,
    RateLimited,
    Unclassified,
}

/// Uniform success/failure envelope returned for every chat call.
///
/// Exactly one of `response` and `error` is populated. Remote failures are
/// reported through this value rather than through an HTTP error status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    /// Provider usage block, echoed verbatim (`input_tokens`, `output_tokens`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub timestamp: jiff::Timestamp,
}

impl InvocationResult {
    pub fn succeeded(
        response: String,
        model: impl Into<String>,
        usage: Map<String, Value>,
        stop_reason: Option<String>,
    ) -> Self {
        Self {
            success: true,
            response: Some(response),
            error: None,
            error_kind: None,
            usage: Some(usage),
            stop_reason,
            model: Some(model.into()),
            timestamp: jiff::Timestamp::now(),
        }
    }

    pub fn failed(kind: ErrorKind, error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
            error_kind: Some(kind),
            usage: None,
            stop_reason: None,
            model: None,
            timestamp: jiff::Timestamp::now(),
        }
    }
}
