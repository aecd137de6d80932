use aws_sdk_bedrockruntime::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_smithy_types::error::display::DisplayErrorContext;
use thiserror::Error;

use parley_core::models::invocation::ErrorKind;

/// Service error codes that mean the key pair was rejected.
const AUTH_ERROR_CODES: &[&str] = &[
    "UnrecognizedClientException",
    "InvalidSignatureException",
    "IncompleteSignatureException",
    "ExpiredTokenException",
];

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BedrockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BedrockError::Network(_) => ErrorKind::Network,
            BedrockError::Authentication(_) => ErrorKind::Authentication,
            BedrockError::RateLimited(_) => ErrorKind::RateLimited,
            BedrockError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            BedrockError::Invocation(_) | BedrockError::Serialization(_) => {
                ErrorKind::Unclassified
            }
        }
    }
}

impl From<SdkError<InvokeModelError>> for BedrockError {
    fn from(err: SdkError<InvokeModelError>) -> Self {
        // The full context includes the raw HTTP response; keep it in the
        // log and out of the caller-facing message.
        tracing::debug!(error = %DisplayErrorContext(&err), "bedrock sdk error");

        match &err {
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
                BedrockError::Network(source_chain(&err))
            }
            SdkError::ResponseError(_) => BedrockError::MalformedResponse(source_chain(&err)),
            SdkError::ServiceError(ctx) => {
                let service = ctx.err();
                let message = match (service.code(), service.message()) {
                    (Some(code), Some(msg)) => format!("{code}: {msg}"),
                    (Some(code), None) => code.to_string(),
                    _ => service.to_string(),
                };
                if service.is_throttling_exception() || service.is_service_quota_exceeded_exception()
                {
                    BedrockError::RateLimited(message)
                } else if service.is_access_denied_exception()
                    || service.code().is_some_and(|c| AUTH_ERROR_CODES.contains(&c))
                {
                    BedrockError::Authentication(message)
                } else {
                    BedrockError::Invocation(message)
                }
            }
            _ => BedrockError::Invocation(source_chain(&err)),
        }
    }
}

/// `Display` of an error and each of its sources, joined by `: `.
fn source_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
