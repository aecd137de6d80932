//! Classification of SDK `InvokeModel` errors into closed error kinds.

use aws_sdk_bedrockruntime::error::{ErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::types::error::{
    AccessDeniedException, ServiceQuotaExceededException, ThrottlingException, ValidationException,
};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::client::result::ConnectorError;
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;

use parley_bedrock::error::BedrockError;
use parley_core::models::invocation::ErrorKind;

fn raw(status: u16) -> HttpResponse {
    HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::empty())
}

fn service(err: InvokeModelError, status: u16) -> BedrockError {
    let sdk: SdkError<InvokeModelError> = SdkError::service_error(err, raw(status));
    BedrockError::from(sdk)
}

#[test]
fn throttling_and_quota_are_rate_limited() {
    let throttled = service(
        InvokeModelError::ThrottlingException(ThrottlingException::builder().message("slow").build()),
        429,
    );
    assert_eq!(throttled.kind(), ErrorKind::RateLimited);

    let quota = service(
        InvokeModelError::ServiceQuotaExceededException(
            ServiceQuotaExceededException::builder().message("quota").build(),
        ),
        400,
    );
    assert_eq!(quota.kind(), ErrorKind::RateLimited);
}

#[test]
fn access_denied_and_rejected_keys_are_authentication() {
    let denied = service(
        InvokeModelError::AccessDeniedException(
            AccessDeniedException::builder().message("no access").build(),
        ),
        403,
    );
    assert_eq!(denied.kind(), ErrorKind::Authentication);

    let unrecognized = service(
        InvokeModelError::generic(
            ErrorMetadata::builder()
                .code("UnrecognizedClientException")
                .message("The security token included in the request is invalid.")
                .build(),
        ),
        403,
    );
    assert_eq!(unrecognized.kind(), ErrorKind::Authentication);
    assert!(unrecognized.to_string().contains("UnrecognizedClientException"));
}

#[test]
fn dispatch_failure_and_timeout_are_network() {
    let dispatch: SdkError<InvokeModelError> =
        SdkError::dispatch_failure(ConnectorError::io("connection refused".into()));
    let dispatch = BedrockError::from(dispatch);
    assert_eq!(dispatch.kind(), ErrorKind::Network);
    assert!(dispatch.to_string().contains("connection refused"));

    let timeout: SdkError<InvokeModelError> = SdkError::timeout_error("operation timed out");
    assert_eq!(BedrockError::from(timeout).kind(), ErrorKind::Network);
}

#[test]
fn response_error_is_malformed_response() {
    let sdk: SdkError<InvokeModelError> = SdkError::response_error("unexpected body", raw(200));
    assert_eq!(BedrockError::from(sdk).kind(), ErrorKind::MalformedResponse);
}

#[test]
fn validation_exception_is_unclassified() {
    let invalid = service(
        InvokeModelError::ValidationException(
            ValidationException::builder().message("max_tokens too large").build(),
        ),
        400,
    );
    assert_eq!(invalid.kind(), ErrorKind::Unclassified);
}

#[test]
fn message_omits_raw_http_response() {
    let throttled = service(
        InvokeModelError::ThrottlingException(ThrottlingException::builder().message("slow").build()),
        429,
    );
    let message = throttled.to_string();

    assert!(message.contains("slow"));
    assert!(!message.contains("SdkBody"));
    assert!(!message.contains("headers"));
    assert!(!message.contains("StatusCode"));
}
