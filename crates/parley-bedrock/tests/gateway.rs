use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use parley_bedrock::client::ModelInvoker;
use parley_bedrock::error::BedrockError;
use parley_bedrock::gateway::ModelGateway;
use parley_bedrock::request::{GenerationParams, MessagesRequest};
use parley_core::models::chat::ChatMessage;
use parley_core::models::invocation::ErrorKind;
use parley_core::settings::Settings;

/// Records every request body and answers with a canned outcome.
struct RecordingInvoker {
    reply: fn() -> Result<Vec<u8>, BedrockError>,
    requests: Mutex<Vec<(String, MessagesRequest)>>,
    region: Mutex<String>,
}

impl RecordingInvoker {
    fn new(reply: fn() -> Result<Vec<u8>, BedrockError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
            region: Mutex::new("us-east-1".to_string()),
        })
    }
}

#[async_trait]
impl ModelInvoker for RecordingInvoker {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, BedrockError> {
        let request: MessagesRequest = serde_json::from_slice(&body).unwrap();
        self.requests.lock().unwrap().push((model_id.to_string(), request));
        (self.reply)()
    }

    async fn rebind_region(&self, region: &str) {
        *self.region.lock().unwrap() = region.to_string();
    }

    async fn region(&self) -> String {
        self.region.lock().unwrap().clone()
    }
}

fn ok_reply() -> Result<Vec<u8>, BedrockError> {
    Ok(br#"{"content":[{"type":"text","text":"Sure."}],"usage":{"input_tokens":20,"output_tokens":2},"stop_reason":"end_turn"}"#.to_vec())
}

fn throttled() -> Result<Vec<u8>, BedrockError> {
    Err(BedrockError::RateLimited("ThrottlingException: too many requests".to_string()))
}

fn params() -> GenerationParams {
    GenerationParams::from(&Settings::default())
}

#[tokio::test]
async fn history_and_new_message_reach_the_provider_in_order() {
    let invoker = RecordingInvoker::new(ok_reply);
    let gateway = ModelGateway::new(invoker.clone());
    let history = vec![ChatMessage::user("first"), ChatMessage::assistant("second")];

    let result = gateway.send_message("third", &params(), &history).await;
    assert!(result.success);

    let requests = invoker.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (model_id, request) = &requests[0];
    assert_eq!(model_id, "us.anthropic.claude-3-7-sonnet-20250219-v1:0");
    let contents: Vec<&str> = request.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["first", "second", "third"]);
}

#[tokio::test]
async fn success_echoes_text_usage_stop_reason_and_model() {
    let gateway = ModelGateway::new(RecordingInvoker::new(ok_reply));

    let result = gateway.send_message("hello", &params(), &[]).await;

    assert!(result.success);
    assert_eq!(result.response.as_deref(), Some("Sure."));
    assert!(result.error.is_none());
    assert_eq!(result.usage.unwrap()["output_tokens"], 2);
    assert_eq!(result.stop_reason.as_deref(), Some("end_turn"));
    assert_eq!(result.model.as_deref(), Some("us.anthropic.claude-3-7-sonnet-20250219-v1:0"));
}

#[tokio::test]
async fn provider_failure_is_flattened_into_the_result() {
    let gateway = ModelGateway::new(RecordingInvoker::new(throttled));

    let result = gateway.send_message("hello", &params(), &[]).await;

    assert!(!result.success);
    assert!(result.response.is_none());
    assert_eq!(result.error_kind, Some(ErrorKind::RateLimited));
    assert!(!result.error.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_reply_is_classified() {
    fn garbage() -> Result<Vec<u8>, BedrockError> {
        Ok(b"not json".to_vec())
    }
    let gateway = ModelGateway::new(RecordingInvoker::new(garbage));

    let result = gateway.send_message("hello", &params(), &[]).await;
    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::MalformedResponse));
}

#[tokio::test]
async fn update_region_rebinds_the_invoker() {
    let invoker = RecordingInvoker::new(ok_reply);
    let gateway = ModelGateway::new(invoker.clone());

    gateway.update_region("eu-central-1").await;
    assert_eq!(gateway.region().await, "eu-central-1");
}
