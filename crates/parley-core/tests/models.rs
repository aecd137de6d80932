use parley_core::models::catalog::known_models;
use parley_core::models::chat::{ChatMessage, ChatRole};
use parley_core::models::invocation::{ErrorKind, InvocationResult};
use parley_core::settings::DEFAULT_MODEL_ID;

#[test]
fn catalog_contains_the_default_model() {
    assert_eq!(known_models().len(), 7);
    let default = known_models().iter().find(|m| m.id == DEFAULT_MODEL_ID).unwrap();
    assert_eq!(default.name, "Claude 3.7 Sonnet");
}

#[test]
fn chat_roles_use_lowercase_names() {
    let msg: ChatMessage = serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
    assert_eq!(msg.role, ChatRole::Assistant);
    assert!(serde_json::from_str::<ChatMessage>(r#"{"role":"system","content":"x"}"#).is_err());
}

#[test]
fn failed_result_omits_response_field() {
    let result = InvocationResult::failed(ErrorKind::RateLimited, "slow down");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "slow down");
    assert_eq!(json["error_kind"], "rate_limited");
    assert!(json.get("response").is_none());
    assert!(json.get("timestamp").is_some());
}
