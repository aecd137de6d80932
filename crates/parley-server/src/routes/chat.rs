use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use parley_bedrock::request::GenerationParams;
use parley_core::models::chat::ChatMessage;
use parley_core::models::invocation::InvocationResult;

use crate::error::ApiError;
use crate::state::AppState;

pub const CREDENTIALS_MISSING: &str =
    "AWS credentials not configured. Add them to the credentials file and restart.";

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Option<Vec<ChatMessage>>,
}

/// Send one message to the configured model using the saved settings.
///
/// Model failures come back as `200` with `success: false`.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<InvocationResult>, ApiError> {
    let Json(req) = payload?;
    let gateway = state
        .gateway
        .as_ref()
        .ok_or_else(|| ApiError::NotConfigured(CREDENTIALS_MISSING.to_string()))?;

    let settings = state.settings.load();
    let params = GenerationParams::from(&settings);
    let history = req.conversation_history.unwrap_or_default();

    let result = gateway.send_message(&req.message, &params, &history).await;
    Ok(Json(result))
}
