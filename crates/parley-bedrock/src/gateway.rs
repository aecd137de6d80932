use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use parley_core::models::chat::ChatMessage;
use parley_core::models::invocation::InvocationResult;

use crate::client::ModelInvoker;
use crate::error::BedrockError;
use crate::request::{build_request, GenerationParams};
use crate::response::{parse_response, ParsedResponse};

/// Turns a chat turn into one model call and normalizes the outcome.
pub struct ModelGateway {
    invoker: Arc<dyn ModelInvoker>,
}

impl ModelGateway {
    pub fn new(invoker: Arc<dyn ModelInvoker>) -> Self {
        Self { invoker }
    }

    /// Send `message` after `history` and return a uniform result.
    ///
    /// Never fails: any error becomes a result with `success = false`. There
    /// is no retry and no timeout beyond the SDK's defaults.
    pub async fn send_message(
        &self,
        message: &str,
        params: &GenerationParams,
        history: &[ChatMessage],
    ) -> InvocationResult {
        let invocation_id = Uuid::new_v4();
        info!(
            invocation_id = %invocation_id,
            model = %params.model_id,
            history = history.len(),
            "invoking model"
        );

        match self.invoke(message, params, history).await {
            Ok(parsed) => {
                info!(invocation_id = %invocation_id, stop_reason = ?parsed.stop_reason, "model invocation complete");
                InvocationResult::succeeded(
                    parsed.text,
                    params.model_id.as_str(),
                    parsed.usage,
                    parsed.stop_reason,
                )
            }
            Err(e) => {
                let kind = e.kind();
                warn!(invocation_id = %invocation_id, kind = ?kind, error = %e, "model invocation failed");
                InvocationResult::failed(kind, e.to_string())
            }
        }
    }

    async fn invoke(
        &self,
        message: &str,
        params: &GenerationParams,
        history: &[ChatMessage],
    ) -> Result<ParsedResponse, BedrockError> {
        let request = build_request(message, params, history);
        let body = serde_json::to_vec(&request)?;
        let raw = self.invoker.invoke_model(&params.model_id, body).await?;
        parse_response(&raw)
    }

    /// Point subsequent calls at `region`, reusing the loaded credentials.
    pub async fn update_region(&self, region: &str) {
        self.invoker.rebind_region(region).await;
    }

    pub async fn region(&self) -> String {
        self.invoker.region().await
    }
}
