use axum::Json;
use serde::Serialize;

use parley_core::models::catalog::{known_models, ModelInfo};

#[derive(Serialize)]
pub struct ModelsResponse {
    models: &'static [ModelInfo],
}

pub async fn list_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: known_models(),
    })
}
