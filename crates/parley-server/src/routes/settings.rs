use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::warn;

use parley_core::settings::Settings;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.load())
}

/// Replace the stored settings with the request body.
///
/// A region change rebinds the model client before the file is written.
pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<Settings>, JsonRejection>,
) -> Result<Json<Settings>, ApiError> {
    let Json(settings) = payload?;
    settings.validate()?;

    let mut rebound_from = None;
    if let Some(gateway) = &state.gateway {
        let current = state.settings.load();
        if current.region != settings.region {
            gateway.update_region(&settings.region).await;
            rebound_from = Some(current.region);
        }
    }

    if let Err(e) = state.settings.save(&settings) {
        if let Some(previous) = rebound_from {
            warn!(
                live_region = %settings.region,
                saved_region = %previous,
                "settings save failed after region rebind; client and settings file disagree"
            );
        }
        return Err(e.into());
    }
    Ok(Json(settings))
}
