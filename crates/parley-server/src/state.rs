use std::sync::Arc;

use parley_bedrock::gateway::ModelGateway;
use parley_core::settings::SettingsStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Built once at startup. `gateway` is `None` when no credentials were
/// found; chat requests then fail while the settings endpoints keep working.
#[derive(Clone)]
pub struct AppState {
    pub settings: SettingsStore,
    pub gateway: Option<Arc<ModelGateway>>,
}
