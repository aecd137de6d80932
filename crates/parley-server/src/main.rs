use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use parley_bedrock::client::BedrockInvoker;
use parley_bedrock::gateway::ModelGateway;
use parley_core::credentials::CredentialStore;
use parley_core::settings::SettingsStore;
use parley_server::config::ServerConfig;
use parley_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    let settings = SettingsStore::new(&config.settings_file);
    let credentials = CredentialStore::new(&config.credentials_file);
    tracing::info!(
        settings = %settings.path().display(),
        credentials = %credentials.path().display(),
        "loading local state"
    );

    let gateway = match credentials.load() {
        Some(keys) => {
            let region = settings.load().region;
            let invoker = BedrockInvoker::new(keys, &region);
            Some(Arc::new(ModelGateway::new(Arc::new(invoker))))
        }
        None => {
            tracing::warn!(
                path = %credentials.path().display(),
                "AWS credentials not found; chat requests will fail until restart"
            );
            None
        }
    };

    let state = AppState { settings, gateway };
    let app = parley_server::router(state, &config.frontend_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
