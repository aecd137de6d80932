//! parley-server
//!
//! HTTP surface for the Bedrock chat relay: chat submission, settings
//! read/replace, the model catalog, and the bundled frontend.

use std::path::Path;

use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
///
/// `frontend_dir` must contain `index.html`; the rest of its files are
/// served under `/static`.
pub fn router(state: AppState, frontend_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/chat", axum::routing::post(routes::chat::chat))
        .route(
            "/api/settings",
            get(routes::settings::get_settings).post(routes::settings::update_settings),
        )
        .route("/api/models", get(routes::models::list_models))
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(frontend_dir))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::access_log::access_log))
                .layer(cors),
        )
        .with_state(state)
}
