mod ai;
mod ats;
mod config;
mod editor;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai::AiClient;
use crate::config::Config;
use crate::editor::{spawn_autosave, EditorSessions};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder API v{}", env!("CARGO_PKG_VERSION"));

    // Open the file-backed document store
    let store = ResumeStore::open(&config.storage_path);
    info!("Resume store opened at {}", config.storage_path);

    // Initialize the AI text assistant (degrades to config-missing errors
    // when no credential is set; the rest of the service stays usable)
    let ai = AiClient::new(config.ai_api_key.clone());
    if ai.is_configured() {
        info!("AI text assistant configured");
    } else {
        info!("AI_API_KEY not set; AI endpoints will report AI_UNAVAILABLE");
    }

    // Editor sessions + periodic autosave sweep
    let sessions = EditorSessions::new();
    let _autosave = spawn_autosave(store.clone(), sessions.clone());

    let state = AppState {
        store,
        sessions,
        ai: Arc::new(ai),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
