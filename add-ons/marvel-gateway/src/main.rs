//! Axum-based web front for the Marvel App. Config-driven via CoreConfig.
//!
//! Pages are rendered server-side from the read-only character store; the same data
//! is exposed as JSON under `/api/v1`.

mod handlers;
mod views;

use axum::{routing::get, Router};
use marvel_core::{CharacterSource, CharacterStore, CoreConfig};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use handlers::{api, pages};

/// Pre-flight check: config loads, dataset loads, port is available.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    print!("Checking dataset... ");
    let store = CharacterStore::load(&config).map_err(|e| format!("Dataset load failed: {}", e))?;
    if store.is_sequence() {
        println!("OK ({} records)", store.len());
    } else {
        println!("WARN (root is not an array; catalog will be empty)");
    }

    let port = config.port;
    print!("Checking port {}... ", port);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("Port {} BLOCKED: {}", port, e));
        }
    }

    println!("\nAll checks passed. Ready to start the gateway.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[marvel-gateway] .env not loaded: {} (using system environment)", e);
    }

    if std::env::args().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load()?);
    let store = CharacterStore::load(&config)?;
    tracing::info!(records = store.len(), "Character store ready");

    let app = build_app(AppState {
        config: Arc::clone(&config),
        catalog: Arc::new(store),
    });

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("{} listening on http://{}", config.app_name, addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/characters", get(pages::characters))
        .route("/characters/:id", get(pages::character_detail))
        .route("/compare", get(pages::compare))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/api/v1/health", get(api::health))
        .route("/api/v1/characters", get(api::list_characters))
        .route("/api/v1/characters/:id", get(api::get_character))
        .route("/api/v1/characters/:id/capacities", get(api::get_capacities))
        .fallback(pages::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) catalog: Arc<dyn CharacterSource>,
}
