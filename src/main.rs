use anyhow::Context;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod dto;
mod error;
mod handlers;
mod models;
mod services;

use config::Config;
use db::MoodStore;

/// Capacity of the mood event channel feeding `/ws`.
const WS_CHANNEL_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct AppState {
    pub store: MoodStore,
    pub config: Arc<Config>,
    pub ws_tx: broadcast::Sender<String>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let (ws_tx, _) = broadcast::channel::<String>(WS_CHANNEL_CAPACITY);
        Self {
            store: MoodStore::new(),
            config: Arc::new(config),
            ws_tx,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(Config::default())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/ws", get(handlers::ws::ws_handler))
        // Check-ins
        .route(
            "/api/moods",
            get(handlers::moods::list_moods).post(handlers::moods::submit_mood),
        )
        .route("/api/moods/:id", get(handlers::moods::get_mood))
        // Derived views
        .route("/api/trends", get(handlers::trends::get_trends))
        .route("/api/insights", get(handlers::insights::get_insights))
        .route(
            "/api/recommendations",
            get(handlers::recommendations::get_recommendations),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = vec![config
        .frontend_url
        .parse::<axum::http::HeaderValue>()
        .context("FRONTEND_URL is not a valid origin")?];
    for o in &config.cors_extra_origins {
        match o.parse::<axum::http::HeaderValue>() {
            Ok(hv) => origins.push(hv),
            Err(_) => tracing::warn!(origin = %o, "Ignoring invalid CORS origin"),
        }
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wellness_hub_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env()?;
    let cors = cors_layer(&config)?;
    let addr = config.listen_addr();

    tracing::info!(
        utc_offset_minutes = config.utc_offset_minutes,
        "Using in-memory mood store; entries are lost on restart"
    );

    let app = router(AppState::new(config))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
