//! GeoPlant HTTP Server
//!
//! Main entry point for the plant lookup API server.

use std::{sync::Arc, time::Duration};

use application::PlantLookupService;
use axum::http::{HeaderValue, Method};
use infrastructure::{AppConfig, LogFormat, PlantIdAdapter, init_logging};
use presentation_http::{middleware, routes, serve_with_graceful_shutdown, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the format can be honored
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(
        LogFormat::from_config(&config.server.log_format),
        "geoplant_server=debug,presentation_http=debug,infrastructure=info,tower_http=debug",
    )?;

    info!("🌱 GeoPlant v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        plant_id_base_url = %config.plant_id.base_url,
        zero_coordinates = %config.lookup.zero_coordinates,
        "Configuration loaded"
    );

    let adapter = PlantIdAdapter::new(config.plant_id.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize Plant.id client: {e}"))?;

    let lookup_service = PlantLookupService::with_settings(Arc::new(adapter), config.lookup.clone());
    if !lookup_service.is_ready() {
        warn!("Plant.id API key is not configured; lookups will fail until it is set");
    }

    let app = routes::create_router(AppState::new(lookup_service))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.allowed_origins))
        .layer(axum::middleware::from_fn(middleware::request_id));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    serve_with_graceful_shutdown(
        listener,
        app,
        shutdown_signal(),
        Duration::from_secs(config.server.shutdown_timeout_secs),
    )
    .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Build the CORS layer; no configured origins means any origin
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
