//! RouteView HTTP Server
//!
//! Main entry point for the route page server.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::ports::{PlaceSuggestionPort, RoutingPort};
use infrastructure::{AppConfig, DirectionsAdapter, LogFormat, PlacesAdapter, init_tracing};
use integration_maps::{GoogleDirectionsClient, GooglePlacesClient};
use presentation_http::{routes, spawn_session_expiry_task, state::AppState};
use tokio::{net::TcpListener, signal, sync::Notify};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can be honored
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(LogFormat::from_config(&config.server.log_format));

    info!("RouteView v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        maps_base_url = %config.maps.base_url,
        "Configuration loaded"
    );

    // Initialize Google Maps clients
    let maps_config = config.maps.to_maps_config();
    maps_config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid maps configuration: {e}"))?;

    let directions_client = GoogleDirectionsClient::new(&maps_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize directions client: {e}"))?;
    let places_client = GooglePlacesClient::new(&maps_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize places client: {e}"))?;

    let routing: Arc<dyn RoutingPort> = Arc::new(DirectionsAdapter::new(directions_client));
    let places: Arc<dyn PlaceSuggestionPort> = Arc::new(PlacesAdapter::new(places_client));

    let page = config
        .page
        .to_page_config()
        .map_err(|e| anyhow::anyhow!("Invalid page configuration: {e}"))?;

    let state = AppState::new(routing, places, page);
    let sessions = Arc::clone(&state.sessions);

    let expiry_task = spawn_session_expiry_task(
        Arc::clone(&sessions),
        Duration::from_secs(config.server.session_idle_timeout_secs),
        Duration::from_secs(config.server.session_sweep_interval_secs),
    );

    // Build router
    let app = routes::create_router(state);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(
            config.server.max_body_size_json_bytes,
        ));
    let app = app.layer(middleware);

    let app = if config.server.cors_enabled {
        app.layer(cors_layer(&config.server.allowed_origins))
    } else {
        app
    };

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    let shutdown_started = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let shutdown_started = Arc::clone(&shutdown_started);
            async move {
                shutdown_signal().await;
                // Open event streams only end once their page is dropped
                let closed = sessions.clear();
                info!(closed_sessions = closed, "Waiting up to {:?} for connections to close...", shutdown_timeout);
                shutdown_started.notify_one();
            }
        })
        .into_future();

    let drain_deadline = async {
        shutdown_started.notified().await;
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = server => result?,
        () = drain_deadline => {
            warn!("Connections still open after {:?}, shutting down anyway", shutdown_timeout);
        }
    }

    expiry_task.abort();
    info!("Server shutdown complete");

    Ok(())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any)
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
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
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
