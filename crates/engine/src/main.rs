use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::sync::RwLock;

use argus_engine::cache::AnalysisCache;
use argus_engine::config;
use argus_engine::oracle::LlmOracle;
use argus_engine::pipeline::Argus;
use argus_engine::routes::{self, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("ARGUS Engine starting");

    // Load configuration — fail loudly on misconfiguration.
    let config_dir = std::env::var("ARGUS_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let engine_config = match config::load_config(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration — refusing to start");
            std::process::exit(1);
        }
    };

    // Install Prometheus metrics recorder.
    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");

    // Reasoning oracle — the engine is useless without one.
    let oracle = match LlmOracle::new(
        &engine_config.system.oracle,
        &engine_config.system.retry.oracle_api,
    ) {
        Some(oracle) => Arc::new(oracle),
        None => {
            tracing::error!("Failed to create reasoning oracle — API key not set");
            std::process::exit(1);
        }
    };

    let argus = Argus::new(oracle, engine_config.system.limits.clone());

    let cache = RwLock::new(AnalysisCache::new(Duration::from_secs(
        engine_config.system.cache.analysis_ttl_seconds,
    )));

    let state = Arc::new(AppState {
        argus,
        cache,
        metrics_handle,
    });

    let app = Router::new()
        .route("/analyze", post(routes::analyze_handler))
        .route("/dialectic", post(routes::dialectic_handler))
        .route("/quick-score", post(routes::quick_score_handler))
        .route("/analysis/{id}", get(routes::get_analysis_handler))
        .route("/personas", get(routes::personas_handler))
        .route("/stances", get(routes::stances_handler))
        .route("/health", get(routes::health_handler))
        .route("/metrics", get(routes::metrics_handler))
        .with_state(state);

    let port: u16 = std::env::var("ARGUS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind TCP listener");

    tracing::info!(port = port, "ARGUS Engine listening");

    axum::serve(listener, app).await.expect("HTTP server error");
}
