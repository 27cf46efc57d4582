//! Reelbite server binary: loads configuration, builds the engagement
//! ledger state, and serves the v1 API.

use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelbite_server::{AppState, Config, routes::create_api_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let addr = format!("{}:{}", config.server_host, config.server_port);

    let cors = build_cors_layer(&config)?;
    let state = AppState::new(config);

    let router = create_api_router(state.clone())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Starting Reelbite server on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

fn build_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .with_context(|| format!("invalid CORS origin `{origin}`"))
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}
