//! Rules Sage server entry point.

use std::sync::Arc;

use axum::http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rules_sage::adapters::ai::{GeminiConfig, GeminiProvider};
use rules_sage::adapters::http::{app_router, chat::ChatHandlers};
use rules_sage::application::ChatSession;
use rules_sage::config::{AppConfig, ValidationError};
use rules_sage::ports::AIProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let api_key = config
        .ai
        .gemini_api_key
        .clone()
        .ok_or(ValidationError::MissingRequired("GEMINI_API_KEY"))?;

    let provider = GeminiProvider::new(
        GeminiConfig::new(api_key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    );
    let provider_info = provider.provider_info();

    let session = Arc::new(ChatSession::new(Arc::new(provider)));
    info!(
        session_id = %session.id(),
        provider = %provider_info.name,
        model = %provider_info.model,
        "session ready"
    );

    let cors = cors_layer(&config)?;
    let app = app_router(ChatHandlers::new(session)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(std::time::Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(cors),
    );

    let addr = config.server.socket_addr()?;
    info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let mut values = Vec::with_capacity(origins.len());
    for origin in &origins {
        values.push(HeaderValue::from_str(origin)?);
    }

    Ok(CorsLayer::new()
        .allow_origin(values)
        .allow_methods(Any)
        .allow_headers(Any))
}
