#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if config.relay.api_key.is_none() {
        tracing::warn!("RESEND_API_KEY not set; email relay will answer 500");
    }
    match &config.page.gallery {
        Some(gallery) => tracing::info!(url = %gallery.url, bucket = %gallery.bucket, "gallery configured"),
        None => tracing::warn!("gallery not configured; photos will not be persisted"),
    }

    let state = state::AppState::from_config(&config);
    let app = match routes::leptos_app(state, &config.site_dir) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port = config.port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(port = config.port, upload_mode = ?config.page.upload_mode, "photobooth listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
