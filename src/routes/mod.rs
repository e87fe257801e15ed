//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the email relay, the page configuration, the
//! Leptos-rendered booth page, and static assets. The booth page is
//! rendered at `/`; the compiled client bundle lives under `/pkg`.

pub mod email;
pub mod page;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes shared by the browser client and external callers.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/send-email",
            post(email::send_email)
                .options(email::preflight)
                .fallback(email::method_not_allowed),
        )
        .route("/api/config", get(page::page_config).layer(page::cors()))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR page + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState, site_dir: &Path) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_dir))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
