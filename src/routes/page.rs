//! Page configuration endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::Method;
use booth::config::PageConfig;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// `GET /api/config`: gallery credentials and upload mode for the browser.
pub async fn page_config(State(state): State<AppState>) -> Json<PageConfig> {
    Json(state.page.as_ref().clone())
}

/// The configuration is public; any origin may read it.
pub fn cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]).allow_headers(Any)
}
