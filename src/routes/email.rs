//! Email relay endpoint.
//!
//! `POST /api/send-email` with `{email, photoData, caption}`. The body is
//! parsed here rather than by the `Json` extractor so that every rejection,
//! including a malformed body, answers with the relay's `{error, message}`
//! shape. Every response carries the same permissive CORS headers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{self, HeaderValue};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use booth::email::{EmailRequest, RelayFailure};

use crate::services::relay::RelayError;
use crate::state::AppState;

const ALLOW_METHODS: &str = "POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Headers sent on every relay response, preflight or not.
fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    headers
}

/// Map a relay error to its status and JSON body.
pub(crate) fn relay_error_response(err: &RelayError) -> Response {
    match err {
        RelayError::NotConfigured => tracing::error!("RESEND_API_KEY is not configured"),
        RelayError::Provider(message) => tracing::error!(error = %message, "email provider rejected send"),
        RelayError::InvalidPhoto(e) => tracing::warn!(error = %e, "undecodable photo data"),
        RelayError::MalformedBody | RelayError::MissingFields | RelayError::InvalidEmail => {
            tracing::debug!(error = %err, "email request rejected");
        }
    }
    (err.status(), cors_headers(), Json(err.body())).into_response()
}

/// `POST /api/send-email`.
pub async fn send_email(State(state): State<AppState>, body: Bytes) -> Response {
    if !state.relay.is_configured() {
        return relay_error_response(&RelayError::NotConfigured);
    }
    let request = match serde_json::from_slice::<EmailRequest>(&body) {
        Ok(request) => request,
        Err(_) => return relay_error_response(&RelayError::MalformedBody),
    };
    match state.relay.dispatch(request).await {
        Ok(sent) => {
            tracing::info!(id = %sent.id, "photo email sent");
            (StatusCode::OK, cors_headers(), Json(sent)).into_response()
        }
        Err(e) => relay_error_response(&e),
    }
}

/// `OPTIONS /api/send-email`.
pub async fn preflight() -> impl IntoResponse {
    (StatusCode::OK, cors_headers())
}

/// Any other method on the relay path.
pub async fn method_not_allowed() -> Response {
    let body = RelayFailure { error: "Method not allowed".to_owned(), message: None };
    (StatusCode::METHOD_NOT_ALLOWED, cors_headers(), Json(body)).into_response()
}
