//! REST helpers for our own server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! The relay's `{error, message}` body is turned into the exact text the
//! email dialog shows. Transport failures fall back to a generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use booth::config::PageConfig;
use booth::email::{EmailRequest, RelayFailure, RelaySuccess, failure_message};

pub const SEND_EMAIL_ENDPOINT: &str = "/api/send-email";
pub const CONFIG_ENDPOINT: &str = "/api/config";

/// Dialog text for a non-2xx relay answer whose body may not be JSON.
pub fn relay_failure_text(body: &str) -> String {
    let parsed = serde_json::from_str::<RelayFailure>(body).ok();
    failure_message(parsed.as_ref())
}

/// Send one photo email through the relay.
///
/// # Errors
///
/// Returns the message to show in the dialog.
pub async fn send_email(request: &EmailRequest) -> Result<RelaySuccess, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SEND_EMAIL_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(relay_failure_text(&body));
        }
        resp.json::<RelaySuccess>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch the page configuration. Falls back to defaults (no gallery,
/// auto upload) when the server cannot be reached.
pub async fn fetch_config() -> PageConfig {
    #[cfg(feature = "hydrate")]
    {
        let fetched = match gloo_net::http::Request::get(CONFIG_ENDPOINT).send().await {
            Ok(resp) if resp.ok() => resp.json::<PageConfig>().await.map_err(|e| e.to_string()),
            Ok(resp) => Err(format!("config request failed: {}", resp.status())),
            Err(e) => Err(e.to_string()),
        };
        fetched.unwrap_or_else(|e| {
            log::warn!("page config unavailable: {e}");
            PageConfig::default()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PageConfig::default()
    }
}

/// Download an image and re-encode it as a data URI.
///
/// # Errors
///
/// Returns a description when the fetch fails.
pub async fn fetch_as_data_uri(url: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("image fetch failed: {}", resp.status()));
        }
        let mime = resp
            .headers()
            .get("content-type")
            .unwrap_or_else(|| booth::consts::PHOTO_MIME.to_owned());
        let bytes = resp.binary().await.map_err(|e| e.to_string())?;
        Ok(booth::photo::to_data_uri(&mime, &bytes))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}
