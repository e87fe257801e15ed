//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` through `dotenvy` before anything here runs.
//! Every value has a default except the provider key: without
//! `RESEND_API_KEY` the server still starts and the relay answers 500.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

use booth::config::{GalleryConfig, PageConfig};
use booth::session::UploadMode;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_EMAIL_FROM: &str = "UBC Startup Event <onboarding@resend.dev>";
pub const DEFAULT_EMAIL_SUBJECT: &str = "Your UBC Startup Event Photo 📸";
pub const DEFAULT_ATTACHMENT_NAME: &str = "photobooth-photo.jpg";
pub const DEFAULT_SITE_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Email relay settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Resend API key. `None` leaves the relay unconfigured.
    pub api_key: Option<String>,
    pub from: String,
    pub subject: String,
    pub attachment_name: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from: DEFAULT_EMAIL_FROM.to_owned(),
            subject: DEFAULT_EMAIL_SUBJECT.to_owned(),
            attachment_name: DEFAULT_ATTACHMENT_NAME.to_owned(),
        }
    }
}

/// Everything `main` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    pub relay: RelayConfig,
    pub page: PageConfig,
}

impl ServerConfig {
    /// Read the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `RESEND_API_KEY`
    /// - `EMAIL_FROM`, `EMAIL_SUBJECT`, `EMAIL_ATTACHMENT_NAME`
    /// - `SUPABASE_URL`, `SUPABASE_ANON_KEY`, `SUPABASE_BUCKET` (default `photos`)
    /// - `UPLOAD_MODE`: `auto` (default) or `consent`
    /// - `EVENT_ID`: tag for new gallery records
    /// - `SITE_DIR`: static assets, default `public`
    ///
    /// # Errors
    ///
    /// Returns an error when `PORT` or `UPLOAD_MODE` is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable source.
    ///
    /// # Errors
    ///
    /// Returns an error when `PORT` or `UPLOAD_MODE` is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let upload_mode = match var("UPLOAD_MODE") {
            Some(raw) => UploadMode::parse(&raw).ok_or(ConfigError::Invalid { key: "UPLOAD_MODE", value: raw })?,
            None => UploadMode::default(),
        };

        let defaults = RelayConfig::default();
        let relay = RelayConfig {
            api_key: var("RESEND_API_KEY"),
            from: var("EMAIL_FROM").unwrap_or(defaults.from),
            subject: var("EMAIL_SUBJECT").unwrap_or(defaults.subject),
            attachment_name: var("EMAIL_ATTACHMENT_NAME").unwrap_or(defaults.attachment_name),
        };

        let gallery = GalleryConfig::from_parts(
            var("SUPABASE_URL").as_deref(),
            var("SUPABASE_ANON_KEY").as_deref(),
            var("SUPABASE_BUCKET").as_deref(),
        );

        Ok(Self {
            port,
            site_dir: PathBuf::from(var("SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.to_owned())),
            relay,
            page: PageConfig { gallery, upload_mode, event_id: var("EVENT_ID") },
        })
    }
}
