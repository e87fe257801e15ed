//! Page configuration handed from the server to the browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BUCKET;
use crate::session::UploadMode;

/// Markers left in unedited `.env` templates.
const PLACEHOLDER_MARKERS: [&str; 2] = ["your-project", "your-anon"];

/// Public gallery credentials. The anon key is meant to be shipped to
/// browsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub url: String,
    pub anon_key: String,
    pub bucket: String,
}

impl GalleryConfig {
    /// Build from raw settings. Returns `None` when either credential is
    /// missing, blank, or still a template placeholder.
    #[must_use]
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>, bucket: Option<&str>) -> Option<Self> {
        let url = usable(url)?.trim_end_matches('/');
        let anon_key = usable(anon_key)?;
        let bucket = bucket.map(str::trim).filter(|b| !b.is_empty()).unwrap_or(DEFAULT_BUCKET);
        Some(Self { url: url.to_owned(), anon_key: anon_key.to_owned(), bucket: bucket.to_owned() })
    }
}

fn usable(raw: Option<&str>) -> Option<&str> {
    let value = raw?.trim();
    if value.is_empty() || PLACEHOLDER_MARKERS.iter().any(|m| value.contains(m)) {
        return None;
    }
    Some(value)
}

/// Body of `GET /api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageConfig {
    pub gallery: Option<GalleryConfig>,
    #[serde(default)]
    pub upload_mode: UploadMode,
    /// Event every new gallery record is tagged with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}
