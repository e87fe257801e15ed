//! Supabase-backed gallery: Storage for the JPEG, PostgREST for the
//! `gallery` table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credentials come from `/api/config` and are the public anon key, so the
//! browser talks to Supabase directly. Without a configured gallery no
//! `SupabaseGallery` is built and publishing is skipped.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use booth::config::{GalleryConfig, PageConfig};
use booth::sync::{GalleryBackend, GalleryRecord, NewRecord, RecordId, SyncClient, SyncError};

const TABLE: &str = "gallery";

/// Gallery backend over Supabase REST endpoints.
#[derive(Debug, Clone)]
pub struct SupabaseGallery {
    config: GalleryConfig,
}

impl SupabaseGallery {
    pub fn new(config: GalleryConfig) -> Self {
        Self { config }
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{path}", self.config.url, self.config.bucket)
    }

    fn public_object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{path}", self.config.url, self.config.bucket)
    }

    fn insert_url(&self) -> String {
        format!("{}/rest/v1/{TABLE}?select=id", self.config.url)
    }

    fn update_url(&self, id: &RecordId) -> String {
        format!("{}/rest/v1/{TABLE}?id=eq.{id}", self.config.url)
    }

    fn recent_url(&self, limit: usize) -> String {
        format!("{}/rest/v1/{TABLE}?select=*&order=created_at.desc&limit={limit}", self.config.url)
    }

    #[cfg(feature = "hydrate")]
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.config.anon_key))
    }
}

/// Sync client for the configured gallery, if any. New records carry the
/// page's event id.
pub fn sync_client(page: &PageConfig) -> Option<SyncClient<SupabaseGallery>> {
    let gallery = page.gallery.clone()?;
    Some(SyncClient::new(SupabaseGallery::new(gallery)).with_event(page.event_id.clone()))
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct InsertedRow {
    id: RecordId,
}

#[cfg(feature = "hydrate")]
async fn failure_text(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    format!("{status} {body}")
}

#[async_trait::async_trait(?Send)]
impl GalleryBackend for SupabaseGallery {
    async fn put_object(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let body = js_sys::Uint8Array::from(bytes.as_slice());
            let resp = self
                .authorized(gloo_net::http::Request::post(&self.object_url(path)))
                .header("Content-Type", content_type)
                .body(body)
                .map_err(|e| SyncError::Storage(e.to_string()))?
                .send()
                .await
                .map_err(|e| SyncError::Storage(e.to_string()))?;
            if !resp.ok() {
                return Err(SyncError::Storage(failure_text(resp).await));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.object_url(path), bytes, content_type);
            Err(SyncError::NotConfigured)
        }
    }

    fn public_url(&self, path: &str) -> String {
        self.public_object_url(path)
    }

    async fn insert_record(&self, record: &NewRecord) -> Result<RecordId, SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorized(gloo_net::http::Request::post(&self.insert_url()))
                .header("Prefer", "return=representation")
                .json(&[record])
                .map_err(|e| SyncError::Insert(e.to_string()))?
                .send()
                .await
                .map_err(|e| SyncError::Insert(e.to_string()))?;
            if !resp.ok() {
                return Err(SyncError::Insert(failure_text(resp).await));
            }
            let rows: Vec<InsertedRow> = resp.json().await.map_err(|e| SyncError::Insert(e.to_string()))?;
            rows.into_iter()
                .next()
                .map(|row| row.id)
                .ok_or_else(|| SyncError::Insert("insert returned no row".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.insert_url(), record);
            Err(SyncError::NotConfigured)
        }
    }

    async fn update_caption(&self, id: &RecordId, caption: &str) -> Result<(), SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorized(gloo_net::http::Request::patch(&self.update_url(id)))
                .json(&serde_json::json!({ "caption": caption }))
                .map_err(|e| SyncError::Update(e.to_string()))?
                .send()
                .await
                .map_err(|e| SyncError::Update(e.to_string()))?;
            if !resp.ok() {
                return Err(SyncError::Update(failure_text(resp).await));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.update_url(id), caption);
            Err(SyncError::NotConfigured)
        }
    }

    async fn recent(&self, limit: usize) -> Result<Vec<GalleryRecord>, SyncError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorized(gloo_net::http::Request::get(&self.recent_url(limit)))
                .send()
                .await
                .map_err(|e| SyncError::Fetch(e.to_string()))?;
            if !resp.ok() {
                return Err(SyncError::Fetch(failure_text(resp).await));
            }
            resp.json().await.map_err(|e| SyncError::Fetch(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.recent_url(limit);
            Err(SyncError::NotConfigured)
        }
    }
}
