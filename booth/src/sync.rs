//! Upload/sync client: publish a card's photo to the remote gallery and keep
//! its caption in step with the gallery record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery lives in an external object store plus a `gallery` table.
//! `GalleryBackend` is the seam: the browser implements it over HTTP, tests
//! implement it in memory.
//!
//! CAPTION RECONCILIATION
//! ======================
//! A card exists before its record does. Caption edits committed before the
//! record exists wait on the card as `pending_caption`; the insert reads that
//! value at the moment it is built. An edit committed while the insert call
//! itself is in flight is detected once the record id is known and written
//! with one update. Edits after that go straight to the record.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is user-visible. Failures are logged, the card is marked
//! `Failed`, and it stays usable. There is no retry.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::card::{CardId, SyncStatus};
use crate::consts::{GALLERY_PAGE_SIZE, OBJECT_PREFIX, OBJECT_SUFFIX_LEN, PHOTO_MIME};
use crate::photo::{ImageRef, PhotoError, decode_photo};
use crate::session::Session;

// =============================================================================
// TYPES
// =============================================================================

/// Server-generated gallery record id. The table may hand back integers or
/// strings; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Int(n) => Self(n.to_string()),
        })
    }
}

/// One row of the `gallery` table as read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryRecord {
    pub id: RecordId,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
}

impl GalleryRecord {
    /// Caption as shown in the gallery grid.
    #[must_use]
    pub fn display_caption(&self) -> &str {
        match self.caption.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => "Untitled",
        }
    }
}

/// Row written by the insert step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    pub url: String,
    pub caption: String,
    pub created_at: String,
    pub event_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("gallery backend is not configured")]
    NotConfigured,
    #[error("card is no longer on the page")]
    CardGone,
    #[error("card is already uploading or published")]
    AlreadyActive,
    #[error(transparent)]
    Photo(#[from] PhotoError),
    #[error("storage upload failed: {0}")]
    Storage(String),
    #[error("record insert failed: {0}")]
    Insert(String),
    #[error("caption update failed: {0}")]
    Update(String),
    #[error("gallery fetch failed: {0}")]
    Fetch(String),
}

// =============================================================================
// SEAMS
// =============================================================================

/// Remote object store plus gallery table.
#[async_trait::async_trait(?Send)]
pub trait GalleryBackend {
    /// Store `bytes` under `path`.
    async fn put_object(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), SyncError>;

    /// Public URL for a stored object.
    fn public_url(&self, path: &str) -> String;

    /// Insert a row and return its id.
    async fn insert_record(&self, record: &NewRecord) -> Result<RecordId, SyncError>;

    /// Overwrite the caption of an existing row.
    async fn update_caption(&self, id: &RecordId, caption: &str) -> Result<(), SyncError>;

    /// Most recent rows, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<GalleryRecord>, SyncError>;
}

/// Short-lived mutable access to the page session. The sync flow never
/// holds a borrow across an await.
pub trait SessionAccess {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R;
}

impl SessionAccess for RefCell<Session> {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl SessionAccess for Rc<RefCell<Session>> {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

// =============================================================================
// NAMING
// =============================================================================

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Object path `photos/{unix_millis}_{suffix}.jpg` with a random base36
/// suffix.
pub fn object_path<R: Rng>(now_ms: u64, rng: &mut R) -> String {
    let suffix: String = (0..OBJECT_SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect();
    format!("{OBJECT_PREFIX}/{now_ms}_{suffix}.jpg")
}

// =============================================================================
// CLIENT
// =============================================================================

/// Drives publishes and caption writes against one backend.
pub struct SyncClient<B> {
    backend: B,
    event_id: Option<String>,
}

impl<B: GalleryBackend> SyncClient<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend, event_id: None }
    }

    /// Tag every inserted record with an event.
    #[must_use]
    pub fn with_event(mut self, event_id: Option<String>) -> Self {
        self.event_id = event_id;
        self
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Publish a card in the background. Failures are logged and leave the
    /// card marked `Failed`; the caller never sees them.
    pub async fn publish<S: SessionAccess>(&self, session: &S, card: CardId, path: &str) -> Option<RecordId> {
        match self.try_publish(session, card, path).await {
            Ok(id) => Some(id),
            Err(SyncError::AlreadyActive) => None,
            Err(SyncError::CardGone) => {
                log::warn!("gallery upload dropped: card {card} was removed");
                None
            }
            Err(e) => {
                log::error!("gallery upload failed: {e}");
                session.with_session(|s| {
                    if let Some(c) = s.card_mut(card) {
                        c.sync = SyncStatus::Failed;
                    }
                });
                None
            }
        }
    }

    /// Publish a card, reporting the first failure.
    ///
    /// # Errors
    ///
    /// Returns the failing step. The card's sync status is left for the
    /// caller to settle.
    pub async fn try_publish<S: SessionAccess>(&self, session: &S, card: CardId, path: &str) -> Result<RecordId, SyncError> {
        let (image, mut record) = session.with_session(|s| {
            let c = s.card_mut(card).ok_or(SyncError::CardGone)?;
            if c.sync.is_active() {
                return Err(SyncError::AlreadyActive);
            }
            c.sync = SyncStatus::Syncing;
            let record = NewRecord {
                url: String::new(),
                caption: c.caption_for_insert(),
                created_at: c.created_at.clone(),
                event_id: self.event_id.clone(),
            };
            Ok((c.image.clone(), record))
        })?;

        let url = match image {
            ImageRef::DataUri(data) => {
                let bytes = decode_photo(&data)?;
                self.backend.put_object(path, bytes, PHOTO_MIME).await?;
                self.backend.public_url(path)
            }
            ImageRef::Remote(url) => url,
        };

        // A card removed during the upload still gets its record, carrying
        // the caption committed before it left.
        let present = session.with_session(|s| match s.card_mut(card) {
            Some(c) => {
                c.public_url = Some(url.clone());
                record.caption = c.caption_for_insert();
                true
            }
            None => false,
        });
        record.url = url;

        let id = self.backend.insert_record(&record).await?;
        log::info!("photo saved to gallery: {} (id {id})", record.url);
        if !present {
            log::debug!("card {card} left before its record was written");
        }

        let stale = session.with_session(|s| {
            let c = s.card_mut(card)?;
            c.record_id = Some(id.clone());
            c.sync = SyncStatus::Synced;
            let latest = c.caption_for_insert();
            (latest != record.caption).then_some(latest)
        });

        if let Some(caption) = stale {
            self.push_caption(&id, &caption).await;
        }
        Ok(id)
    }

    /// Write a caption to an existing record. Failures are logged only.
    pub async fn push_caption(&self, id: &RecordId, caption: &str) {
        match self.backend.update_caption(id, caption).await {
            Ok(()) => log::info!("caption updated for record {id}"),
            Err(e) => log::error!("caption update failed for record {id}: {e}"),
        }
    }

    /// The most recent gallery page, newest first.
    ///
    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn recent(&self) -> Result<Vec<GalleryRecord>, SyncError> {
        self.backend.recent(GALLERY_PAGE_SIZE).await
    }
}
