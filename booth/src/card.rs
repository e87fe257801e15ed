//! The polaroid card: one captured photo on the page.
//!
//! A card is created in the ejection slot, developing, with no remote record.
//! Everything the page shows about it (position, tilt, side, developing
//! phase, share state) lives here so the view layer stays a pure projection.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::caption::CaptionEditor;
use crate::drag::DragController;
use crate::geom::Point;
use crate::photo::ImageRef;
use crate::sync::RecordId;

/// Unique identifier for a card.
pub type CardId = Uuid;

/// Which face of the card is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Where the card currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Freshly ejected, sitting in the camera's slot.
    #[default]
    Slot,
    /// Free-floating on the desk at `Card::position`.
    Desk,
}

/// Developing animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Developing {
    /// Just created; the image is still blank.
    #[default]
    Start,
    /// Slowly fading in.
    Slow,
    /// Sped up because the user grabbed the card.
    Fast,
}

impl Developing {
    /// CSS class driving the animation.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Start => "developing-start",
            Self::Slow => "developing-slow",
            Self::Fast => "developing-fast",
        }
    }
}

/// Gallery sync status, observable by the view and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    #[default]
    Unsynced,
    Syncing,
    Synced,
    Failed,
}

impl SyncStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unsynced => "unsynced",
            Self::Syncing => "syncing",
            Self::Synced => "synced",
            Self::Failed => "failed",
        }
    }

    /// Whether an upload is running or has finished.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Syncing | Self::Synced)
    }
}

/// Result of committing the caption on blur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionCommit {
    /// No record yet; the caption waits on the card for the insert.
    Deferred,
    /// The record exists; write the caption to it now.
    Update { id: RecordId, caption: String },
}

/// One photo on the page.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: CardId,
    pub image: ImageRef,
    pub caption: CaptionEditor,
    /// Last caption committed on blur, read by the record insert.
    pub pending_caption: Option<String>,
    /// ISO-8601 capture time.
    pub created_at: String,
    /// `YYYY/MM/DD` label printed under the photo.
    pub date_label: String,
    /// Top-left offset in CSS pixels. Meaningful once on the desk.
    pub position: Point,
    /// Rotation in degrees.
    pub rotation: f64,
    pub scale: f64,
    pub side: Side,
    pub placement: Placement,
    pub developing: Developing,
    /// Raised above every other card while held.
    pub lifted: bool,
    /// Set after the first drop.
    pub can_share: bool,
    /// Release transition is running.
    pub settling: bool,
    pub record_id: Option<RecordId>,
    pub public_url: Option<String>,
    pub sync: SyncStatus,
    pub drag: DragController,
}

impl Card {
    /// A fresh card in the slot.
    #[must_use]
    pub fn new(image: ImageRef, created_at: String, date_label: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            caption: CaptionEditor::new(),
            pending_caption: None,
            created_at,
            date_label,
            position: Point::default(),
            rotation: 0.0,
            scale: 1.0,
            side: Side::Front,
            placement: Placement::Slot,
            developing: Developing::Start,
            lifted: false,
            can_share: false,
            settling: false,
            record_id: None,
            public_url: None,
            sync: SyncStatus::Unsynced,
            drag: DragController::new(),
        }
    }

    /// Toggle front/back. Nothing else changes.
    pub fn flip(&mut self) {
        self.side = self.side.flipped();
    }

    /// Move from the start phase into the slow fade.
    pub fn begin_developing(&mut self) {
        if self.developing == Developing::Start {
            self.developing = Developing::Slow;
        }
    }

    /// Store the caption on blur and decide whether it can be written now.
    pub fn commit_caption(&mut self) -> CaptionCommit {
        let caption = self.caption.committed();
        self.pending_caption = Some(caption.clone());
        match &self.record_id {
            Some(id) => CaptionCommit::Update { id: id.clone(), caption },
            None => CaptionCommit::Deferred,
        }
    }

    /// Caption the record insert must carry, read at insert time.
    #[must_use]
    pub fn caption_for_insert(&self) -> String {
        self.pending_caption.clone().unwrap_or_default()
    }

    /// Caption as shown, trimmed, for the email flow.
    #[must_use]
    pub fn display_caption(&self) -> String {
        self.caption.committed()
    }
}
