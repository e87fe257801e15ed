//! Page session: the single owner of every card and of the page-wide slots
//! (ejection slot, email target, share consent).
//!
//! DESIGN
//! ======
//! The browser runs one session per page load. Handlers borrow it for the
//! length of one event; nothing else holds card state. Async work (gallery
//! sync, email relay) re-borrows it after each network call and must cope
//! with the card having been removed in the meantime.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::caption::Rewrite;
use crate::card::{Card, CardId, CaptionCommit};
use crate::drag::Region;
use crate::email::EmailDialog;
use crate::geom::{Point, Rect};

/// When captures are published to the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMode {
    /// Every capture is published in the background as soon as it is taken.
    #[default]
    Auto,
    /// Captures are published only through the share button, behind a
    /// one-time consent prompt.
    Consent,
}

impl UploadMode {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "consent" => Some(Self::Consent),
            _ => None,
        }
    }
}

/// Outcome of a shutter activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ejection {
    pub card: CardId,
    /// Previous un-filed capture, removed from the page.
    pub replaced: Option<CardId>,
    /// Start a background publish for `card` now.
    pub publish: bool,
}

/// What the share button should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareDecision {
    /// Publish this card now.
    Publish(CardId),
    /// Show the consent prompt; the card waits as the pending share.
    AskConsent,
    /// Already uploading or published, or unknown card.
    Ignore,
}

/// Page-level state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cards: Vec<Card>,
    slot: Option<CardId>,
    dragging: Option<CardId>,
    email: Option<EmailDialog>,
    email_seq: u64,
    pending_share: Option<CardId>,
    share_confirmed: bool,
    upload_mode: UploadMode,
}

impl Session {
    #[must_use]
    pub fn new(upload_mode: UploadMode, share_confirmed: bool) -> Self {
        Self { upload_mode, share_confirmed, ..Self::default() }
    }

    // --- Queries ---

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// The un-filed capture sitting in the slot.
    #[must_use]
    pub fn slot(&self) -> Option<CardId> {
        self.slot
    }

    #[must_use]
    pub fn dragging(&self) -> Option<CardId> {
        self.dragging
    }

    pub fn set_upload_mode(&mut self, mode: UploadMode) {
        self.upload_mode = mode;
    }

    #[must_use]
    pub fn share_confirmed(&self) -> bool {
        self.share_confirmed
    }

    #[cfg(test)]
    pub(crate) fn pending_share(&self) -> Option<CardId> {
        self.pending_share
    }

    #[must_use]
    pub fn email(&self) -> Option<&EmailDialog> {
        self.email.as_ref()
    }

    pub fn email_mut(&mut self) -> Option<&mut EmailDialog> {
        self.email.as_mut()
    }

    // --- Capture ---

    /// Put a fresh capture into the slot, removing whatever was there.
    pub fn eject(&mut self, card: Card) -> Ejection {
        let replaced = self.slot.take();
        if let Some(old) = replaced {
            self.remove(old);
        }
        let id = card.id;
        self.cards.push(card);
        self.slot = Some(id);
        Ejection { card: id, replaced, publish: self.upload_mode == UploadMode::Auto }
    }

    /// Remove one card. Outstanding network calls for it finish unobserved.
    pub fn remove(&mut self, id: CardId) {
        self.cards.retain(|c| c.id != id);
        if self.slot == Some(id) {
            self.slot = None;
        }
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        if self.pending_share == Some(id) {
            self.pending_share = None;
        }
        if let Some(dialog) = self.email.as_mut() {
            if dialog.target == Some(id) {
                dialog.target = None;
            }
        }
    }

    /// Remove every card and empty the slot.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.slot = None;
        self.dragging = None;
        self.pending_share = None;
        self.email = None;
    }

    // --- Drag ---

    /// Pointer-down on a card. Returns `true` when a drag began.
    pub fn pointer_down(&mut self, id: CardId, region: Region, pointer: Point, bounds: Rect) -> bool {
        if self.dragging.is_some() {
            return false;
        }
        let Some(card) = self.card_mut(id) else {
            return false;
        };
        if !card.pointer_down(region, pointer, bounds) {
            return false;
        }
        if self.slot == Some(id) {
            self.slot = None;
        }
        self.dragging = Some(id);
        true
    }

    /// Pointer-move anywhere on the page.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(id) = self.dragging else {
            return false;
        };
        self.card_mut(id).is_some_and(|card| card.pointer_move(pointer))
    }

    /// Pointer-up anywhere on the page. Returns the dropped card and its
    /// settle rotation.
    pub fn pointer_up<R: Rng>(&mut self, rng: &mut R) -> Option<(CardId, f64)> {
        let id = self.dragging.take()?;
        let rotation = self.card_mut(id)?.pointer_up(rng)?;
        Some((id, rotation))
    }

    /// The settle transition for `id` has run its course.
    pub fn settled(&mut self, id: CardId) {
        if let Some(card) = self.card_mut(id) {
            card.settling = false;
        }
    }

    // --- Card controls ---

    pub fn flip(&mut self, id: CardId) {
        if let Some(card) = self.card_mut(id) {
            card.flip();
        }
    }

    pub fn begin_developing(&mut self, id: CardId) {
        if let Some(card) = self.card_mut(id) {
            card.begin_developing();
        }
    }

    /// Caption input event. Returns the rewrite the region needs, if any.
    pub fn caption_input(&mut self, id: CardId, raw: &str) -> Option<Rewrite> {
        self.card_mut(id)?.caption.input(raw)
    }

    /// Caption blur. Returns `None` for unknown cards.
    pub fn caption_blur(&mut self, id: CardId) -> Option<CaptionCommit> {
        Some(self.card_mut(id)?.commit_caption())
    }

    // --- Share ---

    pub fn request_share(&mut self, id: CardId) -> ShareDecision {
        let Some(card) = self.card(id) else {
            return ShareDecision::Ignore;
        };
        if card.sync.is_active() {
            return ShareDecision::Ignore;
        }
        if self.share_confirmed {
            return ShareDecision::Publish(id);
        }
        self.pending_share = Some(id);
        ShareDecision::AskConsent
    }

    /// User agreed to share. Returns the card waiting on the prompt.
    pub fn confirm_share(&mut self) -> Option<CardId> {
        self.share_confirmed = true;
        self.pending_share.take().filter(|id| self.card(*id).is_some())
    }

    pub fn decline_share(&mut self) {
        self.pending_share = None;
    }

    // --- Email ---

    /// Open the email dialog for `id`. Returns the dialog sequence number.
    pub fn open_email(&mut self, id: CardId) -> u64 {
        self.email_seq += 1;
        self.email = Some(EmailDialog::open(self.email_seq, id));
        self.email_seq
    }

    pub fn close_email(&mut self) {
        self.email = None;
    }

    /// Close the dialog only if it is still the opening numbered `seq`.
    pub fn close_email_if(&mut self, seq: u64) {
        if self.email.as_ref().is_some_and(|d| d.seq == seq) {
            self.email = None;
        }
    }
}
