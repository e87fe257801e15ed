//! Page chrome state: which modals are open, whether the flash is firing.
//!
//! DESIGN
//! ======
//! The email dialog lives in the session because its target is a card.
//! The gallery and consent modals have no card-bound state beyond the
//! session's pending share, so their visibility lives here.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use booth::session::Session;

/// Modal and effect visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub gallery_open: bool,
    pub consent_open: bool,
    /// Shutter flash overlay is showing.
    pub flash: bool,
    /// Bumped on every gallery open so the modal refetches.
    pub gallery_seq: u64,
}

impl UiState {
    pub fn open_gallery(&mut self) {
        self.gallery_open = true;
        self.gallery_seq += 1;
    }

    pub fn close_gallery(&mut self) {
        self.gallery_open = false;
    }

    pub fn open_consent(&mut self) {
        self.consent_open = true;
    }

    /// Hide the consent prompt and forget the card waiting on it.
    pub fn dismiss_consent(&mut self, session: &mut Session) {
        self.consent_open = false;
        session.decline_share();
    }

    #[must_use]
    pub fn any_modal_open(&self, session: &Session) -> bool {
        self.gallery_open || self.consent_open || session.email().is_some()
    }
}

/// Escape closes every open modal.
pub fn close_all_modals(ui: &mut UiState, session: &mut Session) {
    if ui.consent_open {
        ui.dismiss_consent(session);
    }
    ui.close_gallery();
    session.close_email();
}
