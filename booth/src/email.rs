//! Email dispatch: relay wire types, address validation, and the dialog
//! state machine that drives the client form.
//!
//! The relay itself lives in the server crate; both sides share the types
//! here so the request and response shapes cannot drift.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::photo::ImageRef;

pub const MSG_NO_PHOTO: &str = "Error: No photo selected";
pub const MSG_NO_ADDRESS: &str = "Please enter your email address";
pub const MSG_PHOTO_MISSING: &str = "Error: Could not find photo";
pub const MSG_SENT: &str = "✓ Email sent! Check your inbox.";
pub const MSG_SEND_FAILED: &str = "Failed to send email. Please try again.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Syntactic address check: something, `@`, something, `.`, something, no spaces.
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of `POST /api/send-email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    #[serde(default)]
    pub email: Option<String>,
    /// Data URI or raw base64.
    #[serde(default)]
    pub photo_data: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// `200` body from the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySuccess {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// Error body from the relay (`400`, `405`, `500`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// DIALOG
// =============================================================================

/// Submit state of the email form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Success(String),
    Error(String),
}

/// A send the dialog has committed to; the host still has to make sure the
/// image is a data URI before building the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub address: String,
    pub image: ImageRef,
    pub caption: String,
}

impl OutgoingEmail {
    /// Final request body once the photo is in data form.
    #[must_use]
    pub fn into_request(self, photo_data: String) -> EmailRequest {
        EmailRequest { email: Some(self.address), photo_data: Some(photo_data), caption: Some(self.caption) }
    }
}

/// The open email dialog: one card, one address, one submit state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDialog {
    /// Distinguishes this opening from later ones, so a stale auto-close
    /// cannot close a newer dialog.
    pub seq: u64,
    pub target: Option<CardId>,
    pub address: String,
    pub status: SendStatus,
}

impl EmailDialog {
    #[must_use]
    pub fn open(seq: u64, target: CardId) -> Self {
        Self { seq, target: Some(target), address: String::new(), status: SendStatus::Idle }
    }

    /// Validate and enter `Sending`.
    ///
    /// `card` is the target card as currently found on the page.
    ///
    /// # Errors
    ///
    /// Returns the inline status message when the form cannot be sent. The
    /// dialog is left showing that message.
    pub fn begin_send(&mut self, card: Option<&Card>) -> Result<OutgoingEmail, String> {
        if self.status == SendStatus::Sending {
            return Err("already sending".to_owned());
        }
        let outcome = self.validate(card);
        match &outcome {
            Ok(_) => self.status = SendStatus::Sending,
            Err(message) => self.status = SendStatus::Error(message.clone()),
        }
        outcome
    }

    fn validate(&self, card: Option<&Card>) -> Result<OutgoingEmail, String> {
        if self.target.is_none() {
            return Err(MSG_NO_PHOTO.to_owned());
        }
        let address = self.address.trim();
        if address.is_empty() {
            return Err(MSG_NO_ADDRESS.to_owned());
        }
        let card = card.ok_or_else(|| MSG_PHOTO_MISSING.to_owned())?;
        Ok(OutgoingEmail { address: address.to_owned(), image: card.image.clone(), caption: card.display_caption() })
    }

    /// Record the relay outcome.
    pub fn finish(&mut self, outcome: Result<RelaySuccess, String>) {
        self.status = match outcome {
            Ok(_) => SendStatus::Success(MSG_SENT.to_owned()),
            Err(message) if message.trim().is_empty() => SendStatus::Error(MSG_SEND_FAILED.to_owned()),
            Err(message) => SendStatus::Error(message),
        };
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.status == SendStatus::Sending { "Sending..." } else { "Send" }
    }

    /// Submit stays disabled while sending and after success.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        matches!(self.status, SendStatus::Sending | SendStatus::Success(_))
    }

    #[must_use]
    pub fn status_text(&self) -> &str {
        match &self.status {
            SendStatus::Idle | SendStatus::Sending => "",
            SendStatus::Success(m) | SendStatus::Error(m) => m,
        }
    }

    #[must_use]
    pub fn status_class(&self) -> &'static str {
        match self.status {
            SendStatus::Idle | SendStatus::Sending => "email-status",
            SendStatus::Success(_) => "email-status success",
            SendStatus::Error(_) => "email-status error",
        }
    }

    /// Whether the dialog should schedule its auto-close.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self.status, SendStatus::Success(_))
    }
}

/// Message to show for a non-2xx relay response.
#[must_use]
pub fn failure_message(body: Option<&RelayFailure>) -> String {
    body.and_then(|b| b.message.clone())
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Failed to send email".to_owned())
}
