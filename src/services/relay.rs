//! Email relay: validate a photo email request and forward it to the
//! provider.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to one `RelayError` variant, and each variant to one
//! status code and `{error, message}` body. Configuration and provider
//! failures are 500; anything wrong with the request is 400.

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;

use std::sync::Arc;

use axum::http::StatusCode;
use booth::consts::PHOTO_MIME;
use booth::email::{EmailRequest, RelayFailure, RelaySuccess, is_valid_email};
use booth::photo::{PhotoError, decode_photo};

use super::mailer::{Mailer, PhotoEmail, render_photo_email};
use crate::config::RelayConfig;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("email service is not configured")]
    NotConfigured,
    #[error("request body is not valid JSON")]
    MalformedBody,
    #[error("email and photo data are required")]
    MissingFields,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid photo data: {0}")]
    InvalidPhoto(#[from] PhotoError),
    #[error("provider rejected the email: {0}")]
    Provider(String),
}

impl RelayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured | Self::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MalformedBody | Self::MissingFields | Self::InvalidEmail | Self::InvalidPhoto(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Response body the client shows verbatim.
    #[must_use]
    pub fn body(&self) -> RelayFailure {
        let (error, message) = match self {
            Self::NotConfigured => ("Configuration error", "Email service is not configured".to_owned()),
            Self::MalformedBody => ("Invalid request", "Request body must be JSON".to_owned()),
            Self::MissingFields => ("Missing required fields", "Email and photo data are required".to_owned()),
            Self::InvalidEmail => ("Invalid email", "Please provide a valid email address".to_owned()),
            Self::InvalidPhoto(_) => ("Invalid photo", "Photo data could not be decoded".to_owned()),
            Self::Provider(message) => ("Email send failed", message.clone()),
        };
        RelayFailure { error: error.to_owned(), message: Some(message) }
    }
}

/// Validates requests and forwards them to the configured mailer.
#[derive(Clone)]
pub struct Relay {
    config: RelayConfig,
    mailer: Option<Arc<dyn Mailer>>,
}

impl Relay {
    #[must_use]
    pub fn new(config: RelayConfig, mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self { config, mailer }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.mailer.is_some()
    }

    /// Validate and send one photo email.
    ///
    /// # Errors
    ///
    /// Returns the first failing check in order: configuration, required
    /// fields, address syntax, photo decoding, provider send.
    pub async fn dispatch(&self, request: EmailRequest) -> Result<RelaySuccess, RelayError> {
        let mailer = self.mailer.as_ref().ok_or(RelayError::NotConfigured)?;

        let email = request.email.filter(|e| !e.is_empty()).ok_or(RelayError::MissingFields)?;
        let photo_data = request.photo_data.filter(|p| !p.is_empty()).ok_or(RelayError::MissingFields)?;
        if !is_valid_email(&email) {
            return Err(RelayError::InvalidEmail);
        }
        let photo = decode_photo(&photo_data)?;

        let message = PhotoEmail {
            from: self.config.from.clone(),
            to: email,
            subject: self.config.subject.clone(),
            html: render_photo_email(request.caption.as_deref()),
            attachment_name: self.config.attachment_name.clone(),
            content_type: PHOTO_MIME.to_owned(),
            photo,
        };
        let id = mailer.send(message).await.map_err(|e| RelayError::Provider(e.to_string()))?;

        Ok(RelaySuccess { success: true, message: "Email sent successfully!".to_owned(), id })
    }
}
