//! Outbound email through Resend.
//!
//! `Mailer` is the seam between the relay and the provider so relay and
//! route tests can count provider calls without network access.

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;

use resend_rs::Resend;
use resend_rs::types::{CreateAttachment, CreateEmailBaseOptions};

const PHOTO_EMAIL_TEMPLATE: &str = include_str!("../../templates/photo_email.html");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MailError {
    #[error("{0}")]
    Provider(String),
}

/// One photo email, ready to hand to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachment_name: String,
    pub content_type: String,
    pub photo: Vec<u8>,
}

/// Email provider abstraction. Returns the provider's message id.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`MailError::Provider`] with the provider's message when the
    /// send is rejected or the provider cannot be reached.
    async fn send(&self, email: PhotoEmail) -> Result<String, MailError>;
}

/// Resend-backed mailer.
pub struct ResendMailer {
    resend: Resend,
}

impl ResendMailer {
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self { resend: Resend::new(api_key) }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: PhotoEmail) -> Result<String, MailError> {
        let sent = self
            .resend
            .emails
            .send(provider_message(email))
            .await
            .map_err(|e| MailError::Provider(e.to_string()))?;
        Ok(sent.id.to_string())
    }
}

/// Provider request for one photo email, with the photo as a JPEG attachment.
fn provider_message(email: PhotoEmail) -> CreateEmailBaseOptions {
    let attachment = CreateAttachment::from_content(email.photo)
        .with_filename(&email.attachment_name)
        .with_content_type(&email.content_type);
    CreateEmailBaseOptions::new(&email.from, [email.to.as_str()], &email.subject)
        .with_html(&email.html)
        .with_attachment(attachment)
}

/// Fill the photo email template. The caption, when present, is escaped and
/// shown under the heading.
#[must_use]
pub fn render_photo_email(caption: Option<&str>) -> String {
    let block = match caption.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => format!(r#"<p style="text-align: center; font-style: italic; color: #333;">&ldquo;{}&rdquo;</p>"#, escape_html(c)),
        None => String::new(),
    };
    PHOTO_EMAIL_TEMPLATE.replace("{{CAPTION_BLOCK}}", &block)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
