//! Caption editing rules.
//!
//! The caption region is free-form text with two hard rules: it never holds
//! more than [`MAX_CAPTION_LEN`] characters and it never holds a line break.
//! The host feeds the region's raw text after every input event; when the
//! text breaks a rule the editor hands back a [`Rewrite`] that the host must
//! write back into the region, placing the cursor at the end.

#[cfg(test)]
#[path = "caption_test.rs"]
mod caption_test;

use crate::consts::MAX_CAPTION_LEN;

/// Replacement text for the caption region after a rule was broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Text to write back into the region.
    pub text: String,
    /// Cursor position, in characters, after the rewrite. Always the end.
    pub cursor: usize,
}

/// What the host should do with a key press inside the caption region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Let the browser handle the key.
    Pass,
    /// Call `preventDefault`; the key must not reach the region.
    Swallow,
}

/// Live caption text for one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionEditor {
    text: String,
}

impl CaptionEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text as shown in the region.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply the region's raw text after an input event.
    ///
    /// Returns `Some` when the region must be rewritten.
    pub fn input(&mut self, raw: &str) -> Option<Rewrite> {
        let cleaned = sanitize(raw);
        let rewrite = (cleaned != raw).then(|| Rewrite { cursor: cleaned.chars().count(), text: cleaned.clone() });
        self.text = cleaned;
        rewrite
    }

    /// Decide how a key press is handled.
    #[must_use]
    pub fn key_down(&self, key: &str) -> KeyDisposition {
        if key == "Enter" { KeyDisposition::Swallow } else { KeyDisposition::Pass }
    }

    /// Text to commit when the region loses focus.
    #[must_use]
    pub fn committed(&self) -> String {
        self.text.trim().to_owned()
    }
}

/// Strip line breaks and cut to the caption cap.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .take(MAX_CAPTION_LEN)
        .collect()
}
