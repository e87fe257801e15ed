//! Polaroid factory: turns a captured image into a card ready for the slot.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use crate::card::Card;
use crate::photo::ImageRef;

/// Wall-clock time of a shutter activation, as read by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTime {
    /// ISO-8601 timestamp stored on the gallery record.
    pub iso: String,
    /// Local calendar date.
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CaptureTime {
    /// `YYYY/MM/DD`.
    #[must_use]
    pub fn date_label(&self) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Build a developing card for a fresh capture.
#[must_use]
pub fn polaroid(image: ImageRef, time: &CaptureTime) -> Card {
    Card::new(image, time.iso.clone(), time.date_label())
}
