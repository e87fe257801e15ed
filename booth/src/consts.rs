//! Shared numeric constants for the booth crate.

// ── Caption ─────────────────────────────────────────────────────

/// Hard cap on caption length, in characters.
pub const MAX_CAPTION_LEN: usize = 27;

// ── Capture ─────────────────────────────────────────────────────

/// Edge length of the captured still, in pixels.
pub const PHOTO_SIZE_PX: u32 = 400;

/// Ideal camera resolution requested from the browser.
pub const CAMERA_IDEAL_PX: u32 = 480;

/// MIME type of the captured still and every uploaded object.
pub const PHOTO_MIME: &str = "image/jpeg";

/// Duration of the shutter flash.
pub const FLASH_MS: u64 = 100;

// ── Drag ────────────────────────────────────────────────────────

/// Degrees of tilt per pixel of horizontal drag.
pub const TILT_PER_PX: f64 = 0.1;

/// Maximum tilt, in degrees, while dragging (applied symmetrically).
pub const MAX_TILT_DEG: f64 = 8.0;

/// Scale factor applied to a card while it is lifted.
pub const LIFT_SCALE: f64 = 1.05;

/// Bound of the random settle rotation applied on release (symmetric, degrees).
pub const SETTLE_ROTATION_DEG: f64 = 10.0;

/// Length of the settle transition after release.
pub const SETTLE_TRANSITION_MS: u64 = 200;

// ── Gallery ─────────────────────────────────────────────────────

/// Number of records fetched for the gallery view.
pub const GALLERY_PAGE_SIZE: usize = 50;

/// Storage bucket used when none is configured.
pub const DEFAULT_BUCKET: &str = "photos";

/// Folder inside the bucket where captures are stored.
pub const OBJECT_PREFIX: &str = "photos";

/// Length of the random suffix in generated object names.
pub const OBJECT_SUFFIX_LEN: usize = 6;

// ── Email ───────────────────────────────────────────────────────

/// Delay before the email dialog closes itself after a successful send.
pub const EMAIL_SUCCESS_CLOSE_MS: u64 = 2000;
