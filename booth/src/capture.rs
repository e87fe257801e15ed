//! Shutter geometry.
//!
//! The still is always `PHOTO_SIZE_PX` square, mirrored horizontally so it
//! matches the selfie preview, and cut from the centered square of the
//! smaller video dimension.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use crate::consts::PHOTO_SIZE_PX;

/// Source rectangle in video pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crop {
    pub sx: f64,
    pub sy: f64,
    pub size: f64,
}

/// Everything the host needs to draw one frame onto the capture canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapturePlan {
    pub crop: Crop,
    /// Edge of the output canvas.
    pub output: u32,
    /// Horizontal translation applied before mirroring.
    pub translate_x: f64,
    /// Horizontal scale; `-1.0` mirrors.
    pub scale_x: f64,
}

/// Centered square crop of a `width × height` frame.
///
/// Returns `None` while the video has no dimensions yet.
#[must_use]
pub fn square_crop(width: u32, height: u32) -> Option<Crop> {
    if width == 0 || height == 0 {
        return None;
    }
    let size = width.min(height);
    Some(Crop {
        sx: f64::from(width - size) / 2.0,
        sy: f64::from(height - size) / 2.0,
        size: f64::from(size),
    })
}

/// Plan a mirrored square capture for a `width × height` frame.
#[must_use]
pub fn plan(width: u32, height: u32) -> Option<CapturePlan> {
    let crop = square_crop(width, height)?;
    Some(CapturePlan { crop, output: PHOTO_SIZE_PX, translate_x: f64::from(PHOTO_SIZE_PX), scale_x: -1.0 })
}
