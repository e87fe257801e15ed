//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (camera, storage, pointer hit
//! testing, clocks) from page and component logic.

pub mod camera;
pub mod clock;
pub mod pointer;
pub mod ui_persistence;
