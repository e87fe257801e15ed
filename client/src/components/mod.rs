//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards and modals while reading/writing the shared
//! session and UI state from Leptos context providers.

pub mod consent_modal;
pub mod email_modal;
pub mod gallery_modal;
pub mod polaroid;
