//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page session (`booth::session::Session`) is the only domain state.
//! `ui` holds modal visibility and other chrome that the session does not
//! need to know about.

pub mod session;
pub mod ui;
