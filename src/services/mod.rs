//! Server-side services.
//!
//! ARCHITECTURE
//! ============
//! Services own validation and provider calls so route handlers stay focused
//! on protocol translation.

pub mod mailer;
pub mod relay;
