//! Core model for the photobooth page.
//!
//! This crate is compiled both natively (server, tests) and to WebAssembly
//! (browser client). It owns every rule of the page that can be stated without
//! a display surface: the per-card drag and caption state machines, the
//! capture geometry, the page session, and the background gallery sync. The
//! Leptos client is responsible only for wiring DOM events, the camera, and
//! HTTP transports into these types.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Page-level state: cards, ejection slot, email target, consent |
//! | [`card`] | The on-screen polaroid and its lifecycle flags |
//! | [`factory`] | Builds new cards from a captured image |
//! | [`drag`] | Pointer-drag state machine with exclusion regions |
//! | [`caption`] | Caption editing rules (length cap, no line breaks) |
//! | [`capture`] | Square-crop and mirror geometry for the shutter |
//! | [`photo`] | Data-URI parsing and base64 photo payloads |
//! | [`sync`] | Upload/Sync client and the gallery backend trait |
//! | [`email`] | Relay wire types, address validation, email dialog state |
//! | [`geom`] | Points and rectangles in CSS pixels |
//! | [`config`] | Page configuration served to the browser |
//! | [`consts`] | Shared numeric constants |

pub mod caption;
pub mod capture;
pub mod card;
pub mod config;
pub mod consts;
pub mod drag;
pub mod email;
pub mod factory;
pub mod geom;
pub mod photo;
pub mod session;
pub mod sync;
