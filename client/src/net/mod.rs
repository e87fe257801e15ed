//! Network layer: the email relay and page config on our own server, and
//! the gallery backend.

pub mod api;
pub mod gallery;
