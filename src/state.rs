//! Shared application state.
//!
//! DESIGN
//! ======
//! Handlers are stateless apart from what lives here: the email relay and
//! the page configuration served to browsers. Both are fixed at startup.

use std::sync::Arc;

use booth::config::PageConfig;

use crate::config::ServerConfig;
use crate::services::mailer::{Mailer, ResendMailer};
use crate::services::relay::Relay;

/// Injected into Axum handlers via the `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
    pub page: Arc<PageConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Relay, page: PageConfig) -> Self {
        Self { relay, page: Arc::new(page) }
    }

    /// Build from server config. A missing provider key leaves the relay
    /// without a mailer.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let mailer = config
            .relay
            .api_key
            .as_deref()
            .map(|key| Arc::new(ResendMailer::new(key)) as Arc<dyn Mailer>);
        Self::new(Relay::new(config.relay.clone(), mailer), config.page.clone())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
