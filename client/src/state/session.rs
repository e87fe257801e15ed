//! Bridge between the reactive session signal and the sync client.
//!
//! ERROR HANDLING
//! ==============
//! Gallery work runs detached on the local task queue. Failures are logged
//! by the sync client and show up only as the card's sync status.

use booth::card::CardId;
use booth::config::PageConfig;
use booth::session::Session;
use booth::sync::{RecordId, SessionAccess};
use leptos::prelude::*;

/// The page session as provided through context.
#[derive(Clone, Copy)]
pub struct SessionHandle(pub RwSignal<Session>);

impl SessionAccess for SessionHandle {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut session = self.0.write();
        f(&mut session)
    }
}

/// Session signal from context.
pub fn use_session() -> RwSignal<Session> {
    expect_context::<RwSignal<Session>>()
}

/// Upload `card` to the gallery in the background.
pub fn publish_card(session: RwSignal<Session>, page: &PageConfig, card: CardId) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::clock;

        let Some(client) = crate::net::gallery::sync_client(page) else {
            log::warn!("gallery not configured; photo {card} stays on this page");
            return;
        };
        let path = booth::sync::object_path(clock::now_ms(), &mut clock::rng());
        leptos::task::spawn_local(async move {
            client.publish(&SessionHandle(session), card, &path).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, page, card);
    }
}

/// Write a caption edit straight to an existing record.
pub fn push_caption(page: &PageConfig, id: RecordId, caption: String) {
    #[cfg(feature = "hydrate")]
    {
        let Some(client) = crate::net::gallery::sync_client(page) else {
            log::warn!("gallery not configured; caption for record {id} not sent");
            return;
        };
        leptos::task::spawn_local(async move {
            client.push_caption(&id, &caption).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, id, caption);
    }
}
