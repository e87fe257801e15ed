//! Booth page: camera, shutter, ejection slot, and the desk of cards.
//!
//! ARCHITECTURE
//! ============
//! The page owns the camera and the shutter. A capture becomes a card via
//! `booth::factory`, is placed over the slot, and is handed to the session,
//! which drops whatever card was waiting there. In auto upload mode the new
//! card is published right away.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page configuration arrives from `/api/config` after mount. Until then the
//! page runs with no gallery, so early captures stay local.

use booth::config::PageConfig;
use booth::session::Session;
use leptos::prelude::*;

use crate::components::consent_modal::ConsentModal;
use crate::components::email_modal::EmailModal;
use crate::components::gallery_modal::GalleryModal;
use crate::components::polaroid::Polaroid;
use crate::state::session::use_session;
use crate::state::ui::{UiState, close_all_modals};

#[component]
pub fn BoothPage() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();
    let page = expect_context::<RwSignal<PageConfig>>();

    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let slot_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            leptos::task::spawn_local(async move {
                let config = crate::net::api::fetch_config().await;
                log::info!(
                    "page config loaded: gallery {}, upload mode {:?}",
                    if config.gallery.is_some() { "configured" } else { "off" },
                    config.upload_mode
                );
                session.update(|s| s.set_upload_mode(config.upload_mode));
                page.set(config);
            });
        });

        Effect::new(move |_| {
            let Some(video) = video_ref.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::util::camera::start_camera(&video).await {
                    log::error!("camera unavailable: {e}");
                }
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = page;

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && session.with_untracked(|s| ui.with_untracked(|u| u.any_modal_open(s))) {
            let mut s = session.write();
            ui.update(|u| close_all_modals(u, &mut s));
        }
    });
    on_cleanup(move || escape.remove());

    let on_shutter = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use booth::consts::FLASH_MS;
            use booth::photo::ImageRef;

            use crate::state::session::publish_card;
            use crate::util::{camera, clock, pointer};

            ui.update(|u| u.flash = true);
            clock::after(FLASH_MS, move || ui.update(|u| u.flash = false));

            let (Some(video), Some(canvas)) = (video_ref.get_untracked(), canvas_ref.get_untracked()) else {
                return;
            };
            let Some(data) = camera::capture_frame(&video, &canvas) else {
                log::warn!("camera not ready; no photo taken");
                return;
            };
            let mut card = booth::factory::polaroid(ImageRef::DataUri(data), &clock::capture_time());
            if let Some(slot) = slot_ref.get_untracked() {
                card.position = pointer::element_rect(&slot).origin();
            }
            let ejection = session.write().eject(card);
            if let Some(old) = ejection.replaced {
                log::debug!("slot cleared: card {old} replaced");
            }
            if ejection.publish {
                page.with_untracked(|p| publish_card(session, p, ejection.card));
            }
        }
    };

    let on_reset = move |_| session.update(Session::reset);
    let on_gallery = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(UiState::open_gallery);
    };

    let card_ids = move || session.with(|s| s.cards().iter().map(|c| c.id).collect::<Vec<_>>());

    view! {
        <main class="booth-page">
            <div class="btn-container">
                <button class="btn-secondary" id="reset-btn" title="Clear every photo" on:click=on_reset>
                    "Reset"
                </button>
                <button class="btn-primary" id="pin-board-trigger" on:click=on_gallery>
                    "Gallery"
                </button>
            </div>

            <section class="camera-zone">
                <div class="camera-body">
                    <video id="cam-feed" autoplay playsinline muted node_ref=video_ref></video>
                    <canvas id="canvas" node_ref=canvas_ref></canvas>
                    <button id="shutter" title="Take a photo" on:click=on_shutter></button>
                </div>
                <div id="slot" node_ref=slot_ref></div>
            </section>

            <div id="desk">
                <For each=card_ids key=|id| *id children=move |id| view! { <Polaroid id/> }/>
            </div>

            <div id="flash" class:flash-active=move || ui.with(|u| u.flash)></div>

            <Show when=move || session.with(|s| s.email().is_some())>
                <EmailModal/>
            </Show>
            <Show when=move || ui.with(|u| u.consent_open)>
                <ConsentModal/>
            </Show>
            <Show when=move || ui.with(|u| u.gallery_open)>
                <GalleryModal/>
            </Show>
        </main>
    }
}
