//! One polaroid card on the desk.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards are rendered by id from the page session. All geometry, drag, and
//! caption rules live in `booth`; this component only forwards DOM events
//! into the session and reflects the card back as classes and inline style.
//!
//! DESIGN
//! ======
//! Every card sits in one fixed layer, including the card in the slot, which
//! is positioned over the slot. The element therefore never moves in the DOM
//! when a drag begins, and pointer capture survives the card leaving the
//! slot.

#[cfg(test)]
#[path = "polaroid_test.rs"]
mod polaroid_test;

use booth::card::{CaptionCommit, CardId, Placement, Side, SyncStatus};
use booth::config::PageConfig;
use booth::geom::Point;
use booth::session::ShareDecision;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::state::session::{publish_card, push_caption, use_session};
use crate::state::ui::UiState;

const LIFTED_Z_INDEX: u32 = 10_000;

/// Share button text for a sync status.
pub fn share_label(status: SyncStatus) -> &'static str {
    match status {
        SyncStatus::Unsynced | SyncStatus::Failed => "Add to Gallery",
        SyncStatus::Syncing => "Uploading...",
        SyncStatus::Synced => "✓ Published",
    }
}

/// Inline style for a card pose.
pub fn card_style(position: Point, rotation: f64, scale: f64, lifted: bool, settling: bool) -> String {
    let mut style = format!(
        "left: {:.1}px; top: {:.1}px; transform: rotate({rotation:.1}deg) scale({scale});",
        position.x, position.y
    );
    if lifted {
        style.push_str(&format!(" z-index: {LIFTED_Z_INDEX}; transition: none;"));
    } else if settling {
        style.push_str(" transition: transform 0.2s ease-out;");
    }
    style
}

#[derive(Clone, Copy, PartialEq)]
struct Pose {
    position: Point,
    rotation: f64,
    scale: f64,
    lifted: bool,
    settling: bool,
}

#[component]
pub fn Polaroid(id: CardId) -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();
    let page = expect_context::<RwSignal<PageConfig>>();
    let caption_ref = NodeRef::<leptos::html::Div>::new();

    let pose = Memo::new(move |_| {
        session.with(|s| {
            s.card(id).map(|c| Pose {
                position: c.position,
                rotation: c.rotation,
                scale: c.scale,
                lifted: c.lifted,
                settling: c.settling,
            })
        })
    });
    let class = Memo::new(move |_| {
        session.with(|s| {
            let Some(c) = s.card(id) else {
                return String::from("polaroid");
            };
            let mut class = format!("polaroid {}", c.developing.css_class());
            if c.side == Side::Back {
                class.push_str(" flipped");
            }
            if c.can_share {
                class.push_str(" can-share");
            }
            if c.placement == Placement::Slot {
                class.push_str(" ejecting");
            }
            if c.lifted {
                class.push_str(" dragging");
            }
            class
        })
    });
    let sync = Memo::new(move |_| session.with(|s| s.card(id).map_or(SyncStatus::Unsynced, |c| c.sync)));
    let src = session.with_untracked(|s| s.card(id).map(|c| c.image.src().to_owned()).unwrap_or_default());
    let date = session.with_untracked(|s| s.card(id).map(|c| c.date_label.clone()).unwrap_or_default());

    let style = move || {
        pose.get()
            .map(|p| card_style(p.position, p.rotation, p.scale, p.lifted, p.settling))
            .unwrap_or_default()
    };

    // Start developing on the next tick so the start class paints first.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            crate::util::clock::after(0, move || session.update(|s| s.begin_developing(id)));
        });
    }

    // ===== DRAG =====

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::pointer::{element_rect, is_primary, pointer_point, pointer_region};

            if !is_primary(&ev) || session.with_untracked(|s| s.dragging().is_some()) {
                return;
            }
            let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            let region = pointer_region(&ev);
            let started = session.write().pointer_down(id, region, pointer_point(&ev), element_rect(&el));
            if started {
                ev.prevent_default();
                if let Err(e) = el.set_pointer_capture(ev.pointer_id()) {
                    log::debug!("pointer capture refused: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if session.with_untracked(|s| s.dragging() != Some(id)) {
                return;
            }
            ev.prevent_default();
            session.write().pointer_move(crate::util::pointer::pointer_point(&ev));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            use booth::consts::SETTLE_TRANSITION_MS;

            if session.with_untracked(|s| s.dragging() != Some(id)) {
                return;
            }
            let mut rng = crate::util::clock::rng();
            let dropped = session.write().pointer_up(&mut rng);
            if let Some((card, _)) = dropped {
                crate::util::clock::after(SETTLE_TRANSITION_MS, move || session.update(|s| s.settled(card)));
            }
        }
    };

    // ===== CAPTION =====

    let on_caption_input = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = caption_ref.get() else {
                return;
            };
            let raw = el.text_content().unwrap_or_default();
            let rewrite = session.write().caption_input(id, &raw);
            if let Some(rewrite) = rewrite {
                el.set_text_content(Some(&rewrite.text));
                caret_to_end(&el);
            }
        }
    };

    let on_caption_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        let swallow = session.with_untracked(|s| {
            s.card(id)
                .is_some_and(|c| c.caption.key_down(&key) == booth::caption::KeyDisposition::Swallow)
        });
        if swallow {
            ev.prevent_default();
        }
    };

    let on_caption_blur = move |_ev: leptos::ev::FocusEvent| {
        let commit = session.write().caption_blur(id);
        if let Some(CaptionCommit::Update { id: record, caption }) = commit {
            page.with_untracked(|p| push_caption(p, record, caption));
        }
    };

    // ===== BUTTONS =====

    let on_flip = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        session.update(|s| s.flip(id));
    };

    let on_share = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        let decision = session.write().request_share(id);
        match decision {
            ShareDecision::Publish(card) => {
                page.with_untracked(|p| publish_card(session, p, card));
            }
            ShareDecision::AskConsent => ui.update(UiState::open_consent),
            ShareDecision::Ignore => {}
        }
    };

    let on_email = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        session.update(|s| {
            s.open_email(id);
        });
    };

    let actions = move || {
        view! {
            <div class="polaroid-actions">
                <button
                    class="polaroid-share-btn"
                    class:uploading=move || sync.get() == SyncStatus::Syncing
                    class:success=move || sync.get() == SyncStatus::Synced
                    prop:disabled=move || sync.get().is_active()
                    on:click=on_share
                >
                    {move || share_label(sync.get())}
                </button>
                <button class="polaroid-email-btn" title="Send via Email" on:click=on_email>
                    "Email"
                </button>
            </div>
        }
    };

    view! {
        <div
            class=move || class.get()
            style=style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            <div class="polaroid-inner">
                <div class="polaroid-front">
                    <img src=src draggable="false"/>
                    {actions()}
                    <button class="flip-btn" title="Flip to back" on:click=on_flip>
                        "↻"
                    </button>
                    <div
                        class="caption-main"
                        contenteditable="true"
                        spellcheck="false"
                        node_ref=caption_ref
                        on:input=on_caption_input
                        on:keydown=on_caption_keydown
                        on:blur=on_caption_blur
                    ></div>
                    <div class="caption-date">{date}</div>
                </div>
                <div class="polaroid-back">
                    {actions()}
                    <button class="flip-btn" title="Flip to front" on:click=on_flip>
                        "↻"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Collapse the selection to the end of `el`.
#[cfg(feature = "hydrate")]
fn caret_to_end(el: &web_sys::HtmlElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(range) = document.create_range() else {
        return;
    };
    if range.select_node_contents(el).is_err() {
        return;
    }
    range.collapse_with_to_start(false);
    if let Ok(Some(selection)) = window.get_selection() {
        if selection.remove_all_ranges().is_ok() {
            if let Err(e) = selection.add_range(&range) {
                log::debug!("caret placement failed: {e:?}");
            }
        }
    }
}
