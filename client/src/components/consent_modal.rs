//! One-time question before the first photo goes to the public gallery.

use booth::config::PageConfig;
use leptos::prelude::*;

use crate::state::session::{publish_card, use_session};
use crate::state::ui::UiState;
use crate::util::ui_persistence::remember_share_confirmed;

#[component]
pub fn ConsentModal() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();
    let page = expect_context::<RwSignal<PageConfig>>();

    let on_yes = move |_| {
        let card = session.write().confirm_share();
        remember_share_confirmed();
        ui.update(|u| u.consent_open = false);
        if let Some(card) = card {
            page.with_untracked(|p| publish_card(session, p, card));
        }
    };

    let dismiss = move || {
        let mut s = session.write();
        ui.update(|u| u.dismiss_consent(&mut s));
    };

    view! {
        <div class="modal-overlay open" id="confirm-modal" on:click=move |_| dismiss()>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <h3>"Share to the gallery?"</h3>
                <p>"Your photo and caption will be visible to everyone at the event."</p>
                <div class="modal-actions">
                    <button class="btn-secondary" id="confirm-no" on:click=move |_| dismiss()>
                        "No thanks"
                    </button>
                    <button class="btn-primary" id="confirm-yes" on:click=on_yes>
                        "Yes, share it"
                    </button>
                </div>
            </div>
        </div>
    }
}
