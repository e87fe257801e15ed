//! Modal that emails one card through the relay.
//!
//! The dialog state (address, status, target) lives in the session so a
//! card removed while the dialog is open turns the next submit into
//! "Could not find photo" instead of sending a stale image.

use booth::consts::EMAIL_SUCCESS_CLOSE_MS;
use booth::photo::ImageRef;
use leptos::prelude::*;

use crate::net::api::{fetch_as_data_uri, send_email};
use crate::state::session::use_session;

#[component]
pub fn EmailModal() -> impl IntoView {
    let session = use_session();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            if let Some(input) = input_ref.get() {
                if let Err(e) = input.focus() {
                    log::debug!("email input focus failed: {e:?}");
                }
            }
        });
    }

    let address = move || session.with(|s| s.email().map(|d| d.address.clone()).unwrap_or_default());
    let status_text = move || session.with(|s| s.email().map(|d| d.status_text().to_owned()).unwrap_or_default());
    let status_class = move || session.with(|s| s.email().map_or("email-status", |d| d.status_class()));
    let submit_label = move || session.with(|s| s.email().map_or("Send", |d| d.submit_label()));
    let submit_disabled = move || session.with(|s| s.email().is_some_and(|d| d.submit_disabled()));

    let close = move || session.update(|s| s.close_email());

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| {
            if let Some(dialog) = s.email_mut() {
                dialog.address = value;
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = session.try_update(|s| {
            let card = s.email()?.target.and_then(|id| s.card(id)).cloned();
            let dialog = s.email_mut()?;
            Some((dialog.seq, dialog.begin_send(card.as_ref())))
        });
        let Some(Some((seq, Ok(outgoing)))) = started else {
            return;
        };

        leptos::task::spawn_local(async move {
            let photo_data = match &outgoing.image {
                ImageRef::DataUri(data) => Ok(data.clone()),
                ImageRef::Remote(url) => fetch_as_data_uri(url).await,
            };
            let outcome = match photo_data {
                Ok(data) => send_email(&outgoing.into_request(data)).await,
                Err(e) => Err(e),
            };
            let succeeded = session
                .try_update(|s| {
                    let dialog = s.email_mut().filter(|d| d.seq == seq)?;
                    dialog.finish(outcome);
                    Some(dialog.succeeded())
                })
                .flatten()
                .unwrap_or(false);
            #[cfg(feature = "hydrate")]
            {
                if succeeded {
                    crate::util::clock::after(EMAIL_SUCCESS_CLOSE_MS, move || session.update(|s| s.close_email_if(seq)));
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (succeeded, EMAIL_SUCCESS_CLOSE_MS);
            }
        });
    };

    view! {
        <div class="modal-overlay open" id="email-modal" on:click=move |_| close()>
            <div class="modal-content email-modal" on:click=move |ev| ev.stop_propagation()>
                <h3>"Send via Email"</h3>
                <p>"We'll send this photo to your inbox."</p>
                <form id="email-form" on:submit=on_submit>
                    <input
                        type="email"
                        id="email-input"
                        placeholder="you@example.com"
                        autocomplete="email"
                        node_ref=input_ref
                        prop:value=address
                        on:input=on_input
                    />
                    <div class=status_class>{status_text}</div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" id="email-cancel" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" id="email-send" prop:disabled=submit_disabled>
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
