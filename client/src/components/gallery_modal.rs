//! Modal grid of the most recent gallery records.

#[cfg(test)]
#[path = "gallery_modal_test.rs"]
mod gallery_modal_test;

use booth::config::PageConfig;
use booth::sync::GalleryRecord;
use leptos::prelude::*;

use crate::net::gallery::sync_client;
use crate::state::ui::UiState;

pub const EMPTY_TEXT: &str = "Gallery is empty. Be the first to post!";
pub const NOT_CONFIGURED_TEXT: &str = "Gallery not configured. Set SUPABASE_URL and SUPABASE_ANON_KEY on the server.";

/// What the gallery grid shows after a fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    NotConfigured,
    Failed(String),
    Loaded(Vec<GalleryRecord>),
}

impl GalleryView {
    /// Text shown instead of the grid, if any.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::NotConfigured => Some(NOT_CONFIGURED_TEXT.to_owned()),
            Self::Failed(message) => Some(format!("Error loading gallery: {message}")),
            Self::Loaded(records) if records.is_empty() => Some(EMPTY_TEXT.to_owned()),
            Self::Loaded(_) => None,
        }
    }
}

async fn load_gallery(page: PageConfig) -> GalleryView {
    let Some(client) = sync_client(&page) else {
        return GalleryView::NotConfigured;
    };
    match client.recent().await {
        Ok(records) => GalleryView::Loaded(records),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            {
                log::error!("gallery fetch failed: {e}");
            }
            GalleryView::Failed(e.to_string())
        }
    }
}

#[component]
pub fn GalleryModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let page = expect_context::<RwSignal<PageConfig>>();

    let records = LocalResource::new(move || {
        let _seq = ui.with(|u| u.gallery_seq);
        load_gallery(page.get())
    });

    let close = move || ui.update(UiState::close_gallery);

    view! {
        <div class="modal-overlay open" id="pin-board-modal" on:click=move |_| close()>
            <div class="modal-content gallery-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="gallery-header">
                    <h3>"Event Gallery"</h3>
                    <button class="gallery-close" id="gallery-close" title="Close gallery" on:click=move |_| close()>
                        "✕"
                    </button>
                </div>
                <div class="gallery-grid" id="gallery-grid">
                    <Suspense fallback=move || view! { <div class="gallery-notice">"Loading..."</div> }>
                        {move || {
                            records
                                .get()
                                .map(|loaded| match loaded.notice() {
                                    Some(text) => view! { <div class="gallery-notice">{text}</div> }.into_any(),
                                    None => {
                                        let GalleryView::Loaded(list) = loaded else {
                                            return ().into_any();
                                        };
                                        list.into_iter()
                                            .map(|record| {
                                                let caption = record.display_caption().to_owned();
                                                view! {
                                                    <div class="gallery-item">
                                                        <img src=record.url loading="lazy"/>
                                                        <div class="gallery-caption">{caption}</div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </div>
            </div>
        </div>
    }
}
