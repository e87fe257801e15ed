//! Root application component with routing and context providers.

use booth::config::PageConfig;
use booth::session::{Session, UploadMode};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::booth::BoothPage;
use crate::state::ui::UiState;
use crate::util::ui_persistence::share_confirmed;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page session, page configuration, and modal state, then
/// routes everything to the booth.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The upload mode is replaced once `/api/config` answers.
    let session = RwSignal::new(Session::new(UploadMode::default(), share_confirmed()));
    let page = RwSignal::new(PageConfig::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(page);
    provide_context(ui);

    view! {
        <Stylesheet id="photobooth" href="/style.css"/>
        <Title text="Retro Camera"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BoothPage/>
            </Routes>
        </Router>
    }
}
