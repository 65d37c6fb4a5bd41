//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::showcase::ShowcasePage;
use crate::state::{acquisition::AcquisitionState, chat::ChatState, ui::UiState};

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
/// Provides shared state contexts and resolves the motion preference once
/// on mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    let acquisition = RwSignal::new(AcquisitionState::default());

    provide_context(ui);
    provide_context(chat);
    provide_context(acquisition);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let motion = crate::util::motion::resolve();
        ui.update(|u| u.motion = motion);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/aura.css"/>
        <Title text="AURA / Future Human"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ShowcasePage/>
            </Routes>
        </Router>
    }
}
