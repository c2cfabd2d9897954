//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::data::profile::OWNER_NAME;
use crate::pages::home::HomePage;
use crate::state::{modal::ModalState, ui::Theme, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let theme = Theme::default().as_str();
    view! {
        <!DOCTYPE html>
        <html lang="en" class=theme data-theme=theme>
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
/// Provides the shared UI and modal state, keeps the scroll sample current,
/// and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let modal = RwSignal::new(ModalState::default());
    provide_context(ui);
    provide_context(modal);

    #[cfg(feature = "hydrate")]
    {
        let sample = move || {
            if let Some(metrics) = crate::util::browser::read_scroll_metrics() {
                ui.update(|u| u.record_scroll(metrics));
            }
        };
        // First sample once mounted; afterwards on every scroll/resize.
        Effect::new(move || sample());
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| sample());
        let on_resize = window_event_listener(leptos::ev::resize, move |_| sample());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=format!("{OWNER_NAME} | Portfolio")/>
        <Meta name="description" content="Software engineering portfolio: mobile, desktop, and web projects."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
