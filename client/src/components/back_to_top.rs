//! Floating button shown once the page is scrolled past the threshold.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::browser;

#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(UiState::back_to_top_visible)>
            <button class="back-to-top" on:click=move |_| browser::scroll_to_top() aria-label="Back to top">
                "↑"
            </button>
        </Show>
    }
}
