//! Page footer that slides up as the reader nears the bottom.

use leptos::prelude::*;

use crate::data::profile::{EMAIL, GITHUB_URL, LINKEDIN_URL, OWNER_NAME};
use crate::state::ui::UiState;
use crate::util::browser;

#[component]
pub fn Footer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let year = browser::current_year();

    view! {
        <footer
            class="footer"
            style:transform=move || format!("translateY({:.1}%)", ui.with(UiState::footer_offset_percent))
        >
            <p class="footer__copyright">{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
            <div class="footer__links">
                <a href=format!("mailto:{EMAIL}") aria-label="Email">"✉"</a>
                <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">"in"</a>
                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" aria-label="GitHub">"⌥"</a>
            </div>
        </footer>
    }
}
