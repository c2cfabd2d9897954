//! Fixed top navigation: brand, section anchors, theme and menu toggles.

use leptos::prelude::*;

use crate::data::profile::{BRAND, NAV_SECTIONS};
use crate::state::ui::UiState;
use crate::util::{browser, theme};

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_theme = move |_| ui.update(|u| u.theme = theme::toggle(u.theme));
    let on_menu = move |_| ui.update(UiState::toggle_menu);

    view! {
        <nav class="navbar">
            <a
                class="navbar__brand"
                href="#home"
                on:click=move |ev| {
                    ev.prevent_default();
                    browser::scroll_to_section("home");
                }
            >
                {BRAND}
            </a>
            <ul class=move || {
                if ui.with(|u| u.menu_open) { "navbar__links navbar__links--open" } else { "navbar__links" }
            }>
                {NAV_SECTIONS
                    .iter()
                    .map(|section| {
                        let anchor = section.anchor;
                        view! {
                            <li>
                                <a
                                    class="navbar__link"
                                    href=section.href()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ui.update(UiState::close_menu);
                                        browser::scroll_to_section(anchor);
                                    }
                                >
                                    {section.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="navbar__actions">
                <button
                    class="navbar__theme-toggle"
                    on:click=on_theme
                    title="Toggle theme"
                    aria-label="Toggle theme"
                >
                    {move || ui.with(|u| u.theme.toggle_icon())}
                </button>
                <button
                    class="navbar__menu-toggle"
                    on:click=on_menu
                    aria-label="Toggle menu"
                    aria-expanded=move || ui.with(|u| u.menu_open.to_string())
                >
                    {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>
    }
}
