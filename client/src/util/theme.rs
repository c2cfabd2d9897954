//! Theme application on the document root.
//!
//! Swaps the `light`/`dark` class on `<html>` and mirrors it into a
//! `data-theme` attribute for stylesheet selectors. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! The choice is not persisted; every visit starts in the default theme. SSR
//! paths no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

/// Make `theme` the only theme class on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = el.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
        let _ = el.set_attribute("data-theme", theme.as_str());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and return the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    next
}
