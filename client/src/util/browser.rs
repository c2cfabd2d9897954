//! Thin wrappers over window/document calls used by components.
//!
//! Each helper is a no-op (or returns a neutral value) outside the browser so
//! components can call them unconditionally from event handlers.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::state::scroll::ScrollMetrics;

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                leptos::logging::warn!("failed to open {url}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Smooth-scroll the element with id `anchor` into view.
pub fn scroll_to_section(anchor: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor))
        else {
            leptos::logging::warn!("no section #{anchor}");
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = anchor;
    }
}

/// Smooth-scroll the window back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

/// Sample the window's current scroll geometry.
pub fn read_scroll_metrics() -> Option<ScrollMetrics> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().ok()?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(viewport_height, |el| f64::from(el.scroll_height()));
        Some(ScrollMetrics { scroll_y, viewport_height, document_height })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Calendar year for the footer notice.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(1970)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
