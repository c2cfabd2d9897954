//! Local UI chrome state (theme, mobile menu, scroll sample).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the modal and contact state
//! so the navigation chrome can evolve independently of page content.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::scroll::{self, ScrollMetrics};

/// Visual theme applied as a class on the document element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class name and `data-theme` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph on the toggle button: the theme a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// UI state for theme, navigation menu, and scroll-driven chrome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
    pub scroll: ScrollMetrics,
    /// Tallest viewport seen this session; baseline for keyboard detection.
    pub peak_viewport_height: f64,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Store a fresh scroll sample.
    pub fn record_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll = metrics;
        if metrics.viewport_height > self.peak_viewport_height {
            self.peak_viewport_height = metrics.viewport_height;
        }
    }

    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        scroll::back_to_top_visible(self.scroll.scroll_y)
    }

    #[must_use]
    pub fn keyboard_likely_open(&self) -> bool {
        scroll::keyboard_likely_open(self.peak_viewport_height, self.scroll.viewport_height)
    }

    /// Footer translation percentage; fully hidden while a keyboard is up.
    #[must_use]
    pub fn footer_offset_percent(&self) -> f64 {
        if self.keyboard_likely_open() {
            return 100.0;
        }
        scroll::footer_offset_percent(self.scroll)
    }
}
