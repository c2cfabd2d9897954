//! Scroll-driven chrome: back-to-top visibility and the sliding footer.
//!
//! DESIGN
//! ======
//! Both controls are pure functions of the latest [`ScrollMetrics`] sample;
//! the app shell samples the window on scroll/resize and stores the result in
//! `UiState`, so rendering never touches the DOM directly.
//!
//! TRADE-OFFS
//! ==========
//! On-screen keyboard detection is a viewport-shrink heuristic. It misfires on
//! some split-screen and orientation changes; the only consequence is a footer
//! hidden a little longer than needed.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset beyond which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Distance from the page bottom over which the footer slides in.
pub const FOOTER_REVEAL_PX: f64 = 240.0;

/// Fraction of the tallest observed viewport that must disappear before the
/// keyboard is assumed open.
pub const KEYBOARD_SHRINK_RATIO: f64 = 0.25;

/// One sample of the window's scroll geometry, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Pixels left to scroll before the bottom of the document.
    #[must_use]
    pub fn distance_to_bottom(&self) -> f64 {
        (self.document_height - (self.scroll_y + self.viewport_height)).max(0.0)
    }
}

#[must_use]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD_PX
}

/// Footer translation in percent of its own height: 100 is fully hidden
/// below the viewport, 0 is fully shown. A zero document height means no
/// sample has been taken yet (SSR and the first hydrated frame), so the
/// footer stays hidden.
#[must_use]
pub fn footer_offset_percent(metrics: ScrollMetrics) -> f64 {
    if metrics.document_height <= 0.0 {
        return 100.0;
    }
    (metrics.distance_to_bottom() / FOOTER_REVEAL_PX * 100.0).clamp(0.0, 100.0)
}

/// Best-effort guess that an on-screen keyboard is covering the page.
#[must_use]
pub fn keyboard_likely_open(peak_viewport_height: f64, viewport_height: f64) -> bool {
    if peak_viewport_height <= 0.0 {
        return false;
    }
    (peak_viewport_height - viewport_height) / peak_viewport_height > KEYBOARD_SHRINK_RATIO
}
