//! Body scroll lock held while the project detail modal is open.
//!
//! DESIGN
//! ======
//! [`ScrollLock`] is an RAII guard. Acquiring it records the body's inline
//! style and the window scroll offset, then pins the body in place; dropping
//! it puts both back. The modal keeps the guard in a stored value, so every
//! path that discards it (close, replacement, component unmount) releases the
//! lock exactly once.
//!
//! The DOM sits behind [`ScrollHost`] so the guard runs against a fake host in
//! native tests.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// The inline body properties a lock overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyStyle {
    pub position: String,
    pub top: String,
    pub width: String,
    pub overflow: String,
}

impl BodyStyle {
    /// Style that freezes the page at scroll offset `y`.
    #[must_use]
    pub fn locked_at(y: f64) -> Self {
        Self {
            position: "fixed".to_owned(),
            top: format!("-{y}px"),
            width: "100%".to_owned(),
            overflow: "hidden".to_owned(),
        }
    }
}

/// Document access needed to lock and unlock scrolling.
pub trait ScrollHost {
    fn body_style(&self) -> BodyStyle;
    fn set_body_style(&self, style: &BodyStyle);
    fn scroll_offset(&self) -> f64;
    fn scroll_to(&self, y: f64);
}

/// Guard that keeps the body pinned until dropped.
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    saved_style: BodyStyle,
    saved_offset: f64,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Self {
        let saved_style = host.body_style();
        let saved_offset = host.scroll_offset();
        host.set_body_style(&BodyStyle::locked_at(saved_offset));
        Self { host, saved_style, saved_offset }
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.set_body_style(&self.saved_style);
        self.host.scroll_to(self.saved_offset);
    }
}

/// Bring a lock slot in line with whether the modal is open.
///
/// Closing drops the guard. Opening acquires one from `host` only when the
/// slot is empty, so switching projects while open keeps the original lock.
pub fn sync<H: ScrollHost>(slot: &mut Option<ScrollLock<H>>, open: bool, host: impl FnOnce() -> H) {
    if !open {
        *slot = None;
    } else if slot.is_none() {
        *slot = Some(ScrollLock::acquire(host()));
    }
}

/// The real document. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScroll;

#[cfg(feature = "hydrate")]
fn body_css() -> Option<web_sys::CssStyleDeclaration> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(|b| b.style())
}

impl ScrollHost for DocumentScroll {
    fn body_style(&self) -> BodyStyle {
        #[cfg(feature = "hydrate")]
        {
            let Some(css) = body_css() else {
                return BodyStyle::default();
            };
            let read = |name: &str| css.get_property_value(name).unwrap_or_default();
            BodyStyle {
                position: read("position"),
                top: read("top"),
                width: read("width"),
                overflow: read("overflow"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            BodyStyle::default()
        }
    }

    fn set_body_style(&self, style: &BodyStyle) {
        #[cfg(feature = "hydrate")]
        {
            let Some(css) = body_css() else {
                return;
            };
            for (name, value) in [
                ("position", &style.position),
                ("top", &style.top),
                ("width", &style.width),
                ("overflow", &style.overflow),
            ] {
                // An empty value removes the inline override.
                let _ = if value.is_empty() {
                    css.remove_property(name).map(|_| ())
                } else {
                    css.set_property(name, value)
                };
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = style;
        }
    }

    fn scroll_offset(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    fn scroll_to(&self, y: f64) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, y);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = y;
        }
    }
}
