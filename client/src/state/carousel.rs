//! Screenshot carousel index and swipe gesture tracking.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Horizontal drag distance that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Cyclic position over `len` screenshots. `index` stays in `[0, len - 1]`,
/// and is 0 for an empty carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn apply(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Next => self.advance(),
            SwipeDirection::Prev => self.retreat(),
        }
    }

    /// "3 / 20" style counter, `None` when empty.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        (self.len > 0).then(|| format!("{} / {}", self.index + 1, self.len))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Pointer drag in progress, keyed by the x coordinate where it started.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Finish the drag at `x`. Dragging left advances, dragging right retreats.
    pub fn end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if delta < -SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Next)
        } else if delta > SWIPE_THRESHOLD_PX {
            Some(SwipeDirection::Prev)
        } else {
            None
        }
    }
}
