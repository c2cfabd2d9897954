//! Typing/deleting animation over the hero role list.
//!
//! Pure state machine: the hero component owns the timer and calls `tick`
//! after each `delay_ms`. The initial state shows the first word in full so
//! server-rendered markup matches the first hydrated frame.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

pub const TYPE_TICK_MS: u32 = 75;
pub const DELETE_TICK_MS: u32 = 40;
/// Ticks a fully typed word stays on screen before deletion starts.
pub const HOLD_TICKS: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    /// Visible prefix length, in chars.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    #[must_use]
    pub fn new(words: &'static [&'static str]) -> Self {
        let shown = words.first().map_or(0, |w| w.chars().count());
        Self { words, word: 0, shown, phase: Phase::Holding(0) }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        let Some(word) = self.words.get(self.word) else {
            return "";
        };
        let end = word.char_indices().nth(self.shown).map_or(word.len(), |(i, _)| i);
        &word[..end]
    }

    /// Delay before the next `tick`.
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        match self.phase {
            Phase::Deleting => DELETE_TICK_MS,
            Phase::Typing | Phase::Holding(_) => TYPE_TICK_MS,
        }
    }

    pub fn tick(&mut self) {
        let Some(word) = self.words.get(self.word) else {
            return;
        };
        let len = word.chars().count();
        self.phase = match self.phase {
            Phase::Typing if self.shown < len => {
                self.shown += 1;
                if self.shown == len { Phase::Holding(0) } else { Phase::Typing }
            }
            Phase::Typing => Phase::Holding(0),
            Phase::Holding(n) if n + 1 < HOLD_TICKS => Phase::Holding(n + 1),
            Phase::Holding(_) => Phase::Deleting,
            Phase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                Phase::Deleting
            }
            Phase::Deleting => {
                self.word = (self.word + 1) % self.words.len();
                Phase::Typing
            }
        };
    }
}
