//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`gallery`, `modal`, `contact`, etc.) so
//! individual components depend on small focused models. Every module here is
//! plain data plus transitions; browser access lives in `util`.

pub mod carousel;
pub mod contact;
pub mod gallery;
pub mod modal;
pub mod scroll;
pub mod typewriter;
pub mod ui;
