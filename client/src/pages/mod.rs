//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is one page; it owns section order and delegates rendering
//! details to `components`.

pub mod home;
