//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections and overlays, reading/writing shared
//! state from Leptos context providers. Decisions live in `state`; components
//! only wire events to those transitions.

pub mod about;
pub mod back_to_top;
pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod project_card;
pub mod project_detail_modal;
pub mod project_gallery;
pub mod screenshot_carousel;
pub mod skills;
