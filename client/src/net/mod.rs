//! Outbound network calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site's only request leaves the browser for the third-party form
//! backend; project data is compiled in and never fetched.

pub mod contact;
