//! Static site content: project catalog, skills, and profile details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is compile-time data. Components read it directly and the
//! server re-exports the catalog over JSON; nothing mutates it at runtime.

pub mod profile;
pub mod projects;
pub mod skills;
