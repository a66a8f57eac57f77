//! Logic modules: checks and lookups around a selection.
//!
//! # Modules
//!
//! - `restricted`: restricted components and their package sources
//! - `removal`: installed components missing from a target kit
//! - `dependencies`: requirement and conflict checks on a selection
//! - `updates`: toolkit update detection

pub mod dependencies;
pub mod removal;
pub mod restricted;
pub mod updates;
