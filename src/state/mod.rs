//! Session state definitions
//!
//! Explicit owned state for the two application modes. Presentation layers
//! observe these by reading the published views; they never mutate them.

pub mod installer;
pub mod manager;

pub use installer::InstallSession;
pub use manager::{ManagerSession, Target};
