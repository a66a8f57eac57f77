//! kitplan library
//!
//! Reconciliation engine for a developer toolkit manager: turns installed and
//! target component snapshots into grouped, checkbox-ready selection views.

pub mod backend;
pub mod cli;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod logic;
pub mod model;
pub mod state;
pub mod types;

// Re-export main types for convenience
pub use backend::{Backend, Snapshot, SnapshotBackend};
pub use config_file::{BaseConfig, EnforceableOption};
pub use engine::{CheckGroup, CheckItem, Transition, compute_check_groups};
pub use error::KitplanError;
pub use logic::restricted::RestrictedComponent;
pub use model::{Component, Kit, ToolInstaller, ToolSource, is_restricted};
pub use state::{InstallSession, ManagerSession};
pub use types::{ComponentKind, Operation, is_uninstalling};
