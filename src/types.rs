//! Type-safe enums shared across the crate
//!
//! Component kinds and operation modes are proper Rust enums so that every
//! call site matches them exhaustively instead of comparing strings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What a component is, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum ComponentKind {
    /// A third-party tool installed next to the toolchain
    #[default]
    Tool,
    /// A single piece of the toolchain (rustfmt, clippy, ...)
    ToolchainComponent,
    /// The toolchain itself. Matched by kind, never by name.
    ToolchainProfile,
}

impl ComponentKind {
    /// Return `true` for the toolchain profile sentinel.
    pub const fn is_profile(self) -> bool {
        matches!(self, Self::ToolchainProfile)
    }
}

/// Operation mode of a manager session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    /// Change the selection within the installed kit
    #[default]
    Modify,
    /// Move the installed kit toward a newer target kit
    Update,
    /// Remove the installed toolkit, keep the manager
    UninstallToolkit,
    /// Remove the toolkit and the manager itself
    UninstallAll,
}

/// Which projection the engine runs for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Items come from the installed kit, `checked` mirrors `installed`
    InstalledSelection,
    /// Items come from the target kit, diffed against the installed kit
    TargetDiff,
}

impl Operation {
    /// The projection this operation renders with.
    pub const fn projection(self) -> Projection {
        match self {
            Self::Modify | Self::UninstallToolkit | Self::UninstallAll => {
                Projection::InstalledSelection
            }
            Self::Update => Projection::TargetDiff,
        }
    }

    /// Return `true` for both uninstall modes.
    pub const fn is_uninstalling(self) -> bool {
        matches!(self, Self::UninstallToolkit | Self::UninstallAll)
    }

    /// Return `true` if the manager binary is removed together with the toolkit.
    pub const fn removes_manager(self) -> bool {
        matches!(self, Self::UninstallAll)
    }
}

/// Free-function form of [`Operation::is_uninstalling`] for collaborators
/// that branch on it.
pub fn is_uninstalling(operation: Operation) -> bool {
    operation.is_uninstalling()
}
