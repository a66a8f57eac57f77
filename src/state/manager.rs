//! Manager-mode session state.
//!
//! `ManagerSession` is the single owner of the kit snapshots and of the
//! derived check groups.
//!
//! # Design Principles
//!
//! - **Snapshots are replaced, not patched**: every setter takes a whole value
//! - **Views are regenerated**: any change to the installed kit, the current
//!   kit or the operation rebuilds the groups from scratch
//! - **Single assignment**: the groups are published as one `Arc<[CheckGroup]>`,
//!   so a reader holding a clone never sees a half-built list

use std::sync::Arc;
use tracing::{debug, info};

use crate::backend::Backend;
use crate::engine::check::{CheckGroup, checked_components};
use crate::engine::reconcile::{compute_check_groups, restricted_in};
use crate::error::{KitplanError, Result};
use crate::model::{Component, Kit};
use crate::types::{Operation, Projection};

/// Operation plus the components it will act on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub operation: Operation,
    pub components: Vec<Component>,
}

/// Owned state of a manager session.
#[derive(Debug, Clone, Default)]
pub struct ManagerSession {
    available: Vec<Kit>,
    installed: Option<Kit>,
    current: Option<Kit>,
    target: Target,
    groups: Arc<[CheckGroup]>,
}

impl ManagerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from the backend's installed and available kits.
    ///
    /// The installed kit also becomes the current kit, as after a reload.
    pub fn load(backend: &impl Backend) -> Result<Self> {
        let mut session = Self::new();
        session.reload(backend)?;
        Ok(session)
    }

    /// Replace every snapshot with what the backend reports now.
    pub fn reload(&mut self, backend: &impl Backend) -> Result<()> {
        let installed = backend.installed_kit()?;
        let available = backend.available_kits()?;
        info!(
            "reloaded kits: installed={}, {} available",
            installed.as_ref().map_or_else(|| "none".to_string(), Kit::title),
            available.len()
        );

        self.available = available;
        self.current = installed.clone();
        self.installed = installed;
        self.regenerate();
        Ok(())
    }

    pub fn kits(&self) -> &[Kit] {
        &self.available
    }

    pub fn installed(&self) -> Option<&Kit> {
        self.installed.as_ref()
    }

    pub fn current(&self) -> Option<&Kit> {
        self.current.as_ref()
    }

    pub fn operation(&self) -> Operation {
        self.target.operation
    }

    pub fn target_components(&self) -> &[Component] {
        &self.target.components
    }

    pub fn is_uninstalling(&self) -> bool {
        self.target.operation.is_uninstalling()
    }

    /// Snapshot of the derived groups. Cheap to clone and never mutated.
    pub fn groups(&self) -> Arc<[CheckGroup]> {
        Arc::clone(&self.groups)
    }

    /// Restricted components of the current kit, kept out of the update view.
    pub fn restricted(&self) -> Vec<&Component> {
        self.current.as_ref().map(restricted_in).unwrap_or_default()
    }

    pub fn set_kits(&mut self, kits: Vec<Kit>) {
        self.available = kits;
    }

    pub fn set_installed(&mut self, installed: Kit) {
        self.installed = Some(installed);
        self.regenerate();
    }

    pub fn set_current(&mut self, current: Kit) {
        self.current = Some(current);
        self.regenerate();
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.target.operation = operation;
        self.regenerate();
    }

    pub fn set_components(&mut self, components: Vec<Component>) {
        self.target.components = components;
    }

    /// Tick or untick one component by name and publish the new groups.
    ///
    /// Locked items are rejected, the current groups stay untouched on error.
    pub fn set_checked(&mut self, name: &str, checked: bool) -> Result<()> {
        let mut groups = self.groups.to_vec();
        let item = groups
            .iter_mut()
            .flat_map(|g| g.items.iter_mut())
            .find(|item| item.name() == name)
            .ok_or_else(|| KitplanError::UnknownComponent(name.to_string()))?;
        if item.is_locked() {
            return Err(KitplanError::Locked(name.to_string()));
        }
        item.checked = checked;
        self.groups = Arc::from(groups);
        Ok(())
    }

    /// Components currently ticked in the view.
    pub fn checked_components(&self) -> Vec<Component> {
        checked_components(&self.groups)
    }

    /// Store the ticked components as the operation's target components.
    pub fn commit_selection(&mut self) -> &[Component] {
        let selected = self.checked_components();
        debug!("committing {} components for '{}'", selected.len(), self.target.operation);
        self.set_components(selected);
        &self.target.components
    }

    fn regenerate(&mut self) {
        let groups = match self.target.operation.projection() {
            Projection::InstalledSelection => {
                compute_check_groups(self.target.operation, self.installed.as_ref(), None)
            }
            Projection::TargetDiff => {
                // only components actually on disk take part in the diff
                let on_disk = self.installed.as_ref().map(Kit::installed_only);
                compute_check_groups(self.target.operation, on_disk.as_ref(), self.current.as_ref())
            }
        };
        self.groups = Arc::from(groups);
    }
}
