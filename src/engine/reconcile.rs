//! Component reconciliation.
//!
//! Turns kit snapshots plus an [`Operation`] into checkbox-ready groups.
//!
//! # Projections
//!
//! | Operation          | Source list             | `checked`                               |
//! |--------------------|-------------------------|-----------------------------------------|
//! | `Modify`           | installed kit           | `component.installed`                   |
//! | `Update`           | target kit, unrestricted| version changed, or new and required    |
//! | `UninstallToolkit` | installed kit           | same as `Modify`, display only          |
//! | `UninstallAll`     | installed kit           | same as `Modify`, display only          |
//!
//! Pure logic: no I/O, no shared state. Components that exist only in the
//! installed kit are not reported here, see
//! [`pending_removals`](crate::logic::removal::pending_removals).

use tracing::debug;

use super::check::{CheckGroup, CheckItem};
use super::grouping::group_by_category;
use super::transition::{Transition, label_with_version};
use crate::model::{Component, Kit};
use crate::types::{Operation, Projection};

/// Build the grouped check view for `operation`.
///
/// A missing kit yields an empty view for the projections that need it.
pub fn compute_check_groups(
    operation: Operation,
    installed: Option<&Kit>,
    target: Option<&Kit>,
) -> Vec<CheckGroup> {
    let items = compute_check_items(operation, installed, target);
    let groups = group_by_category(items);
    debug!(
        "computed {} check groups for '{}' ({} items)",
        groups.len(),
        operation,
        groups.iter().map(|g| g.items.len()).sum::<usize>()
    );
    groups
}

/// Flat list of check items for `operation`, before grouping.
pub fn compute_check_items(
    operation: Operation,
    installed: Option<&Kit>,
    target: Option<&Kit>,
) -> Vec<CheckItem> {
    match operation.projection() {
        Projection::InstalledSelection => installed.map(modify_items).unwrap_or_default(),
        Projection::TargetDiff => target
            .map(|target| update_items(installed, target))
            .unwrap_or_default(),
    }
}

/// Items for changing the selection within the installed kit.
pub fn modify_items(installed: &Kit) -> Vec<CheckItem> {
    installed
        .components
        .iter()
        .map(|component| CheckItem {
            label: label_with_version(&component.display_name, component.version.as_deref()),
            checked: component.installed,
            required: component.required,
            disabled: false,
            focused: false,
            transition: None,
            value: component.clone(),
        })
        .collect()
}

/// Items for moving from `installed` toward `target`.
///
/// Restricted components are left out; they go through
/// [`restricted_in`] and a separate source prompt instead.
pub fn update_items(installed: Option<&Kit>, target: &Kit) -> Vec<CheckItem> {
    target
        .components
        .iter()
        .filter(|component| !component.is_restricted())
        .map(|component| {
            let counterpart = installed.and_then(|kit| kit.counterpart_of(component));
            let transition = Transition::classify(counterpart, component);
            let checked = match &transition {
                Transition::New { .. } => component.required,
                other => other.is_version_change(),
            };
            CheckItem {
                label: transition.label(&component.display_name),
                checked,
                required: component.required,
                disabled: false,
                focused: false,
                transition: Some(transition),
                value: component.clone(),
            }
        })
        .collect()
}

/// Restricted components of `kit`, surfaced next to the update view.
pub fn restricted_in(kit: &Kit) -> Vec<&Component> {
    kit.components.iter().filter(|c| c.is_restricted()).collect()
}

/// Items for a fresh install: recommended components are pre-checked and
/// required ones are locked.
///
/// The caller decides the order, see [`sort_for_display`](super::ordering::sort_for_display).
pub fn fresh_install_items(components: Vec<Component>) -> Vec<CheckItem> {
    components
        .into_iter()
        .map(|component| CheckItem {
            label: component.display_name.clone(),
            checked: component.is_recommended(),
            required: component.required,
            disabled: component.required,
            focused: false,
            transition: None,
            value: component,
        })
        .collect()
}
