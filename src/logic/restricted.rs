//! Restricted components: tools whose package source the user must provide.
//!
//! Before an install or update proceeds, every selected restricted component
//! is listed with its vendor hint; once the user answers, the sources are
//! written back into the selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{KitplanError, Result};
use crate::model::Component;

/// A restricted component waiting for a package-source decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictedComponent {
    /// Display name of the tool.
    pub name: String,
    /// Question shown to the user.
    pub label: String,
    /// Source provided by the user, if any.
    pub source: Option<String>,
    /// Vendor download hint from the manifest.
    pub default: Option<String>,
}

impl TryFrom<&Component> for RestrictedComponent {
    type Error = KitplanError;

    fn try_from(component: &Component) -> Result<Self> {
        let Some((source, default)) = component
            .tool_installer
            .as_ref()
            .and_then(|info| info.restricted_source())
        else {
            return Err(KitplanError::validation(format!(
                "tool '{}' does not have a restricted source",
                component.name
            )));
        };
        Ok(Self {
            name: component.display_name.clone(),
            label: format!("Please provide the package source of '{}'", component.display_name),
            source: source.map(ToOwned::to_owned),
            default: default.map(ToOwned::to_owned),
        })
    }
}

/// Restricted components among `selected`, in selection order.
pub fn restricted_components(selected: &[Component]) -> Vec<RestrictedComponent> {
    selected
        .iter()
        .filter_map(|c| RestrictedComponent::try_from(c).ok())
        .collect()
}

/// Write the user's answers back into the selected restricted components.
///
/// Answers are matched by display name. Fails with
/// [`KitplanError::MissingSource`] naming the first tool that still has no
/// source afterwards.
pub fn fill_package_sources(
    answers: &[RestrictedComponent],
    selected: &mut [Component],
) -> Result<()> {
    for component in selected.iter_mut() {
        let display_name = component.display_name.clone();
        let Some(slot) = component
            .tool_installer
            .as_mut()
            .and_then(|info| info.restricted_source_mut())
        else {
            continue;
        };

        if let Some(answer) = answers
            .iter()
            .find(|rc| rc.name == display_name)
            .and_then(|rc| rc.source.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            debug!("using package source '{answer}' for '{display_name}'");
            *slot = Some(answer.to_string());
        }

        if slot.is_none() {
            return Err(KitplanError::MissingSource(display_name));
        }
    }
    Ok(())
}
