//! Removal detection: the passes the reconciliation diff deliberately skips.
//!
//! - components a target kit no longer ships
//! - installed tools that a selected tool replaces (`obsoletes`)

use crate::model::{Component, Kit};

/// Installed components that have no counterpart in `target`.
///
/// Uses the same matching rule as the diff, so a renamed toolchain profile is
/// not reported as removed.
pub fn pending_removals<'a>(installed: &'a Kit, target: &Kit) -> Vec<&'a Component> {
    installed
        .components
        .iter()
        .filter(|c| c.installed && target.counterpart_of(c).is_none())
        .collect()
}

/// Installed tools that a selected tool declares obsolete, as
/// `(obsolete, replaced_by)` pairs in selection order.
///
/// Tools that are not on disk are skipped, there is nothing to remove.
pub fn obsoleted_by(selected: &[Component], installed: &Kit) -> Vec<(String, String)> {
    selected
        .iter()
        .filter_map(|c| c.tool_installer.as_ref().map(|info| (c, info)))
        .flat_map(|(c, info)| {
            info.obsoletes
                .iter()
                .filter(|old| **old != c.name)
                .filter(|old| {
                    installed
                        .components
                        .iter()
                        .any(|ic| ic.installed && ic.name == **old)
                })
                .map(|old| (old.clone(), c.name.clone()))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToolInstaller;
    use crate::types::ComponentKind;

    #[test]
    fn test_pending_removals() {
        let installed = Kit::new("kit", "1").with_components(vec![
            Component::new("cargo").installed(true),
            Component::new("old-tool").installed(true),
            Component::new("never-installed"),
            Component::new("rust-1.80")
                .with_kind(ComponentKind::ToolchainProfile)
                .installed(true),
        ]);
        let target = Kit::new("kit", "2").with_components(vec![
            Component::new("cargo"),
            Component::new("rust-1.81").with_kind(ComponentKind::ToolchainProfile),
        ]);

        let removed: Vec<&str> = pending_removals(&installed, &target)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(removed, vec!["old-tool"]);
    }

    #[test]
    fn test_obsoleted_by() {
        let installed = Kit::new("kit", "1").with_components(vec![
            Component::new("cargo-old-nextest").installed(true),
            Component::new("legacy-fmt"),
            Component::new("cargo-nextest").installed(true),
        ]);
        let selected = vec![
            Component::new("cargo-nextest").with_tool_installer(
                ToolInstaller::version("0.9.72")
                    .with_obsoletes(["cargo-old-nextest", "legacy-fmt", "cargo-nextest"]),
            ),
            Component::new("rustfmt"),
        ];

        assert_eq!(
            obsoleted_by(&selected, &installed),
            vec![("cargo-old-nextest".to_string(), "cargo-nextest".to_string())]
        );
        assert!(obsoleted_by(&selected, &Kit::new("kit", "0")).is_empty());
    }
}
