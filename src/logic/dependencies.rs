//! Selection checks against the `requires` / `conflicts` lists of tool installers.
//!
//! These run on a user selection before it is handed to the backend. They only
//! report; resolving the problem is left to the user.

use std::collections::HashSet;

use crate::model::Component;

/// `(component, missing requirement)` pairs for requirements that are not selected.
pub fn missing_requirements(selected: &[Component]) -> Vec<(String, String)> {
    let names: HashSet<&str> = selected.iter().map(|c| c.name.as_str()).collect();
    selected
        .iter()
        .filter_map(|c| c.tool_installer.as_ref().map(|info| (c, info)))
        .flat_map(|(c, info)| {
            info.dependencies()
                .iter()
                .filter(|dep| !names.contains(dep.as_str()))
                .map(|dep| (c.name.clone(), dep.clone()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Pairs of selected components that declare a conflict with each other.
///
/// A conflict declared on both sides is reported once.
pub fn conflicting_pairs(selected: &[Component]) -> Vec<(String, String)> {
    let names: HashSet<&str> = selected.iter().map(|c| c.name.as_str()).collect();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut pairs = Vec::new();

    for c in selected {
        let Some(info) = &c.tool_installer else {
            continue;
        };
        for other in &info.conflicts {
            if !names.contains(other.as_str()) {
                continue;
            }
            let key = if c.name <= *other {
                (c.name.clone(), other.clone())
            } else {
                (other.clone(), c.name.clone())
            };
            if seen.insert(key) {
                pairs.push((c.name.clone(), other.clone()));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToolInstaller;

    #[test]
    fn test_missing_requirements() {
        let selected = vec![
            Component::new("cargo-nextest")
                .with_tool_installer(ToolInstaller::version("0.9").with_requires(["cargo", "llvm-tools"])),
            Component::new("cargo"),
        ];
        assert_eq!(
            missing_requirements(&selected),
            vec![("cargo-nextest".to_string(), "llvm-tools".to_string())]
        );
    }

    #[test]
    fn test_conflicting_pairs_reported_once() {
        let selected = vec![
            Component::new("gcc").with_tool_installer(ToolInstaller::version("13").with_conflicts(["msvc"])),
            Component::new("msvc").with_tool_installer(ToolInstaller::version("17").with_conflicts(["gcc"])),
            Component::new("rustfmt"),
        ];
        assert_eq!(
            conflicting_pairs(&selected),
            vec![("gcc".to_string(), "msvc".to_string())]
        );
    }

    #[test]
    fn test_unselected_conflict_is_ignored() {
        let selected = vec![
            Component::new("gcc").with_tool_installer(ToolInstaller::version("13").with_conflicts(["msvc"])),
        ];
        assert!(conflicting_pairs(&selected).is_empty());
        assert!(missing_requirements(&selected).is_empty());
    }
}
