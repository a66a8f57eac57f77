//! Checkbox view structures derived from components.
//!
//! These are projections: the engine rebuilds them from the kit snapshots and
//! never treats them as a source of truth.

use serde::Serialize;

use super::transition::Transition;
use crate::model::Component;

/// One checkbox row wrapping a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
    pub label: String,
    pub checked: bool,
    pub required: bool,
    pub disabled: bool,
    pub focused: bool,
    /// Rendering metadata: the version transition behind the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    pub value: Component,
}

impl CheckItem {
    /// A checkbox the user cannot toggle.
    pub fn is_locked(&self) -> bool {
        self.disabled
    }

    /// Machine name of the wrapped component.
    pub fn name(&self) -> &str {
        &self.value.name
    }
}

/// Items sharing one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckGroup {
    pub label: String,
    pub items: Vec<CheckItem>,
}

impl CheckGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
        }
    }
}

/// Iterate over every item of every group.
pub fn all_items(groups: &[CheckGroup]) -> impl Iterator<Item = &CheckItem> {
    groups.iter().flat_map(|g| g.items.iter())
}

/// Components whose checkbox is ticked, in group order.
pub fn checked_components(groups: &[CheckGroup]) -> Vec<Component> {
    all_items(groups)
        .filter(|item| item.checked)
        .map(|item| item.value.clone())
        .collect()
}

/// Human-readable rendering used by the CLI and logs.
pub fn summary(groups: &[CheckGroup]) -> String {
    let mut lines = Vec::new();
    for group in groups {
        lines.push(format!("{}:", group.label));
        for item in &group.items {
            let mark = if item.checked { "x" } else { " " };
            let lock = if item.is_locked() { " (locked)" } else { "" };
            let required = if item.required { " *" } else { "" };
            lines.push(format!("  [{mark}] {}{required}{lock}", item.label));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, checked: bool, disabled: bool) -> CheckItem {
        CheckItem {
            label: name.to_string(),
            checked,
            required: disabled,
            disabled,
            focused: false,
            transition: None,
            value: Component::new(name),
        }
    }

    #[test]
    fn test_checked_components_in_group_order() {
        let groups = vec![
            CheckGroup {
                label: "A".into(),
                items: vec![item("a1", true, false), item("a2", false, false)],
            },
            CheckGroup {
                label: "B".into(),
                items: vec![item("b1", true, true)],
            },
        ];
        let names: Vec<String> = checked_components(&groups).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["a1", "b1"]);
        assert_eq!(all_items(&groups).count(), 3);
    }

    #[test]
    fn test_summary_marks() {
        let groups = vec![CheckGroup {
            label: "Tools".into(),
            items: vec![item("cargo", true, true), item("clippy", false, false)],
        }];
        let text = summary(&groups);
        assert_eq!(text, "Tools:\n  [x] cargo * (locked)\n  [ ] clippy");
    }

    #[test]
    fn test_serialize_skips_missing_transition() {
        let json = serde_json::to_string(&item("cargo", true, false)).unwrap();
        assert!(!json.contains("transition"));
        assert!(json.contains("\"displayName\":\"cargo\""));
    }
}
