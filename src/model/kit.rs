//! Toolkit snapshots.

use serde::{Deserialize, Serialize};

use super::component::Component;

/// Placeholder used for kits whose manifest carries no version.
pub const UNKNOWN_VERSION: &str = "N/A";

/// A named, versioned bundle of components.
///
/// Kits are snapshots: a reload replaces the whole value, components are
/// never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kit {
    pub name: String,
    #[serde(default = "unknown_version")]
    pub version: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Release notes.
    #[serde(default, alias = "notes")]
    pub info: Option<String>,
    #[serde(default, rename = "manifestURL")]
    pub manifest_url: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
}

fn unknown_version() -> String {
    UNKNOWN_VERSION.to_string()
}

impl PartialEq for Kit {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.version == other.version
    }
}

impl Eq for Kit {}

impl Kit {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            desc: None,
            info: None,
            manifest_url: None,
            components: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    /// Find the component in this kit that is the same logical unit as `other`.
    pub fn counterpart_of(&self, other: &Component) -> Option<&Component> {
        self.components.iter().find(|c| c.is_same_unit(other))
    }

    /// Copy of this kit keeping only the components flagged as installed.
    #[must_use]
    pub fn installed_only(&self) -> Self {
        Self {
            components: self
                .components
                .iter()
                .filter(|c| c.installed)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// `name (version)`, as shown in kit pickers and logs.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComponentKind;

    #[test]
    fn test_kit_equality_is_name_and_version() {
        let a = Kit::new("Rust Toolkit", "1.80.0").with_components(vec![Component::new("a")]);
        let b = Kit::new("Rust Toolkit", "1.80.0");
        let c = Kit::new("Rust Toolkit", "1.81.0");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_counterpart_of_uses_kind_for_profile() {
        let kit = Kit::new("kit", "1.0").with_components(vec![
            Component::new("cargo"),
            Component::new("rust-old")
                .with_display_name("Rust (old)")
                .with_kind(ComponentKind::ToolchainProfile),
        ]);
        let profile = Component::new("rust").with_kind(ComponentKind::ToolchainProfile);
        assert_eq!(
            kit.counterpart_of(&profile).map(|c| c.name.as_str()),
            Some("rust-old")
        );
        assert!(kit.counterpart_of(&Component::new("clippy")).is_none());
    }

    #[test]
    fn test_installed_only() {
        let kit = Kit::new("kit", "1.0").with_components(vec![
            Component::new("a").installed(true),
            Component::new("b"),
        ]);
        let installed = kit.installed_only();
        assert_eq!(installed.components.len(), 1);
        assert_eq!(installed.components[0].name, "a");
        assert_eq!(installed, kit);
    }

    #[test]
    fn test_deserialize_kit_defaults() {
        let kit: Kit = serde_json::from_str(
            r#"{ "name": "Rust Toolkit", "notes": "first release", "manifestURL": "https://example.com/m.toml" }"#,
        )
        .unwrap();
        assert_eq!(kit.version, UNKNOWN_VERSION);
        assert_eq!(kit.info.as_deref(), Some("first release"));
        assert_eq!(kit.manifest_url.as_deref(), Some("https://example.com/m.toml"));
        assert!(kit.components.is_empty());
        assert_eq!(kit.title(), "Rust Toolkit (N/A)");
    }
}
