//! Version transitions between an installed component and its target.

use semver::Version;
use serde::Serialize;
use std::cmp::Ordering;

use crate::model::Component;

/// Shown in place of a missing version on either side of an arrow label.
pub const NO_VERSION: &str = "no version";

/// How a target component relates to its installed counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Transition {
    /// No installed counterpart
    New { version: Option<String> },
    /// Both versions parse and the target is newer
    Upgrade { from: String, to: String },
    /// Both versions parse and the target is older
    Downgrade { from: String, to: String },
    /// Versions differ but cannot be ordered
    Changed {
        from: Option<String>,
        to: Option<String>,
    },
    /// Same version on both sides
    Unchanged { version: Option<String> },
}

impl Transition {
    /// Classify `target` against its installed counterpart, if any.
    pub fn classify(installed: Option<&Component>, target: &Component) -> Self {
        let Some(installed) = installed else {
            return Self::New {
                version: target.version.clone(),
            };
        };
        if installed.version == target.version {
            return Self::Unchanged {
                version: target.version.clone(),
            };
        }

        let ordered = match (installed.version.as_deref(), target.version.as_deref()) {
            (Some(from), Some(to)) => match (parse_version(from), parse_version(to)) {
                (Some(old), Some(new)) => Some((from, to, new.cmp(&old))),
                _ => None,
            },
            _ => None,
        };
        match ordered {
            Some((from, to, Ordering::Greater)) => Self::Upgrade {
                from: from.into(),
                to: to.into(),
            },
            Some((from, to, Ordering::Less)) => Self::Downgrade {
                from: from.into(),
                to: to.into(),
            },
            _ => Self::Changed {
                from: installed.version.clone(),
                to: target.version.clone(),
            },
        }
    }

    /// Return `true` when the version differs between installed and target.
    pub fn is_version_change(&self) -> bool {
        match self {
            Self::Upgrade { .. } | Self::Downgrade { .. } | Self::Changed { .. } => true,
            Self::New { .. } | Self::Unchanged { .. } => false,
        }
    }

    /// Checkbox label for a component with this transition.
    pub fn label(&self, display_name: &str) -> String {
        match self {
            Self::New { version } | Self::Unchanged { version } => {
                label_with_version(display_name, version.as_deref())
            }
            Self::Upgrade { from, to } | Self::Downgrade { from, to } => {
                format!("{display_name} ({from} -> {to})")
            }
            Self::Changed { from, to } => format!(
                "{display_name} ({} -> {})",
                from.as_deref().unwrap_or(NO_VERSION),
                to.as_deref().unwrap_or(NO_VERSION)
            ),
        }
    }
}

/// `name (version)`; a missing version reads `no version`, as in arrow labels.
pub fn label_with_version(display_name: &str, version: Option<&str>) -> String {
    format!("{display_name} ({})", version.unwrap_or(NO_VERSION))
}

/// Parse a version string that may carry a channel prefix such as `stable 1.80.1`.
pub fn parse_version(raw: &str) -> Option<Version> {
    let trimmed = raw.trim().trim_start_matches(|c: char| !c.is_ascii_digit());
    Version::parse(trimmed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(name: &str, version: Option<&str>) -> Component {
        Component::new(name).with_version(version)
    }

    #[test]
    fn test_classify_new() {
        let target = comp("clippy", Some("0.9"));
        let t = Transition::classify(None, &target);
        assert_eq!(t, Transition::New { version: Some("0.9".into()) });
        assert_eq!(t.label("clippy"), "clippy (0.9)");
        assert!(!t.is_version_change());
    }

    #[test]
    fn test_classify_unchanged() {
        let installed = comp("cargo", Some("1.0"));
        let target = comp("cargo", Some("1.0"));
        let t = Transition::classify(Some(&installed), &target);
        assert!(matches!(t, Transition::Unchanged { .. }));
        assert_eq!(t.label("cargo"), "cargo (1.0)");
    }

    #[test]
    fn test_classify_upgrade_and_downgrade() {
        let old = comp("rustc", Some("1.80.0"));
        let new = comp("rustc", Some("1.81.1"));
        let up = Transition::classify(Some(&old), &new);
        assert_eq!(
            up,
            Transition::Upgrade { from: "1.80.0".into(), to: "1.81.1".into() }
        );
        assert_eq!(up.label("rustc"), "rustc (1.80.0 -> 1.81.1)");

        let down = Transition::classify(Some(&new), &old);
        assert!(matches!(down, Transition::Downgrade { .. }));
        assert!(down.is_version_change());
    }

    #[test]
    fn test_classify_unordered_change() {
        let installed = comp("cargo", Some("1.0"));
        let target = comp("cargo", Some("1.1"));
        let t = Transition::classify(Some(&installed), &target);
        assert_eq!(
            t,
            Transition::Changed { from: Some("1.0".into()), to: Some("1.1".into()) }
        );
        assert_eq!(t.label("cargo"), "cargo (1.0 -> 1.1)");
    }

    #[test]
    fn test_classify_missing_version_side() {
        let installed = comp("tool", None);
        let target = comp("tool", Some("2.0.0"));
        let t = Transition::classify(Some(&installed), &target);
        assert!(t.is_version_change());
        assert_eq!(t.label("tool"), "tool (no version -> 2.0.0)");
    }

    #[test]
    fn test_classify_both_versions_absent_is_unchanged() {
        let installed = comp("profile", None);
        let target = comp("profile", None);
        let t = Transition::classify(Some(&installed), &target);
        assert_eq!(t, Transition::Unchanged { version: None });
        assert_eq!(t.label("Profile"), "Profile (no version)");
    }

    #[test]
    fn test_missing_version_label_matches_arrow_label() {
        assert_eq!(label_with_version("rust-docs", None), "rust-docs (no version)");
        let t = Transition::classify(None, &comp("rust-docs", None));
        assert_eq!(t.label("rust-docs"), label_with_version("rust-docs", None));
    }

    #[test]
    fn test_parse_version_strips_channel_prefix() {
        assert_eq!(parse_version("stable 1.80.1"), Some(Version::new(1, 80, 1)));
        assert_eq!(parse_version("v2.0.0"), Some(Version::new(2, 0, 0)));
        assert_eq!(parse_version("1.0"), None);
        assert_eq!(parse_version("nightly"), None);
    }

    #[test]
    fn test_prefixed_equal_versions_are_changed_not_ordered() {
        let installed = comp("rustc", Some("stable 1.80.0"));
        let target = comp("rustc", Some("1.80.0"));
        let t = Transition::classify(Some(&installed), &target);
        assert!(matches!(t, Transition::Changed { .. }));
    }
}
