//! A single installable unit of a toolkit.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

use super::tool_installer::ToolInstaller;
use crate::types::ComponentKind;

/// Group label used for components without a category.
pub const OTHERS_CATEGORY: &str = "Others";

static COMPONENTS_COUNTER: AtomicU32 = AtomicU32::new(0);

/// One tool or toolchain piece, as reported by the backend.
///
/// Components are plain values: two snapshots of the "same" component are
/// related through [`Component::is_same_unit`], never through identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ComponentPayload")]
pub struct Component {
    pub id: u32,
    pub name: String,
    /// A name used for display purposes, defaulting to `name`.
    pub display_name: String,
    pub category: Option<String>,
    pub version: Option<String>,
    pub desc: String,
    pub required: bool,
    pub optional: bool,
    /// Whether this component is already present on the target system.
    pub installed: bool,
    pub kind: ComponentKind,
    pub tool_installer: Option<ToolInstaller>,
}

/// Wire shape of a [`Component`]; everything but `name` may be omitted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentPayload {
    #[serde(default)]
    id: Option<u32>,
    name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default, alias = "groupName")]
    category: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    installed: bool,
    #[serde(default)]
    kind: ComponentKind,
    #[serde(default)]
    tool_installer: Option<ToolInstaller>,
}

impl From<ComponentPayload> for Component {
    fn from(payload: ComponentPayload) -> Self {
        let display_name = payload
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| payload.name.clone());
        // tools without a recorded version fall back to the manifest's one
        let version = payload.version.or_else(|| {
            payload
                .tool_installer
                .as_ref()
                .and_then(ToolInstaller::version_str)
                .map(ToOwned::to_owned)
        });
        Self {
            id: payload.id.unwrap_or_else(next_id),
            name: payload.name,
            display_name,
            category: payload.category,
            version,
            desc: payload.desc,
            required: payload.required,
            optional: payload.optional,
            installed: payload.installed,
            kind: payload.kind,
            tool_installer: payload.tool_installer,
        }
    }
}

fn next_id() -> u32 {
    COMPONENTS_COUNTER.fetch_add(1, Ordering::Relaxed)
}

impl Component {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            display_name: name.into(),
            category: None,
            version: None,
            desc: String::new(),
            required: false,
            optional: false,
            installed: false,
            kind: ComponentKind::Tool,
            tool_installer: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(ToOwned::to_owned);
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: Option<&str>) -> Self {
        self.version = version.map(ToOwned::to_owned);
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    #[must_use]
    pub fn installed(mut self, installed: bool) -> Self {
        self.installed = installed;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_tool_installer(mut self, installer: ToolInstaller) -> Self {
        self.tool_installer = Some(installer);
        self
    }

    /// Return `true` if both values describe the same logical unit.
    ///
    /// Names must match exactly, except for the toolchain profile: its display
    /// name changes between manifest revisions, so it is matched by kind alone.
    pub fn is_same_unit(&self, other: &Component) -> bool {
        if self.kind.is_profile() || other.kind.is_profile() {
            return self.kind == other.kind;
        }
        self.name == other.name
    }

    /// Return `true` if this component's package source is restricted.
    pub fn is_restricted(&self) -> bool {
        self.tool_installer
            .as_ref()
            .is_some_and(ToolInstaller::is_restricted)
    }

    /// Pre-selected by default: required, or not marked optional.
    pub fn is_recommended(&self) -> bool {
        self.required || !self.optional
    }

    /// The grouping key, falling back to [`OTHERS_CATEGORY`].
    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category,
            _ => OTHERS_CATEGORY,
        }
    }
}

/// Free-function form of [`Component::is_restricted`].
pub fn is_restricted(component: &Component) -> bool {
    component.is_restricted()
}
