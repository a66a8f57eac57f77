//! Tool installer metadata attached to third-party tool components.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a tool's package comes from, plus its selection flags and dependency lists.
///
/// ```json
/// { "required": false, "optional": true, "version": "0.2.0", "requires": ["cargo"] }
/// { "restricted": true, "default": "https://example.com/installer.exe" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInstaller {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(flatten)]
    pub source: ToolSource,
    /// Tools that this package requires.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    /// Tools that are obsoleted/replaced by this package.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub obsoletes: Vec<String>,
    /// Tools that this package conflicts with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
}

/// Package source descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolSource {
    /// A tool whose redistribution is not allowed.
    ///
    /// The source stays unknown until the user provides one before the operation
    /// runs. `default` usually points to the vendor's download page.
    Restricted {
        restricted: bool,
        default: Option<String>,
        source: Option<String>,
        version: Option<String>,
    },
    Git {
        git: String,
        branch: Option<String>,
        tag: Option<String>,
        rev: Option<String>,
    },
    Url {
        url: String,
        version: Option<String>,
        filename: Option<String>,
    },
    Path {
        path: PathBuf,
        version: Option<String>,
    },
    Version {
        #[serde(alias = "ver")]
        version: String,
    },
}

impl ToolInstaller {
    pub fn new(source: ToolSource) -> Self {
        Self {
            required: false,
            optional: false,
            source,
            requires: Vec::new(),
            obsoletes: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// Installer for a restricted tool with an optional vendor download hint.
    pub fn restricted(default: Option<&str>) -> Self {
        Self::new(ToolSource::Restricted {
            restricted: true,
            default: default.map(ToOwned::to_owned),
            source: None,
            version: None,
        })
    }

    /// Installer for a plain versioned package.
    pub fn version(version: &str) -> Self {
        Self::new(ToolSource::Version {
            version: version.to_string(),
        })
    }

    pub fn with_requires<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_obsoletes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.obsoletes = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_conflicts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflicts = names.into_iter().map(Into::into).collect();
        self
    }

    /// Return `true` if this tool uses a restricted source.
    pub fn is_restricted(&self) -> bool {
        match &self.source {
            ToolSource::Restricted { .. } => true,
            ToolSource::Git { .. }
            | ToolSource::Url { .. }
            | ToolSource::Path { .. }
            | ToolSource::Version { .. } => false,
        }
    }

    /// Version declared by the source, `None` for untagged git sources and
    /// path/url/restricted sources without a version.
    pub fn version_str(&self) -> Option<&str> {
        match &self.source {
            ToolSource::Git { tag, .. } => tag.as_deref(),
            ToolSource::Version { version } => Some(version),
            ToolSource::Path { version, .. }
            | ToolSource::Url { version, .. }
            | ToolSource::Restricted { version, .. } => version.as_deref(),
        }
    }

    /// The `(source, default)` pair of a restricted tool.
    pub fn restricted_source(&self) -> Option<(Option<&str>, Option<&str>)> {
        match &self.source {
            ToolSource::Restricted {
                source, default, ..
            } => Some((source.as_deref(), default.as_deref())),
            _ => None,
        }
    }

    /// Mutable access to the user-provided source of a restricted tool.
    pub fn restricted_source_mut(&mut self) -> Option<&mut Option<String>> {
        match &mut self.source {
            ToolSource::Restricted { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn dependencies(&self) -> &[String] {
        &self.requires
    }
}
