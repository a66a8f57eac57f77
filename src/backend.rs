//! Backend seam.
//!
//! The backend owns manifests, downloads and the filesystem. Sessions only
//! consume what it returns, through the [`Backend`] trait. [`SnapshotBackend`]
//! serves everything from one JSON document and backs the CLI and tests.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config_file::BaseConfig;
use crate::error::Result;
use crate::logic::restricted::{RestrictedComponent, restricted_components};
use crate::model::{Component, Kit};

/// Inputs a session pulls from the backend.
pub trait Backend {
    /// The kit currently installed, if any.
    fn installed_kit(&self) -> Result<Option<Kit>>;

    /// Every kit the distribution server offers.
    fn available_kits(&self) -> Result<Vec<Kit>>;

    /// Components of the manifest loaded for a fresh install.
    fn component_list(&self) -> Result<Vec<Component>>;

    /// Restricted components among `selected`.
    fn restricted_components(&self, selected: &[Component]) -> Result<Vec<RestrictedComponent>> {
        Ok(restricted_components(selected))
    }

    /// Default base configuration for a new installation.
    fn default_configuration(&self) -> Result<BaseConfig>;
}

/// Everything a backend would report, captured in one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub installed: Option<Kit>,
    #[serde(default)]
    pub available: Vec<Kit>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub config: BaseConfig,
}

/// A [`Backend`] answering from a [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotBackend {
    snapshot: Snapshot,
}

impl SnapshotBackend {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot from {:?}", path.as_ref()))?;

        let snapshot: Snapshot =
            serde_json::from_str(&content).context("Failed to parse snapshot JSON")?;

        debug!(
            "loaded snapshot: installed={:?}, {} available kits, {} components",
            snapshot.installed.as_ref().map(Kit::title),
            snapshot.available.len(),
            snapshot.components.len()
        );
        Ok(Self::new(snapshot))
    }
}

impl Backend for SnapshotBackend {
    fn installed_kit(&self) -> Result<Option<Kit>> {
        Ok(self.snapshot.installed.clone())
    }

    fn available_kits(&self) -> Result<Vec<Kit>> {
        Ok(self.snapshot.available.clone())
    }

    fn component_list(&self) -> Result<Vec<Component>> {
        Ok(self.snapshot.components.clone())
    }

    fn default_configuration(&self) -> Result<BaseConfig> {
        Ok(self.snapshot.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToolInstaller;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_snapshot_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "installed": {
                    "name": "Rust Toolkit",
                    "version": "1.80.0",
                    "components": [
                        { "id": 0, "name": "cargo", "displayName": "Cargo", "version": "1.80.0",
                          "required": true, "installed": true, "kind": "ToolchainComponent" }
                    ]
                },
                "available": [ { "name": "Rust Toolkit", "version": "1.81.0" } ],
                "config": { "path": "/opt/rust" }
            }"#,
        )
        .unwrap();
        file.flush().unwrap();

        let backend = SnapshotBackend::load_from_file(file.path()).unwrap();
        let installed = backend.installed_kit().unwrap().unwrap();
        assert_eq!(installed.components.len(), 1);
        assert_eq!(backend.available_kits().unwrap().len(), 1);
        assert!(backend.component_list().unwrap().is_empty());
        assert_eq!(
            backend.default_configuration().unwrap().path,
            std::path::PathBuf::from("/opt/rust")
        );
    }

    #[test]
    fn test_load_missing_snapshot() {
        assert!(SnapshotBackend::load_from_file("/nonexistent/snapshot.json").is_err());
    }

    #[test]
    fn test_default_restricted_components() {
        let backend = SnapshotBackend::default();
        let selected = vec![
            Component::new("msvc").with_tool_installer(ToolInstaller::restricted(None)),
            Component::new("rustfmt"),
        ];
        let restricted = backend.restricted_components(&selected).unwrap();
        assert_eq!(restricted.len(), 1);
        assert_eq!(restricted[0].name, "msvc");
    }
}
