//! Base installation configuration, as provided by the backend's
//! `default_configuration` and saved/loaded as JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A value plus whether the manifest enforces it (the user may not change it).
///
/// Serialized as a two-element array: `["https://mirror.example.com", true]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforceableOption(pub String, pub bool);

impl EnforceableOption {
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_enforced(&self) -> bool {
        self.1
    }
}

/// Base configuration of an install or modify session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseConfig {
    /// Installation directory
    pub path: PathBuf,
    #[serde(default)]
    pub add_to_path: bool,
    #[serde(default)]
    pub insecure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rustup_dist_server: Option<EnforceableOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rustup_update_root: Option<EnforceableOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_registry_name: Option<EnforceableOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_registry_value: Option<EnforceableOption>,
}

impl BaseConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            anyhow::bail!("Install path must be specified");
        }

        for (field, option) in [
            ("rustupDistServer", &self.rustup_dist_server),
            ("rustupUpdateRoot", &self.rustup_update_root),
            ("cargoRegistryValue", &self.cargo_registry_value),
        ] {
            if let Some(opt) = option {
                let url = opt.value().trim();
                if !(url.starts_with("https://")
                    || url.starts_with("http://")
                    || url.starts_with("file://"))
                {
                    anyhow::bail!("{field} must be an http(s) or file URL, got '{url}'");
                }
            }
        }

        match (&self.cargo_registry_name, &self.cargo_registry_value) {
            (Some(name), Some(_)) if name.value().trim().is_empty() => {
                anyhow::bail!("cargoRegistryName must not be empty");
            }
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("cargoRegistryName and cargoRegistryValue must be set together");
            }
            _ => {}
        }

        Ok(())
    }

    /// Return `true` if the manifest enforces any package source option.
    pub fn has_enforced_sources(&self) -> bool {
        [
            &self.rustup_dist_server,
            &self.rustup_update_root,
            &self.cargo_registry_name,
            &self.cargo_registry_value,
        ]
        .into_iter()
        .flatten()
        .any(EnforceableOption::is_enforced)
    }
}
