//! Installer-mode session state: the checklist for a fresh install.

use std::sync::Arc;
use tracing::{debug, info};

use crate::backend::Backend;
use crate::config_file::BaseConfig;
use crate::engine::check::{CheckGroup, CheckItem};
use crate::engine::grouping::group_by_category;
use crate::engine::ordering::sort_for_display;
use crate::engine::reconcile::fresh_install_items;
use crate::error::{KitplanError, Result};
use crate::logic::restricted::{RestrictedComponent, fill_package_sources};
use crate::model::Component;

/// Owned state of an install session.
#[derive(Debug, Clone, Default)]
pub struct InstallSession {
    config: BaseConfig,
    items: Arc<[CheckItem]>,
    restricted: Vec<RestrictedComponent>,
}

impl InstallSession {
    /// Pull the default configuration and component list from the backend.
    pub fn load(backend: &impl Backend) -> Result<Self> {
        let config = backend.default_configuration()?;
        let mut session = Self {
            config,
            ..Default::default()
        };
        session.set_component_list(backend.component_list()?);
        info!("install session ready with {} components", session.items.len());
        Ok(session)
    }

    pub fn config(&self) -> &BaseConfig {
        &self.config
    }

    /// Replace the component list; order and default selection are recomputed.
    pub fn set_component_list(&mut self, mut components: Vec<Component>) {
        sort_for_display(&mut components);
        self.items = Arc::from(fresh_install_items(components));
        self.restricted.clear();
    }

    pub fn items(&self) -> Arc<[CheckItem]> {
        Arc::clone(&self.items)
    }

    /// Grouped view of the checklist.
    pub fn groups(&self) -> Vec<CheckGroup> {
        group_by_category(self.items.to_vec())
    }

    /// Tick or untick one component; required components are locked.
    pub fn set_checked(&mut self, name: &str, checked: bool) -> Result<()> {
        let mut items = self.items.to_vec();
        let item = items
            .iter_mut()
            .find(|item| item.name() == name)
            .ok_or_else(|| KitplanError::UnknownComponent(name.to_string()))?;
        if item.is_locked() {
            return Err(KitplanError::Locked(name.to_string()));
        }
        item.checked = checked;
        self.items = Arc::from(items);
        Ok(())
    }

    pub fn checked_components(&self) -> Vec<Component> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.value.clone())
            .collect()
    }

    /// Ask the backend which checked components need a package source.
    ///
    /// Returns `true` if any do; they are kept until answered.
    pub fn check_restricted(&mut self, backend: &impl Backend) -> Result<bool> {
        self.restricted = backend.restricted_components(&self.checked_components())?;
        debug!("{} restricted components pending", self.restricted.len());
        Ok(!self.restricted.is_empty())
    }

    pub fn restricted(&self) -> &[RestrictedComponent] {
        &self.restricted
    }

    /// Record the user's source for a pending restricted component.
    pub fn answer_restricted(&mut self, name: &str, source: &str) -> Result<()> {
        let entry = self
            .restricted
            .iter_mut()
            .find(|rc| rc.name == name)
            .ok_or_else(|| KitplanError::UnknownComponent(name.to_string()))?;
        entry.source = Some(source.to_string());
        Ok(())
    }

    /// Checked components with every restricted source filled in.
    pub fn resolved_selection(&self) -> Result<Vec<Component>> {
        let mut selected = self.checked_components();
        fill_package_sources(&self.restricted, &mut selected)?;
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Snapshot, SnapshotBackend};
    use crate::model::ToolInstaller;

    fn backend() -> SnapshotBackend {
        SnapshotBackend::new(Snapshot {
            components: vec![
                Component::new("miri").optional(true),
                Component::new("rustfmt"),
                Component::new("rustc").required(true),
                Component::new("msvc")
                    .with_display_name("MSVC")
                    .with_category(Some("Prerequisites"))
                    .with_tool_installer(ToolInstaller::restricted(Some("https://vendor.example.com"))),
            ],
            config: BaseConfig {
                path: "/opt/rust".into(),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    fn names(items: &[CheckItem]) -> Vec<&str> {
        items.iter().map(CheckItem::name).collect()
    }

    #[test]
    fn test_load_sorts_and_preselects() {
        let session = InstallSession::load(&backend()).unwrap();
        let items = session.items();
        assert_eq!(names(&items), vec!["rustc", "msvc", "rustfmt", "miri"]);
        assert!(items[0].disabled);
        assert!(items.iter().take(3).all(|i| i.checked));
        assert!(!items[3].checked);
        assert_eq!(session.config().path, std::path::PathBuf::from("/opt/rust"));
    }

    #[test]
    fn test_required_is_locked() {
        let mut session = InstallSession::load(&backend()).unwrap();
        let err = session.set_checked("rustc", false).unwrap_err();
        assert!(matches!(err, KitplanError::Locked(_)));
        session.set_checked("miri", true).unwrap();
        assert_eq!(session.checked_components().len(), 4);
    }

    #[test]
    fn test_restricted_flow() {
        let backend = backend();
        let mut session = InstallSession::load(&backend).unwrap();
        assert!(session.check_restricted(&backend).unwrap());
        assert_eq!(session.restricted()[0].name, "MSVC");

        assert!(matches!(
            session.resolved_selection().unwrap_err(),
            KitplanError::MissingSource(_)
        ));

        session.answer_restricted("MSVC", "/tmp/msvc.exe").unwrap();
        let selection = session.resolved_selection().unwrap();
        let msvc = selection.iter().find(|c| c.name == "msvc").unwrap();
        assert_eq!(
            msvc.tool_installer.as_ref().unwrap().restricted_source(),
            Some((Some("/tmp/msvc.exe"), Some("https://vendor.example.com")))
        );
    }

    #[test]
    fn test_groups_partition_checklist() {
        let session = InstallSession::load(&backend()).unwrap();
        let groups = session.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.iter().map(|g| g.items.len()).sum::<usize>(), 4);
    }
}
