//! Toolkit update detection over already-fetched kit lists.

use semver::Version;
use tracing::{debug, info, warn};

use crate::engine::transition::parse_version;
use crate::error::{KitplanError, Result};
use crate::model::Kit;

/// Available kits other than the installed one.
pub fn installable_kits<'a>(available: &'a [Kit], installed: Option<&Kit>) -> Vec<&'a Kit> {
    available
        .iter()
        .filter(|kit| installed.is_none_or(|installed| *kit != installed))
        .collect()
}

/// The newest kit of the same product that is newer than `installed`.
///
/// Versions may carry a channel prefix (`stable 1.80.1`); it is stripped
/// before parsing. Kits of other products, and candidates whose version does
/// not parse, are ignored. Only an unparsable installed version is an error.
pub fn latest_update<'a>(installed: &Kit, available: &'a [Kit]) -> Result<Option<&'a Kit>> {
    let current = kit_version(installed)?;

    let mut newest: Option<(&Kit, Version)> = None;
    for kit in available.iter().filter(|kit| kit.name == installed.name) {
        let Some(version) = parse_version(&kit.version) else {
            warn!("skipping toolkit '{}' with unparsable version '{}'", kit.name, kit.version);
            continue;
        };
        if version <= current {
            continue;
        }
        if newest.as_ref().is_none_or(|(_, best)| version > *best) {
            newest = Some((kit, version));
        }
    }

    match newest {
        Some((kit, version)) => {
            info!("toolkit update available: {} {} -> {}", installed.name, current, version);
            Ok(Some(kit))
        }
        None => {
            debug!("latest toolkit '{}' ({}) already installed", installed.name, current);
            Ok(None)
        }
    }
}

fn kit_version(kit: &Kit) -> Result<Version> {
    parse_version(&kit.version).ok_or_else(|| {
        KitplanError::version(format!(
            "toolkit '{}' has an invalid version '{}'",
            kit.name, kit.version
        ))
    })
}
