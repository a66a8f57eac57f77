//! kitplan - Main entry point
//!
//! Loads kit snapshots, runs the reconciliation engine and prints the
//! resulting selection views.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use kitplan::cli::{Cli, Commands, parse_kit_selector};
use kitplan::engine::CheckGroup;
use kitplan::engine::check::summary;
use kitplan::logic::dependencies::{conflicting_pairs, missing_requirements};
use kitplan::logic::removal::{obsoleted_by, pending_removals};
use kitplan::logic::updates::{installable_kits, latest_update};
use kitplan::{
    Backend, BaseConfig, Component, InstallSession, Kit, ManagerSession, Operation,
    SnapshotBackend, compute_check_groups,
};

/// Initialize tracing on stderr; RUST_LOG overrides the default level.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Plan {
            snapshot,
            operation,
            target,
            json,
        } => run_plan(&snapshot, operation, target.as_deref(), json),
        Commands::Diff {
            installed,
            target,
            operation,
            json,
        } => run_diff(&installed, &target, operation, json),
        Commands::Install { snapshot, json } => run_install(&snapshot, json),
        Commands::Removals { snapshot, target } => run_removals(&snapshot, &target),
        Commands::CheckUpdate { snapshot } => run_check_update(&snapshot),
        Commands::ValidateConfig { config } => run_validate_config(&config),
    }
}

/// Render groups either as pretty JSON or as the checkbox summary.
fn print_groups(groups: &[CheckGroup], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(groups).context("Failed to serialize groups")?;
        println!("{out}");
    } else if groups.is_empty() {
        println!("(nothing to show)");
    } else {
        println!("{}", summary(groups));
    }
    Ok(())
}

/// Pick an available kit by `name` or `name@version`.
fn find_kit<'a>(kits: &'a [Kit], selector: &str) -> Result<&'a Kit> {
    let (name, version) = parse_kit_selector(selector);
    kits.iter()
        .filter(|kit| kit.name == name)
        .find(|kit| version.is_none_or(|v| kit.version == v))
        .with_context(|| format!("No available kit matches '{selector}'"))
}

fn run_plan(snapshot: &Path, operation: Operation, target: Option<&str>, json: bool) -> Result<()> {
    let backend = SnapshotBackend::load_from_file(snapshot)?;
    let mut session = ManagerSession::load(&backend)?;

    if let Some(selector) = target {
        let kit = find_kit(session.kits(), selector)?.clone();
        info!("targeting {}", kit.title());
        session.set_current(kit);
    }
    session.set_operation(operation);

    let groups = session.groups();
    print_groups(&groups, json)?;

    if !json {
        for component in session.restricted() {
            println!("! {} needs a package source", component.display_name);
        }
        if operation == Operation::Update {
            if let Some(installed) = session.installed() {
                print_obsoleted(&session.checked_components(), installed);
            }
        }
        if session.is_uninstalling() {
            warn!("'{}' removes the selected components", operation);
            if operation.removes_manager() {
                println!("! the manager itself is removed as well");
            }
        }
    }
    Ok(())
}

/// List installed tools that the selection replaces.
fn print_obsoleted(selection: &[Component], installed: &Kit) {
    let replaced = obsoleted_by(selection, installed);
    if replaced.is_empty() {
        return;
    }
    println!("components to remove:");
    for (obsolete, by) in replaced {
        println!("- {obsolete} (replaced by {by})");
    }
}

fn load_kit(path: &Path) -> Result<Kit> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read kit from {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse kit JSON in {:?}", path))
}

fn run_diff(installed: &Path, target: &Path, operation: Operation, json: bool) -> Result<()> {
    let installed = load_kit(installed)?;
    let target = load_kit(target)?;
    debug!("diffing {} against {}", installed.title(), target.title());

    let groups = compute_check_groups(operation, Some(&installed), Some(&target));
    print_groups(&groups, json)
}

fn run_install(snapshot: &Path, json: bool) -> Result<()> {
    let backend = SnapshotBackend::load_from_file(snapshot)?;
    let mut session = InstallSession::load(&backend)?;

    print_groups(&session.groups(), json)?;
    if json {
        return Ok(());
    }

    let selection = session.checked_components();
    for (tool, requirement) in missing_requirements(&selection) {
        warn!("'{tool}' requires '{requirement}', which is not selected");
    }
    for (a, b) in conflicting_pairs(&selection) {
        warn!("'{a}' conflicts with '{b}'");
    }
    if let Some(installed) = backend.installed_kit()? {
        print_obsoleted(&selection, &installed);
    }

    if session.check_restricted(&backend)? {
        for rc in session.restricted() {
            match &rc.default {
                Some(hint) => println!("? {} (vendor: {hint})", rc.label),
                None => println!("? {}", rc.label),
            }
        }
    }
    println!("install path: {}", session.config().path.display());
    Ok(())
}

fn run_removals(snapshot: &Path, target: &str) -> Result<()> {
    let backend = SnapshotBackend::load_from_file(snapshot)?;
    let Some(installed) = backend.installed_kit()? else {
        bail!("No toolkit is installed");
    };
    let available = backend.available_kits()?;
    let target = find_kit(&available, target)?;

    let removals = pending_removals(&installed, target);
    if removals.is_empty() {
        println!("Nothing would be removed moving to {}", target.title());
    }
    for component in removals {
        println!("- {}", component.display_name);
    }
    Ok(())
}

fn run_check_update(snapshot: &Path) -> Result<()> {
    let backend = SnapshotBackend::load_from_file(snapshot)?;
    let available = backend.available_kits()?;

    let Some(installed) = backend.installed_kit()? else {
        info!("No toolkit installed; {} kits available", available.len());
        for kit in installable_kits(&available, None) {
            println!("{}", kit.title());
        }
        return Ok(());
    };

    match latest_update(&installed, &available)? {
        Some(kit) => {
            println!("Update available: {} -> {}", installed.title(), kit.title());
            if let Some(notes) = &kit.info {
                println!("{notes}");
            }
        }
        None => println!("{} is up to date", installed.title()),
    }
    Ok(())
}

fn run_validate_config(path: &Path) -> Result<()> {
    info!("Validating configuration file: {:?}", path);
    let config = BaseConfig::load_from_file(path).inspect_err(|e| {
        error!("Failed to load configuration file: {e:#}");
    })?;

    match config.validate() {
        Ok(()) => {
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {:?}", path);
            if config.has_enforced_sources() {
                println!("  (some sources are enforced by the manifest)");
            }
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {e}");
            eprintln!("✗ Configuration validation failed: {e}");
            std::process::exit(1);
        }
    }
}
