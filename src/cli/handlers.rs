// src/cli/handlers.rs
//! Command handlers. Each returns the exit status for a successful run.

use std::path::Path;

use anyhow::{Context, Result};

use super::args::InputArgs;
use crate::analysis::Auditor;
use crate::config::Config;
use crate::exit::OrgAuditExit;
use crate::hierarchy::{self, RootPolicy};
use crate::ingest;
use crate::reporting::{self, OutputFormat};
use crate::store::RecordStore;

/// Loads config from `path`, or `./orgaudit.toml` when unset.
///
/// # Errors
/// Returns error if the config file is unreadable or invalid.
pub fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config> {
    let mut config = match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    config.verbose = verbose;
    Ok(config)
}

fn read_input(input: &InputArgs, config: &mut Config) -> Result<RecordStore> {
    if input.last_seen_root {
        config.root_policy = RootPolicy::LastSeen;
    }
    ingest::read_store(&input.file)
        .with_context(|| format!("Failed to load {}", input.file.display()))
}

/// Runs both analyses.
///
/// # Errors
/// Returns error if loading, building or output fails.
pub fn handle_analyze(
    input: &InputArgs,
    mut config: Config,
    format: OutputFormat,
    fail_on_violations: bool,
) -> Result<OrgAuditExit> {
    let store = read_input(input, &mut config)?;
    let tree = hierarchy::build(&store, config.root_policy)?;
    let report = Auditor::new(config).run(&tree);
    reporting::print_report(&report, format)?;

    if fail_on_violations && report.has_violations() {
        return Ok(OrgAuditExit::ViolationsFound);
    }
    Ok(OrgAuditExit::Success)
}

/// Runs the salary analysis only.
///
/// # Errors
/// Returns error if loading, building or output fails.
pub fn handle_salaries(
    input: &InputArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<OrgAuditExit> {
    let store = read_input(input, &mut config)?;
    let tree = hierarchy::build(&store, config.root_policy)?;
    let violations = Auditor::new(config).salaries(&tree);
    match format {
        OutputFormat::Json => reporting::print_json(&violations)?,
        OutputFormat::Text => print!("{}", reporting::format_salaries(&violations)),
    }
    Ok(OrgAuditExit::Success)
}

/// Runs the depth analysis only, with optional overrides.
///
/// # Errors
/// Returns error if loading, building or output fails.
pub fn handle_depth(
    input: &InputArgs,
    mut config: Config,
    start_depth: Option<usize>,
    max_depth: Option<usize>,
    format: OutputFormat,
) -> Result<OrgAuditExit> {
    if let Some(start) = start_depth {
        config.depth.start_depth = start;
    }
    if let Some(max) = max_depth {
        config.depth.max_depth = max;
    }
    let limit = config.depth.max_depth;

    let store = read_input(input, &mut config)?;
    let tree = hierarchy::build(&store, config.root_policy)?;
    let depths = Auditor::new(config).depths(&tree);
    match format {
        OutputFormat::Json => reporting::print_json(&depths)?,
        OutputFormat::Text => print!("{}", reporting::format_depths(&depths, limit)),
    }
    Ok(OrgAuditExit::Success)
}

/// Prints the hierarchy outline.
///
/// # Errors
/// Returns error if loading or building fails.
pub fn handle_tree(input: &InputArgs, mut config: Config) -> Result<OrgAuditExit> {
    let store = read_input(input, &mut config)?;
    let tree = hierarchy::build(&store, config.root_policy)?;
    print!("{}", reporting::format_tree(&tree));
    Ok(OrgAuditExit::Success)
}
