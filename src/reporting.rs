//! Console and JSON output for audit results.

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::analysis::{AuditReport, DepthReport, SalaryViolation};
use crate::hierarchy::Hierarchy;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints the full audit report.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_report(report: &AuditReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Text => {
            print!("{}", format_report(report));
            Ok(())
        }
    }
}

/// Prints any serializable value as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[must_use]
pub fn format_report(report: &AuditReport) -> String {
    let mut out = String::new();
    match &report.root {
        Some(root) => {
            let _ = writeln!(out, "{} {}", "Root:".bold(), root);
        }
        None => {
            let _ = writeln!(out, "{}", "No root: hierarchy is empty".yellow());
        }
    }
    let _ = writeln!(out, "{} employees\n", report.employees);

    out.push_str(&format_salaries(&report.salary_violations));
    out.push('\n');
    out.push_str(&format_depths(&report.deep_reporting_lines, report.max_depth));
    out.push('\n');

    if report.has_violations() {
        let _ = writeln!(
            out,
            "{}",
            format!("Found {} issue(s).", report.violation_count())
                .red()
                .bold()
        );
    } else {
        let _ = writeln!(out, "{}", "All clear.".green().bold());
    }
    out
}

#[must_use]
pub fn format_salaries(violations: &[SalaryViolation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "--- Salary Analysis ---".cyan().bold());
    if violations.is_empty() {
        let _ = writeln!(out, "{}", "  All managers within band.".dimmed());
    }
    for violation in violations {
        let _ = writeln!(out, "  {violation}");
    }
    out
}

#[must_use]
pub fn format_depths(depths: &DepthReport, max_depth: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "--- Reporting Line Analysis ---".cyan().bold());
    if depths.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            format!("  No reporting line deeper than {max_depth}.").dimmed()
        );
    }
    for (name, depth) in depths.iter() {
        let _ = writeln!(
            out,
            "  {name} has a reporting line of depth {depth} ({} over)",
            depth.saturating_sub(max_depth)
        );
    }
    out
}

/// Deepest level drawn with its full indent; lower levels are tagged with
/// their depth instead.
pub const MAX_TREE_INDENT: usize = 32;

/// Renders the hierarchy as an indented outline, pre-order.
#[must_use]
pub fn format_tree(hierarchy: &Hierarchy<'_>) -> String {
    let mut out = String::new();
    let Some(root) = hierarchy.root() else {
        return out;
    };
    for (node, depth) in root.pre_order() {
        let employee = node.employee();
        let _ = write!(out, "{:width$}", "", width = 2 * depth.min(MAX_TREE_INDENT));
        if depth > MAX_TREE_INDENT {
            let _ = write!(out, "[{depth}] ");
        }
        let _ = writeln!(
            out,
            "{} {} ({})",
            employee.id().dimmed(),
            employee.full_name(),
            employee.salary()
        );
    }
    out
}
