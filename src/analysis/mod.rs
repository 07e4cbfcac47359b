// src/analysis/mod.rs
//! Tree analyses: salary band and reporting-line depth.

pub mod depth;
pub mod salary;

use serde::Serialize;

pub use self::depth::{
    analyze_reporting_line_depth, deep_reporting_lines, DepthReport, DepthRule,
};
pub use self::salary::{
    analyze_manager_salaries, salary_violations, Deviation, SalaryBand, SalaryViolation,
};
use crate::config::Config;
use crate::hierarchy::Hierarchy;

/// Combined results of both analyses over one hierarchy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub root: Option<String>,
    pub employees: usize,
    pub salary_violations: Vec<SalaryViolation>,
    pub deep_reporting_lines: DepthReport,
    pub max_depth: usize,
}

impl AuditReport {
    /// Returns true if either analysis found something.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.salary_violations.is_empty() || !self.deep_reporting_lines.is_empty()
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.salary_violations.len() + self.deep_reporting_lines.len()
    }
}

/// Runs the configured analyses over a built hierarchy.
pub struct Auditor {
    config: Config,
}

impl Auditor {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Salary check. Empty when the hierarchy has no root.
    #[must_use]
    pub fn salaries(&self, hierarchy: &Hierarchy<'_>) -> Vec<SalaryViolation> {
        hierarchy
            .root()
            .map(|root| salary_violations(root, &self.config.salary))
            .unwrap_or_default()
    }

    /// Depth check. Empty when the hierarchy has no root.
    #[must_use]
    pub fn depths(&self, hierarchy: &Hierarchy<'_>) -> DepthReport {
        hierarchy
            .root()
            .map(|root| deep_reporting_lines(root, &self.config.depth))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn run(&self, hierarchy: &Hierarchy<'_>) -> AuditReport {
        let report = AuditReport {
            root: hierarchy.root().map(|r| r.employee().full_name()),
            employees: hierarchy.store().len(),
            salary_violations: self.salaries(hierarchy),
            deep_reporting_lines: self.depths(hierarchy),
            max_depth: self.config.depth.max_depth,
        };
        tracing::info!(
            salary = report.salary_violations.len(),
            depth = report.deep_reporting_lines.len(),
            "audit complete"
        );
        report
    }
}
