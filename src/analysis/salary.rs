// src/analysis/salary.rs
//! Manager salary check against the average of direct reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hierarchy::Node;

/// Acceptable manager pay, as multiples of the direct reports' average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBand {
    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,
    #[serde(default = "default_max_ratio")]
    pub max_ratio: f64,
}

impl Default for SalaryBand {
    fn default() -> Self {
        Self {
            min_ratio: default_min_ratio(),
            max_ratio: default_max_ratio(),
        }
    }
}

const fn default_min_ratio() -> f64 { 1.2 }
const fn default_max_ratio() -> f64 { 1.5 }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Deviation {
    Underpaid,
    Overpaid,
}

/// A manager paid outside the band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryViolation {
    pub employee_id: String,
    pub name: String,
    pub salary: u64,
    pub deviation: Deviation,
    /// Distance to the violated bound.
    pub amount: f64,
    /// The violated bound: the floor when underpaid, the cap when overpaid.
    pub limit: f64,
}

impl fmt::Display for SalaryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.deviation {
            Deviation::Underpaid => write!(
                f,
                "Manager {} earns {} LESS than expected (should be at least {})",
                self.name,
                fmt_half_up(self.amount),
                fmt_half_up(self.limit)
            ),
            Deviation::Overpaid => write!(
                f,
                "Manager {} earns {} MORE than expected (should be at most {})",
                self.name,
                fmt_half_up(self.amount),
                fmt_half_up(self.limit)
            ),
        }
    }
}

/// Two decimal places, ties rounded away from zero.
///
/// Rounds the shortest decimal form of `v`, so `1.005` gives `1.01` even
/// though the nearest double sits just below it.
fn fmt_half_up(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v:.2}");
    }
    let shortest = format!("{}", v.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let mut frac = frac_part.bytes();
    digits.push(frac.next().unwrap_or(b'0'));
    digits.push(frac.next().unwrap_or(b'0'));

    if frac.next().is_some_and(|d| d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let mut out = String::with_capacity(digits.len() + 2);
    if v < 0.0 && digits.iter().any(|&d| d != b'0') {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&digits[..split]));
    out.push('.');
    out.push_str(&String::from_utf8_lossy(&digits[split..]));
    out
}

/// Checks every manager under (and including) `root`, parent before
/// descendants. Leaves are never reported.
#[must_use]
pub fn salary_violations(root: Node<'_>, band: &SalaryBand) -> Vec<SalaryViolation> {
    root.pre_order()
        .filter_map(|(node, _)| check_manager(node, band))
        .collect()
}

/// Human-readable form of [`salary_violations`], in the same order.
#[must_use]
pub fn analyze_manager_salaries(root: Node<'_>, band: &SalaryBand) -> Vec<String> {
    salary_violations(root, band)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn check_manager(node: Node<'_>, band: &SalaryBand) -> Option<SalaryViolation> {
    let avg = average_subordinate_salary(node)?;
    let employee = node.employee();
    #[allow(clippy::cast_precision_loss)]
    let salary = employee.salary() as f64;

    let floor = band.min_ratio * avg;
    let cap = band.max_ratio * avg;

    let (deviation, amount, limit) = if salary < floor {
        (Deviation::Underpaid, floor - salary, floor)
    } else if salary > cap {
        (Deviation::Overpaid, salary - cap, cap)
    } else {
        return None;
    };

    Some(SalaryViolation {
        employee_id: employee.id().to_string(),
        name: employee.full_name(),
        salary: employee.salary(),
        deviation,
        amount,
        limit,
    })
}

#[allow(clippy::cast_precision_loss)]
fn average_subordinate_salary(node: Node<'_>) -> Option<f64> {
    let count = node.subordinate_count();
    if count == 0 {
        return None;
    }
    let total: f64 = node.subordinates().map(|s| s.employee().salary() as f64).sum();
    Some(total / count as f64)
}
