// src/analysis/depth.rs
//! Reporting-line depth audit.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::hierarchy::Node;

/// Depth settings. Employees deeper than `max_depth` are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct DepthRule {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default)]
    pub start_depth: usize,
}

impl Default for DepthRule {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            start_depth: 0,
        }
    }
}

const fn default_max_depth() -> usize { 4 }

/// Full name → depth, in first-insertion order.
///
/// Keys are names, not ids: a later employee with the same full name
/// replaces the earlier depth but keeps the earlier position.
#[derive(Debug, Clone, Default)]
pub struct DepthReport {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl DepthReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `name`. Returns the previous depth, if any.
    pub fn insert(&mut self, name: String, depth: usize) -> Option<usize> {
        if let Some(&pos) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[pos].1, depth));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, depth));
        None
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|&pos| self.entries[pos].1)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), *d))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for DepthReport {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for DepthReport {}

impl Serialize for DepthReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, depth) in &self.entries {
            map.serialize_entry(name, depth)?;
        }
        map.end()
    }
}

/// Records every employee under `root` whose depth exceeds the default limit
/// of 4. `root` sits at `start_depth`.
#[must_use]
pub fn analyze_reporting_line_depth(root: Node<'_>, start_depth: usize) -> DepthReport {
    deep_reporting_lines(
        root,
        &DepthRule {
            start_depth,
            ..DepthRule::default()
        },
    )
}

/// Like [`analyze_reporting_line_depth`] with an explicit limit.
#[must_use]
pub fn deep_reporting_lines(root: Node<'_>, rule: &DepthRule) -> DepthReport {
    let mut report = DepthReport::new();
    for (node, offset) in root.pre_order() {
        let depth = rule.start_depth.saturating_add(offset);
        if depth > rule.max_depth {
            let name = node.employee().full_name();
            if let Some(previous) = report.insert(name, depth) {
                tracing::debug!(
                    id = node.employee().id(),
                    previous,
                    depth,
                    "duplicate full name in depth report"
                );
            }
        }
    }
    report
}
