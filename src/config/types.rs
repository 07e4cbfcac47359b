use serde::{Deserialize, Serialize};

use crate::analysis::{DepthRule, SalaryBand};
use crate::hierarchy::RootPolicy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyConfig {
    #[serde(default)]
    pub root_policy: RootPolicy,
}

/// On-disk shape of `orgaudit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrgAuditToml {
    #[serde(default)]
    pub salary: SalaryBand,
    #[serde(default)]
    pub depth: DepthRule,
    #[serde(default)]
    pub hierarchy: HierarchyConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub salary: SalaryBand,
    pub depth: DepthRule,
    pub root_policy: RootPolicy,
    pub verbose: bool,
}

impl From<OrgAuditToml> for Config {
    fn from(toml: OrgAuditToml) -> Self {
        Self {
            salary: toml.salary,
            depth: toml.depth,
            root_policy: toml.hierarchy.root_policy,
            verbose: false,
        }
    }
}
