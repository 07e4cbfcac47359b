// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrgAuditError {
    #[error("Manager with ID {manager_id} not found (referenced by {employee_id})")]
    DanglingManagerReference {
        manager_id: String,
        employee_id: String,
    },

    #[error("No employee without a manager; the hierarchy has no root")]
    MissingRoot,

    #[error("Multiple employees without a manager: {}", ids.join(", "))]
    MultipleRoots { ids: Vec<String> },

    #[error("Manager references form a cycle; unreachable from root: {}", ids.join(", "))]
    ManagerCycle { ids: Vec<String> },

    #[error("Invalid line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Invalid salary on line {line}: {value:?}")]
    InvalidSalary { line: u64, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl OrgAuditError {
    /// True for failures raised while linking records into a tree.
    #[must_use]
    pub fn is_hierarchy_failure(&self) -> bool {
        matches!(
            self,
            Self::DanglingManagerReference { .. }
                | Self::MissingRoot
                | Self::MultipleRoots { .. }
                | Self::ManagerCycle { .. }
        )
    }

    /// True for failures caused by malformed input rows.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. } | Self::InvalidSalary { .. } | Self::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, OrgAuditError>;

// Allow `?` on std::io::Error by converting to OrgAuditError::Io with unknown path.
impl From<std::io::Error> for OrgAuditError {
    fn from(source: std::io::Error) -> Self {
        OrgAuditError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for OrgAuditError {
    fn from(e: toml::de::Error) -> Self {
        OrgAuditError::Config(e.to_string())
    }
}
