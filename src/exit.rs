// src/exit.rs
//! Standardized process exit codes for `orgaudit`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::OrgAuditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum OrgAuditExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input rows could not be parsed.
    InvalidInput = 2,
    /// Records could not be linked into a single tree.
    HierarchyFailure = 3,
    /// Analyses reported issues and the caller asked to fail on them.
    ViolationsFound = 4,
}

impl OrgAuditExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to an exit code by its root library error.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<OrgAuditError>() {
            Some(e) if e.is_hierarchy_failure() => Self::HierarchyFailure,
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for OrgAuditExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
