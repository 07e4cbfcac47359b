// src/types.rs
use serde::Serialize;

/// A single employee record.
///
/// Fields are fixed at construction. Reporting edges live in
/// [`crate::hierarchy::Hierarchy`], not on the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: String,
    first_name: String,
    last_name: String,
    salary: u64,
    manager_id: Option<String>,
}

impl Employee {
    /// Creates an employee. A blank `manager_id` is treated as "no manager".
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: u64,
        manager_id: Option<&str>,
    ) -> Self {
        let manager_id = manager_id
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn salary(&self) -> u64 {
        self.salary
    }

    #[must_use]
    pub fn manager_id(&self) -> Option<&str> {
        self.manager_id.as_deref()
    }

    /// Returns true if this employee reports to nobody.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.manager_id.is_none()
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
