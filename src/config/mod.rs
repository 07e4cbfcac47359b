// src/config/mod.rs
pub mod types;

use std::fs;
use std::path::Path;

pub use self::types::{Config, HierarchyConfig, OrgAuditToml};
use crate::error::{OrgAuditError, Result};

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "orgaudit.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `orgaudit.toml` from the working directory, falling back to
    /// defaults when it does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read, parsed or validated.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads config from `path`; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path).map_err(|source| OrgAuditError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse_toml(&content)
    }

    /// Parses and validates TOML content.
    ///
    /// # Errors
    /// Returns error on invalid TOML or out-of-range values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let parsed: OrgAuditToml = toml::from_str(content)?;
        let config = Self::from(parsed);
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if the salary band is not a positive, ordered range.
    pub fn validate(&self) -> Result<()> {
        let band = &self.salary;
        let sane = |r: f64| r.is_finite() && r > 0.0;
        if !sane(band.min_ratio) || !sane(band.max_ratio) {
            return Err(OrgAuditError::Config(
                "salary ratios must be finite and positive".to_string(),
            ));
        }
        if band.min_ratio > band.max_ratio {
            return Err(OrgAuditError::Config(format!(
                "salary.min_ratio ({}) exceeds salary.max_ratio ({})",
                band.min_ratio, band.max_ratio
            )));
        }
        Ok(())
    }
}
