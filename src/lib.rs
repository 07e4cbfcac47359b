pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod hierarchy;
pub mod ingest;
pub mod logging;
pub mod reporting;
pub mod store;
pub mod types;

pub use error::{OrgAuditError, Result};
pub use hierarchy::{build, Hierarchy, Node, RootPolicy};
pub use store::RecordStore;
pub use types::Employee;
