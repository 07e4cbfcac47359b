use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(name = "orgaudit", version, about = "Org chart salary and depth auditor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Config file (default: ./orgaudit.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run both the salary and the depth analysis
    Analyze {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Exit with a non-zero code when any issue is found
        #[arg(long)]
        fail_on_violations: bool,
    },
    /// Report managers paid outside the band
    Salaries {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report employees with too long a reporting line
    Depth {
        #[command(flatten)]
        input: InputArgs,
        /// Depth assigned to the root
        #[arg(long)]
        start_depth: Option<usize>,
        /// Deepest allowed level
        #[arg(long)]
        max_depth: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the reconstructed hierarchy
    Tree {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Employee CSV (id, firstName, lastName, salary, managerId)
    #[arg(value_name = "CSV")]
    pub file: PathBuf,
    /// Accept several or zero top-level employees, keeping the last one
    #[arg(long)]
    pub last_seen_root: bool,
}
