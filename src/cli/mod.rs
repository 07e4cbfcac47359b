// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, InputArgs};
pub use handlers::{handle_analyze, handle_depth, handle_salaries, handle_tree, load_config};
