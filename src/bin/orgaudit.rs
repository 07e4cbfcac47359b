// src/bin/orgaudit.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use orgaudit_core::cli::{self, Cli, Commands};
use orgaudit_core::exit::OrgAuditExit;
use orgaudit_core::logging;

fn main() -> OrgAuditExit {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            OrgAuditExit::for_error(&e)
        }
    }
}

fn run(cli: &Cli) -> Result<OrgAuditExit> {
    let config = cli::load_config(cli.config.as_deref(), cli.verbose)?;
    logging::init(&config);
    match &cli.command {
        Commands::Analyze {
            input,
            format,
            fail_on_violations,
        } => cli::handle_analyze(input, config, *format, *fail_on_violations),
        Commands::Salaries { input, format } => cli::handle_salaries(input, config, *format),
        Commands::Depth {
            input,
            start_depth,
            max_depth,
            format,
        } => cli::handle_depth(input, config, *start_depth, *max_depth, *format),
        Commands::Tree { input } => cli::handle_tree(input, config),
    }
}
