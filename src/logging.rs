//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence; otherwise the level is `orgaudit_core=warn`,
//! raised to `debug` by `--verbose`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.verbose)));

    // A second init (e.g. from tests) is ignored.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "orgaudit_core=debug,orgaudit=debug"
    } else {
        "orgaudit_core=warn,orgaudit=warn"
    }
}
