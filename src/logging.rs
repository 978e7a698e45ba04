//! Log file setup
//!
//! The terminal belongs to the TUI, so tracing output goes to
//! `finance-tracker.log` in the config directory. `RUST_LOG` takes
//! precedence over the built-in filter.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ConfigPaths;
use crate::error::{LedgerError, LedgerResult};

static LOGGING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "finance_tracker=debug"
    } else {
        "finance_tracker=info"
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(paths: &ConfigPaths, debug: bool) -> LedgerResult<()> {
    let mut result = Ok(());
    LOGGING_INIT.call_once(|| result = install(paths, debug));
    result
}

fn install(paths: &ConfigPaths, debug: bool) -> LedgerResult<()> {
    paths.ensure_config_dir()?;
    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            LedgerError::Io(format!("Failed to open log file {}: {}", log_path.display(), e))
        })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LedgerError::Config(format!("Failed to initialise logging: {}", e)))?;

    tracing::debug!(path = %log_path.display(), "Logging initialised");
    Ok(())
}
