//! Logging setup: stderr plus a persistent log file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{XbotError, XbotResult};

/// Default log file, appended across runs.
pub const LOG_FILE: &str = "xbot.log";

/// Initialize tracing with an stderr layer and an append-only file layer.
///
/// Logs go to stderr so stdout stays clean for action output. The file
/// layer records the same timestamped lines without ANSI escapes.
pub fn init(log_path: &Path) -> XbotResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .map_err(|e| XbotError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}
