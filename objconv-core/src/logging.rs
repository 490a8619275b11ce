//! Console and file logging for the converter front ends
//!
//! Only built with the `logging` feature; the library itself logs through
//! whatever subscriber the host installs.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log file written next to the working directory unless configured otherwise
pub const DEFAULT_LOG_FILE: &str = "log_model_converter.txt";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("can't create the log file {path}: {source}")]
    LogFile { path: String, source: io::Error },

    #[error("a global logger is already installed")]
    AlreadyInstalled,
}

/// Install a global subscriber writing to stderr (unless `quiet`) and to a
/// freshly truncated log file.
///
/// The filter comes from `RUST_LOG`. Without it everything at info level and
/// above is kept, or debug when `OBJCONV_DEBUG` is set.
pub fn init(log_file: Option<&Path>, quiet: bool) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level()));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| LoggingError::LogFile {
                path: path.display().to_string(),
                source,
            })?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };
    let console_layer = (!quiet).then(|| fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}

fn default_level() -> &'static str {
    if std::env::var_os("OBJCONV_DEBUG").is_some() {
        "debug"
    } else {
        "info"
    }
}
