//! Structured JSONL logging to a file plus human-readable stderr output.
//!
//! - **JSONL to file** (~/.keyhint/logs/keyhint.jsonl) - structured for tooling
//! - **Compact to stderr** - human-readable for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! // MUST keep guard alive for duration of program
//! let _guard = keyhint::logging::init(&LogConfig::default());
//! tracing::info!(event_type = "startup", "keyhint started");
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::shortcuts::KeyEvent;

const LOG_FILE_NAME: &str = "keyhint.jsonl";

/// Logging options, usually taken from the loaded config.
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Write the JSONL file in addition to stderr.
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging. Returns a guard that flushes the file layer on drop.
pub fn init(config: &LogConfig) -> LoggingGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .compact();

    let (json_layer, file_guard) = match config.file.then(open_log_file).flatten() {
        Some(file) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_file(false)
                .with_line_number(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // try_init: tests and embedders may already have a subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .try_init();

    tracing::debug!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path().display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn open_log_file() -> Option<fs::File> {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
        return None;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))
        .map_err(|e| eprintln!("[LOGGING] Failed to open log file: {}", e))
        .ok()
}

/// Get the log directory path (~/.keyhint/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".keyhint").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("keyhint-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

/// Held modifiers as a short `meta+shift` style string, `none` when bare.
pub fn modifiers_summary(event: &KeyEvent) -> String {
    let held: Vec<&str> = [
        (event.meta_key, "meta"),
        (event.ctrl_key, "ctrl"),
        (event.shift_key, "shift"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();

    if held.is_empty() {
        "none".to_string()
    } else {
        held.join("+")
    }
}

/// Log a keyboard event with structured fields
pub fn log_key_event(key: &str, modifiers: &str, action: &str) {
    tracing::debug!(
        event_type = "key_event",
        key = key,
        modifiers = modifiers,
        action = action,
        "Key {} {}", action, key
    );
}
