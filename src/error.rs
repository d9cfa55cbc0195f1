use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::shortcuts::{PersistenceError, ShortcutParseError};

/// Error severity for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning, // recoverable, the entry was skipped
    Error,   // a file could not be read or written
}

/// Crate-level errors surfaced to the CLI and embedders.
///
/// The labeler and matcher are total and never produce these.
#[derive(Error, Debug)]
pub enum KeyhintError {
    #[error("invalid shortcut for binding '{binding_id}': {source}")]
    InvalidBinding {
        binding_id: String,
        #[source]
        source: ShortcutParseError,
    },

    #[error("failed to read shortcut overrides: {0}")]
    Overrides(#[from] PersistenceError),

    #[error("failed to parse key event: {0}")]
    KeyEventParse(#[from] serde_json::Error),

    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl KeyhintError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidBinding { .. } => ErrorSeverity::Warning,
            Self::Overrides(PersistenceError::Io(_)) => ErrorSeverity::Error,
            Self::Overrides(_) => ErrorSeverity::Warning,
            Self::KeyEventParse(_) => ErrorSeverity::Warning,
            Self::ConfigRead { .. } => ErrorSeverity::Error,
            Self::ConfigParse { .. } => ErrorSeverity::Warning,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidBinding { binding_id, .. } => {
                format!("Shortcut for '{}' could not be read and was skipped", binding_id)
            }
            Self::Overrides(e) => format!("Custom shortcuts were not applied: {}", e),
            Self::KeyEventParse(e) => format!("Invalid key event: {}", e),
            Self::ConfigRead { path, .. } => {
                format!("Could not read {}, using default settings", path.display())
            }
            Self::ConfigParse { path, source } => {
                let hint = if source.to_string().contains("missing field `shortcut`") {
                    " (each entry in 'bindings' needs an 'id' and a 'shortcut', \
                     e.g. {\"id\": \"search.focus\", \"shortcut\": \"cmd+f\"})"
                } else {
                    ""
                };
                format!("Invalid config {}, using default settings{}", path.display(), hint)
            }
        }
    }

    /// Log at the level matching `severity()`.
    pub fn report(&self) {
        match self.severity() {
            ErrorSeverity::Warning => {
                tracing::warn!(error = %self, "{}", self.user_message())
            }
            ErrorSeverity::Error => {
                tracing::error!(error = %self, "{}", self.user_message())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KeyhintError>;

/// Log-and-discard for recoverable failures, with the caller's location.
///
/// ```ignore
/// use keyhint::error::ResultExt;
///
/// let overrides = ShortcutOverrides::load(&path).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
