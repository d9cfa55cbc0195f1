//! Default configuration values

/// Config file location; `~` is expanded at load time.
pub const DEFAULT_CONFIG_PATH: &str = "~/.keyhint/config.json";

/// Default tracing filter when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Whether the JSONL log file is written by default.
pub const DEFAULT_LOG_TO_FILE: bool = true;

/// Whether the built-in bindings are registered before configured ones.
pub const DEFAULT_INCLUDE_BUILTIN_BINDINGS: bool = true;
