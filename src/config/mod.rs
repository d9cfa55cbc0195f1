//! Configuration module - user settings for shortcut hints and dispatch
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, BindingConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use types::{BindingConfig, Config};

pub use loader::{default_config_path, load_config};

#[cfg(test)]
pub use defaults::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_TO_FILE};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
