//! keyhint - keyboard shortcut hints and matching for the search front-end
//!
//! This library turns declared shortcuts (`["cmd", "k"]`) into platform-aware
//! hint labels and decides whether a key event triggers them.

pub mod config;
pub mod error;
pub mod logging;
pub mod shortcuts;

pub use shortcuts::{label, matches, KeyEvent, OsFamily, ShortcutDefinition};
