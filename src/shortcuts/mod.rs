//! Keyboard shortcut labeling and matching.
//!
//! This module provides:
//! - Shortcut definitions as ordered key-name tokens (`["cmd", "k"]`)
//! - Platform-aware hint labels (`⌘K` on macOS, `Ctrl+K` elsewhere)
//! - Exact-modifier matching of key events against definitions
//! - A binding registry, dispatcher, and user override persistence
//!
//! # Example
//!
//! ```
//! use keyhint::shortcuts::{label, matches, KeyEvent, ShortcutDefinition};
//!
//! let shortcut = ShortcutDefinition::new(["cmd", "k"]);
//! assert_eq!(
//!     label(Some(&shortcut), Some("Darwin")),
//!     Some(vec!["⌘".to_string(), "k".to_string()])
//! );
//! assert!(matches(&KeyEvent::new("k").with_meta(), Some(&shortcut)));
//! ```

mod dispatch;
mod labeler;
mod matcher;
mod persistence;
mod registry;
mod types;

pub use types::{KeyEvent, OsFamily, ShortcutDefinition, ShortcutParseError};

pub use labeler::{display, label, label_for, label_token};
pub use matcher::matches;

pub use registry::{
    default_bindings, ShortcutBinding, ShortcutCategory, ShortcutConflict, ShortcutRegistry,
};

pub use dispatch::{Dispatch, InputFocus, ShortcutDispatcher};

pub use persistence::{default_overrides_path, PersistenceError, ShortcutOverrides};
