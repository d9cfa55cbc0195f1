//! Core shortcut types: definitions, key events, and OS family.
//!
//! This module provides:
//! - `ShortcutDefinition` - An ordered, immutable list of key-name tokens
//! - `KeyEvent` - A key press as delivered by the host UI runtime
//! - `OsFamily` - Which glyph table to render hints with
//! - `ShortcutParseError` - Errors from parsing `cmd+k` style strings

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Modifier token for the platform accelerator (Meta on macOS, Ctrl elsewhere).
pub const CMD: &str = "cmd";
/// Modifier token for Shift.
pub const SHIFT: &str = "shift";
/// Alias token for the Alt/Option key.
pub const OPTION: &str = "option";
/// Alias token for Enter.
pub const ENTER: &str = "entr";
/// Alias token for Backspace.
pub const BACKSPACE: &str = "bksp";
/// Alias token for Escape.
pub const ESCAPE: &str = "esc";

/// Errors that can occur when parsing a shortcut string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    #[error("shortcut string is empty")]
    Empty,
}

/// A declared keyboard shortcut: an ordered sequence of abstract key names
/// such as `["cmd", "shift", "k"]`.
///
/// Definitions are built once at setup and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutDefinition {
    tokens: Vec<String>,
}

impl ShortcutDefinition {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a `+` or whitespace separated shortcut string, e.g. `"cmd+shift+k"`
    /// or `"cmd + k"`.
    ///
    /// Tokens are kept verbatim (no case folding, no validation): unknown
    /// tokens are legal and simply never match anything but themselves.
    pub fn parse(s: &str) -> Result<Self, ShortcutParseError> {
        let normalized = s.replace('+', " ");
        let tokens: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens folded to lower case, as the matcher compares them.
    pub fn lowercased(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.to_lowercase()).collect()
    }

    /// Lower-cased tokens as a set. Two definitions with equal sets accept
    /// exactly the same key events.
    pub fn token_set(&self) -> BTreeSet<String> {
        self.tokens.iter().map(|t| t.to_lowercase()).collect()
    }

    /// Tokens joined with `+`. Parses back to an equal definition.
    pub fn to_canonical_string(&self) -> String {
        self.tokens.join("+")
    }
}

impl fmt::Display for ShortcutDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

/// A single key press delivered by the host UI runtime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    pub key: String,
    #[serde(default)]
    pub meta_key: bool,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub shift_key: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Whether the platform accelerator (meta or ctrl) is held.
    pub fn accelerator(&self) -> bool {
        self.meta_key || self.ctrl_key
    }

    pub fn has_modifiers(&self) -> bool {
        self.meta_key || self.ctrl_key || self.shift_key
    }
}

/// OS family used to pick display glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Darwin,
    #[default]
    Other,
}

impl OsFamily {
    /// Map a host-reported family name. Only the exact string `"Darwin"`
    /// selects the macOS glyphs.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("Darwin") => OsFamily::Darwin,
            _ => OsFamily::Other,
        }
    }

    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            OsFamily::Darwin
        }
        #[cfg(not(target_os = "macos"))]
        {
            OsFamily::Other
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OsFamily::Darwin => "Darwin",
            OsFamily::Other => "Other",
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
