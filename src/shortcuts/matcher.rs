//! Exact shortcut matching against a live key event.
//!
//! A shortcut matches only when the held modifiers are exactly the declared
//! ones: `cmd` is satisfied by meta or ctrl, `shift` by shift. Extra or
//! missing modifiers reject the event.

use super::types::{KeyEvent, ShortcutDefinition, BACKSPACE, CMD, ENTER, ESCAPE, SHIFT};

/// Event keys that are satisfied by an alias token instead of a literal one.
const NAMED_KEYS: &[(&str, &str)] = &[
    ("Enter", ENTER),
    ("Backspace", BACKSPACE),
    ("Escape", ESCAPE),
];

/// Decide whether `event` satisfies `shortcut`.
///
/// No shortcut never matches. Text-input focus filtering is the caller's job.
pub fn matches(event: &KeyEvent, shortcut: Option<&ShortcutDefinition>) -> bool {
    let Some(shortcut) = shortcut else {
        return false;
    };
    let tokens = shortcut.lowercased();
    let declares = |name: &str| tokens.iter().any(|t| t == name);

    if declares(CMD) != event.accelerator() {
        tracing::trace!(key = %event.key, shortcut = %shortcut, "cmd modifier mismatch");
        return false;
    }
    if declares(SHIFT) != event.shift_key {
        tracing::trace!(key = %event.key, shortcut = %shortcut, "shift modifier mismatch");
        return false;
    }

    let named = NAMED_KEYS
        .iter()
        .any(|(key, alias)| event.key == *key && declares(*alias));
    if named {
        return true;
    }

    declares(event.key.as_str())
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
