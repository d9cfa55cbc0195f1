//! Deterministic shortcut registry with Vec storage.
//!
//! Uses Vec for deterministic iteration order and HashMap for O(1) lookup.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::labeler::label_for;
use super::matcher::matches;
use super::types::{KeyEvent, OsFamily, ShortcutDefinition};

/// Category for grouping shortcuts in hint UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShortcutCategory {
    Navigation,
    #[default]
    Actions,
    Edit,
    View,
    Search,
}

/// A shortcut bound to a named action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutBinding {
    pub id: String,
    pub name: String,
    pub shortcut: ShortcutDefinition,
    pub category: ShortcutCategory,
}

impl ShortcutBinding {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        shortcut: ShortcutDefinition,
        category: ShortcutCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shortcut,
            category,
        }
    }
}

/// Two active bindings whose effective shortcuts are indistinguishable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutConflict {
    /// Registered first; wins dispatch.
    pub winner_id: String,
    pub loser_id: String,
    pub shortcut: String,
}

/// Central registry of keyboard shortcuts.
#[derive(Default)]
pub struct ShortcutRegistry {
    bindings: Vec<ShortcutBinding>,
    id_to_index: HashMap<String, usize>,
    user_overrides: HashMap<String, Option<ShortcutDefinition>>,
    disabled: HashSet<String>,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in bindings.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for binding in default_bindings() {
            registry.register(binding);
        }
        registry
    }

    /// Add a binding. A binding with an existing id replaces it in place.
    pub fn register(&mut self, binding: ShortcutBinding) {
        if let Some(&existing_index) = self.id_to_index.get(&binding.id) {
            self.bindings[existing_index] = binding;
        } else {
            let index = self.bindings.len();
            self.id_to_index.insert(binding.id.clone(), index);
            self.bindings.push(binding);
        }
    }

    pub fn get(&self, id: &str) -> Option<&ShortcutBinding> {
        self.id_to_index.get(id).and_then(|&i| self.bindings.get(i))
    }

    /// The shortcut currently in effect for `id`, honoring overrides.
    pub fn get_shortcut(&self, id: &str) -> Option<&ShortcutDefinition> {
        if self.disabled.contains(id) {
            return None;
        }
        if let Some(override_opt) = self.user_overrides.get(id) {
            return override_opt.as_ref();
        }
        self.get(id).map(|b| &b.shortcut)
    }

    /// Override a binding's shortcut. `None` disables the binding.
    pub fn set_override(&mut self, id: &str, shortcut: Option<ShortcutDefinition>) {
        if shortcut.is_none() {
            self.disabled.insert(id.to_string());
        } else {
            self.disabled.remove(id);
        }
        self.user_overrides.insert(id.to_string(), shortcut);
    }

    pub fn clear_override(&mut self, id: &str) {
        self.user_overrides.remove(id);
        self.disabled.remove(id);
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled.contains(id)
    }

    /// Find the binding a key event triggers.
    ///
    /// Bindings are tried in registration order; a user override beats a
    /// default when both match the same event.
    pub fn find_match(&self, event: &KeyEvent) -> Option<&str> {
        let mut fallback: Option<&str> = None;

        for binding in &self.bindings {
            if !matches(event, self.get_shortcut(&binding.id)) {
                continue;
            }
            if self.user_overrides.contains_key(&binding.id) {
                return Some(&binding.id);
            }
            if fallback.is_none() {
                fallback = Some(&binding.id);
            }
        }

        fallback
    }

    pub fn bindings(&self) -> &[ShortcutBinding] {
        &self.bindings
    }

    pub fn bindings_by_category(&self, category: ShortcutCategory) -> Vec<&ShortcutBinding> {
        self.bindings
            .iter()
            .filter(|b| b.category == category && !self.disabled.contains(&b.id))
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.bindings
            .iter()
            .filter(|b| !self.disabled.contains(&b.id))
            .count()
    }

    /// Display labels for a binding's effective shortcut.
    pub fn labels(&self, id: &str, os: OsFamily) -> Option<Vec<String>> {
        self.get_shortcut(id).map(|s| label_for(s, os))
    }

    /// Export user overrides as canonical strings for persistence.
    ///
    /// `None` marks a disabled binding.
    pub fn export_overrides(&self) -> HashMap<String, Option<String>> {
        self.user_overrides
            .iter()
            .map(|(id, opt)| (id.clone(), opt.as_ref().map(|s| s.to_canonical_string())))
            .collect()
    }

    /// Active bindings whose effective shortcuts have the same lower-cased
    /// token set. Token order and repeats are ignored, as in matching.
    /// The earlier registration is reported as the winner.
    pub fn find_conflicts(&self) -> Vec<ShortcutConflict> {
        let mut seen: HashMap<BTreeSet<String>, (&str, String)> = HashMap::new();
        let mut conflicts = Vec::new();

        for binding in &self.bindings {
            let Some(shortcut) = self.get_shortcut(&binding.id) else {
                continue;
            };
            let key = shortcut.token_set();
            match seen.get(&key) {
                Some((winner, winner_shortcut)) => conflicts.push(ShortcutConflict {
                    winner_id: winner.to_string(),
                    loser_id: binding.id.clone(),
                    shortcut: winner_shortcut.clone(),
                }),
                None => {
                    seen.insert(key, (binding.id.as_str(), shortcut.lowercased().join("+")));
                }
            }
        }

        conflicts
    }
}

/// Built-in bindings for the search and chat front-end.
///
/// None of these pair `shift` with a letter: with Shift held, hosts report
/// the shifted character (`"J"`), which never equals a lower-cased token.
pub fn default_bindings() -> Vec<ShortcutBinding> {
    use ShortcutCategory::*;

    let table: &[(&str, &str, &[&str], ShortcutCategory)] = &[
        ("commandBar.open", "Open command bar", &["cmd", "k"], Actions),
        ("commandBar.close", "Close command bar", &["esc"], Navigation),
        ("commandBar.submit", "Run selected item", &["entr"], Actions),
        ("commandBar.back", "Go back", &["bksp"], Navigation),
        ("search.focus", "Focus search", &["cmd", "f"], Search),
        ("search.clear", "Clear query", &["cmd", "bksp"], Search),
        ("results.next", "Next result", &["cmd", "j"], Navigation),
        ("results.prev", "Previous result", &["shift", "entr"], Navigation),
        ("code.copy", "Copy code", &["cmd", "c"], Edit),
        ("chat.new", "New conversation", &["cmd", "shift", "entr"], Actions),
        ("view.toggleSidebar", "Toggle sidebar", &["cmd", "b"], View),
    ];

    table
        .iter()
        .map(|(id, name, tokens, category)| {
            ShortcutBinding::new(
                *id,
                *name,
                ShortcutDefinition::new(tokens.iter().copied()),
                *category,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
