//! User shortcut customization persistence.
//!
//! Format: HashMap<binding_id, Option<String>> where:
//! - Some(shortcut_string) = user override to new shortcut
//! - None = user disabled this shortcut

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::registry::ShortcutRegistry;
use super::types::{ShortcutDefinition, ShortcutParseError};

/// User shortcut overrides, stored in ~/.keyhint/shortcuts.json
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutOverrides {
    /// `null` in JSON disables the binding.
    #[serde(default)]
    pub overrides: HashMap<String, Option<String>>,
}

/// Error that can occur when loading/saving shortcut overrides.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid shortcut '{shortcut}' for binding '{binding_id}': {source}")]
    InvalidShortcut {
        binding_id: String,
        shortcut: String,
        #[source]
        source: ShortcutParseError,
    },
}

impl ShortcutOverrides {
    /// Load overrides from a JSON file. A missing file yields no overrides.
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides to a registry.
    ///
    /// Valid entries are applied even when others fail to parse; the failures
    /// are returned.
    pub fn apply_to_registry(&self, registry: &mut ShortcutRegistry) -> Vec<PersistenceError> {
        let mut errors = Vec::new();

        for (binding_id, override_opt) in &self.overrides {
            let Some(shortcut_str) = override_opt else {
                registry.set_override(binding_id, None);
                continue;
            };
            match ShortcutDefinition::parse(shortcut_str) {
                Ok(shortcut) => registry.set_override(binding_id, Some(shortcut)),
                Err(source) => errors.push(PersistenceError::InvalidShortcut {
                    binding_id: binding_id.clone(),
                    shortcut: shortcut_str.clone(),
                    source,
                }),
            }
        }

        errors
    }

    pub fn from_registry(registry: &ShortcutRegistry) -> Self {
        Self {
            overrides: registry.export_overrides(),
        }
    }

    pub fn set(&mut self, binding_id: impl Into<String>, shortcut: Option<String>) {
        self.overrides.insert(binding_id.into(), shortcut);
    }

    /// Remove an override (revert to default).
    pub fn remove(&mut self, binding_id: &str) {
        self.overrides.remove(binding_id);
    }

    pub fn has_override(&self, binding_id: &str) -> bool {
        self.overrides.contains_key(binding_id)
    }

    pub fn get(&self, binding_id: &str) -> Option<&Option<String>> {
        self.overrides.get(binding_id)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn clear(&mut self) {
        self.overrides.clear();
    }
}

/// Get the default path for shortcut overrides.
pub fn default_overrides_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".keyhint")
        .join("shortcuts.json")
}
