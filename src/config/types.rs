//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{KeyhintError, Result, ResultExt};
use crate::logging::LogConfig;
use crate::shortcuts::{
    default_overrides_path, OsFamily, ShortcutBinding, ShortcutCategory, ShortcutDefinition,
    ShortcutOverrides, ShortcutRegistry,
};

use super::defaults::*;

/// A binding declared in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingConfig {
    pub id: String,
    /// Display name (defaults to the id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Shortcut string such as "cmd+shift+k"
    pub shortcut: String,
    #[serde(default)]
    pub category: ShortcutCategory,
}

impl BindingConfig {
    pub fn to_binding(&self) -> Result<ShortcutBinding> {
        let shortcut = ShortcutDefinition::parse(&self.shortcut).map_err(|source| {
            KeyhintError::InvalidBinding {
                binding_id: self.id.clone(),
                source,
            }
        })?;
        Ok(ShortcutBinding::new(
            self.id.clone(),
            self.name.clone().unwrap_or_else(|| self.id.clone()),
            shortcut,
            self.category,
        ))
    }
}

/// Top-level settings, read from ~/.keyhint/config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// OS family name for hint glyphs ("Darwin" or other); detected when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_family: Option<String>,
    /// Location of the user overrides file (default: ~/.keyhint/shortcuts.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides_path: Option<String>,
    /// Default tracing filter (default: "info")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Write the JSONL log file (default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_to_file: Option<bool>,
    /// Register the built-in bindings first (default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin_bindings: Option<bool>,
    /// Extra bindings; an id that matches a built-in replaces it
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

impl Config {
    pub fn os_family(&self) -> OsFamily {
        match self.os_family.as_deref() {
            Some(name) => OsFamily::from_name(Some(name)),
            None => OsFamily::current(),
        }
    }

    pub fn overrides_path(&self) -> PathBuf {
        self.overrides_path
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
            .unwrap_or_else(default_overrides_path)
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self
                .log_level
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            file: self.log_to_file.unwrap_or(DEFAULT_LOG_TO_FILE),
        }
    }

    /// Build the registry: built-ins, then configured bindings, then the
    /// user overrides file. Bad entries are logged and skipped.
    pub fn build_registry(&self) -> ShortcutRegistry {
        let mut registry = if self.builtin_bindings.unwrap_or(DEFAULT_INCLUDE_BUILTIN_BINDINGS) {
            ShortcutRegistry::with_defaults()
        } else {
            ShortcutRegistry::new()
        };

        for binding in &self.bindings {
            if let Some(binding) = binding.to_binding().warn_on_err() {
                registry.register(binding);
            }
        }

        let path = self.overrides_path();
        if let Some(overrides) = ShortcutOverrides::load(&path)
            .map_err(KeyhintError::from)
            .warn_on_err()
        {
            for error in overrides.apply_to_registry(&mut registry) {
                tracing::warn!(error = %error, path = %path.display(), "Skipping shortcut override");
            }
        }

        let conflicts = registry.find_conflicts();
        for conflict in &conflicts {
            tracing::warn!(
                winner = %conflict.winner_id,
                loser = %conflict.loser_id,
                shortcut = %conflict.shortcut,
                "Shortcut conflict, earlier binding wins"
            );
        }

        tracing::info!(
            bindings = registry.bindings().len(),
            active = registry.active_count(),
            conflicts = conflicts.len(),
            "Shortcut registry ready"
        );
        registry
    }
}
