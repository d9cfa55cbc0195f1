//! Routes key events to registry bindings.
//!
//! The matcher itself never looks at focus. This is the layer that drops
//! events typed into text inputs before matching.

use serde::Serialize;

use crate::logging;

use super::registry::ShortcutRegistry;
use super::types::KeyEvent;

/// Where keyboard focus sits when an event arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFocus {
    TextInput,
    #[default]
    Other,
}

/// Outcome of dispatching one key event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "id", rename_all = "camelCase")]
pub enum Dispatch {
    Matched(String),
    Unmatched,
    /// Dropped because a text input owns the keyboard.
    Suppressed,
}

pub struct ShortcutDispatcher {
    registry: ShortcutRegistry,
}

impl ShortcutDispatcher {
    pub fn new(registry: ShortcutRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ShortcutRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ShortcutRegistry {
        &mut self.registry
    }

    pub fn dispatch(&self, event: &KeyEvent, focus: InputFocus) -> Dispatch {
        let modifiers = logging::modifiers_summary(event);

        if focus == InputFocus::TextInput && !is_bare_escape(event) {
            logging::log_key_event(&event.key, &modifiers, "suppressed");
            return Dispatch::Suppressed;
        }

        match self.registry.find_match(event) {
            Some(id) => {
                logging::log_key_event(&event.key, &modifiers, "matched");
                tracing::debug!(event_type = "shortcut_dispatch", binding_id = id, "Shortcut matched");
                Dispatch::Matched(id.to_string())
            }
            None => {
                logging::log_key_event(&event.key, &modifiers, "unmatched");
                Dispatch::Unmatched
            }
        }
    }
}

/// Plain Escape still reaches shortcuts from a text input so the user can
/// leave it from the keyboard.
fn is_bare_escape(event: &KeyEvent) -> bool {
    event.key == "Escape" && !event.has_modifiers()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> ShortcutDispatcher {
        ShortcutDispatcher::new(ShortcutRegistry::with_defaults())
    }

    #[test]
    fn matched_event_reports_binding_id() {
        let outcome = dispatcher().dispatch(&KeyEvent::new("k").with_meta(), InputFocus::Other);
        assert_eq!(outcome, Dispatch::Matched("commandBar.open".to_string()));
    }

    #[test]
    fn unknown_event_is_unmatched() {
        let outcome = dispatcher().dispatch(&KeyEvent::new("q"), InputFocus::Other);
        assert_eq!(outcome, Dispatch::Unmatched);
    }

    #[test]
    fn text_input_suppresses_shortcuts() {
        let d = dispatcher();
        assert_eq!(
            d.dispatch(&KeyEvent::new("k").with_meta(), InputFocus::TextInput),
            Dispatch::Suppressed
        );
        assert_eq!(
            d.dispatch(&KeyEvent::new("Enter"), InputFocus::TextInput),
            Dispatch::Suppressed
        );
    }

    #[test]
    fn bare_escape_passes_through_text_input() {
        let d = dispatcher();
        assert_eq!(
            d.dispatch(&KeyEvent::new("Escape"), InputFocus::TextInput),
            Dispatch::Matched("commandBar.close".to_string())
        );
        assert_eq!(
            d.dispatch(&KeyEvent::new("Escape").with_shift(), InputFocus::TextInput),
            Dispatch::Suppressed
        );
    }

    #[test]
    fn registry_changes_are_visible_to_dispatch() {
        let mut d = dispatcher();
        d.registry_mut().set_override("commandBar.open", None);
        assert_eq!(
            d.dispatch(&KeyEvent::new("k").with_meta(), InputFocus::Other),
            Dispatch::Unmatched
        );
    }

    #[test]
    fn dispatch_serializes_with_outcome_tag() {
        let json = serde_json::to_string(&Dispatch::Matched("code.copy".to_string())).unwrap();
        assert_eq!(json, r#"{"outcome":"matched","id":"code.copy"}"#);
        let json = serde_json::to_string(&Dispatch::Suppressed).unwrap();
        assert_eq!(json, r#"{"outcome":"suppressed"}"#);
    }
}
