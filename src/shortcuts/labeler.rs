//! Platform-aware display labels for shortcut hints.
//!
//! Produces one label per token: `["cmd", "K"]` renders as `["⌘", "K"]` on
//! macOS and `["Ctrl", "K"]` elsewhere. The OS family is always supplied by
//! the caller.

use std::borrow::Cow;

use super::types::{OsFamily, ShortcutDefinition, BACKSPACE, CMD, ENTER, OPTION, SHIFT};

/// Label a shortcut for display.
///
/// Returns `None` when no shortcut is declared. Otherwise returns exactly one
/// label per token, in order. Unknown tokens pass through unchanged.
pub fn label(shortcut: Option<&ShortcutDefinition>, os_family: Option<&str>) -> Option<Vec<String>> {
    let shortcut = shortcut?;
    Some(label_for(shortcut, OsFamily::from_name(os_family)))
}

/// Typed variant of [`label`] for callers that already hold an `OsFamily`.
pub fn label_for(shortcut: &ShortcutDefinition, os: OsFamily) -> Vec<String> {
    shortcut
        .tokens()
        .iter()
        .map(|token| label_token(token, os).into_owned())
        .collect()
}

/// Label a single token.
pub fn label_token(token: &str, os: OsFamily) -> Cow<'_, str> {
    let glyph = match (token, os) {
        (OPTION, OsFamily::Darwin) => "⌥",
        (OPTION, OsFamily::Other) => "Alt",
        (CMD, OsFamily::Darwin) => "⌘",
        (CMD, OsFamily::Other) => "Ctrl",
        (ENTER, _) => "↵",
        (BACKSPACE, _) => "⌫",
        (SHIFT, _) => "⇧",
        _ => return Cow::Borrowed(token),
    };
    Cow::Borrowed(glyph)
}

/// Single-string hint text: glyphs run together on macOS (`⌘⇧K`) and are
/// joined with `+` elsewhere (`Ctrl+⇧+K`).
pub fn display(shortcut: &ShortcutDefinition, os: OsFamily) -> String {
    let labels = label_for(shortcut, os);
    match os {
        OsFamily::Darwin => labels.concat(),
        OsFamily::Other => labels.join("+"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(tokens: &[&str]) -> ShortcutDefinition {
        ShortcutDefinition::new(tokens.iter().copied())
    }

    #[test]
    fn absent_shortcut_has_no_label() {
        assert_eq!(label(None, Some("Darwin")), None);
        assert_eq!(label(None, None), None);
    }

    #[test]
    fn cmd_k_on_darwin_and_windows() {
        let shortcut = def(&["cmd", "K"]);
        assert_eq!(
            label(Some(&shortcut), Some("Darwin")),
            Some(vec!["⌘".to_string(), "K".to_string()])
        );
        assert_eq!(
            label(Some(&shortcut), Some("Windows")),
            Some(vec!["Ctrl".to_string(), "K".to_string()])
        );
    }

    #[test]
    fn absent_os_uses_non_darwin_table() {
        let shortcut = def(&["option", "cmd"]);
        assert_eq!(
            label(Some(&shortcut), None),
            Some(vec!["Alt".to_string(), "Ctrl".to_string()])
        );
    }

    #[test]
    fn shared_glyphs_are_os_independent() {
        let shortcut = def(&["entr", "bksp", "shift"]);
        let expected = vec!["↵".to_string(), "⌫".to_string(), "⇧".to_string()];
        assert_eq!(label(Some(&shortcut), Some("Darwin")), Some(expected.clone()));
        assert_eq!(label(Some(&shortcut), Some("Linux")), Some(expected));
    }

    #[test]
    fn option_on_darwin() {
        assert_eq!(label_token("option", OsFamily::Darwin), "⌥");
    }

    #[test]
    fn unknown_and_uppercase_tokens_pass_through() {
        let shortcut = def(&["esc", "CMD", "Tab", ""]);
        assert_eq!(
            label(Some(&shortcut), Some("Darwin")),
            Some(vec![
                "esc".to_string(),
                "CMD".to_string(),
                "Tab".to_string(),
                String::new()
            ])
        );
    }

    #[test]
    fn label_preserves_length() {
        let cases: [&[&str]; 4] = [
            &[],
            &["k"],
            &["cmd", "shift", "option", "entr"],
            &["a", "b", "c", "d", "e"],
        ];
        for tokens in cases {
            let shortcut = def(tokens);
            for os in [Some("Darwin"), Some("Windows"), None] {
                let labels = label(Some(&shortcut), os).unwrap();
                assert_eq!(labels.len(), tokens.len());
            }
        }
    }

    #[test]
    fn display_joins_per_platform() {
        let shortcut = def(&["cmd", "shift", "K"]);
        assert_eq!(display(&shortcut, OsFamily::Darwin), "⌘⇧K");
        assert_eq!(display(&shortcut, OsFamily::Other), "Ctrl+⇧+K");
    }
}
