//! Customizable keyboard shortcuts.
//!
//! Shortcuts are checked against the normalised [`KeyPress`] from `studio_ui`,
//! so Ctrl and ⌘ are interchangeable.

use serde::{Deserialize, Serialize};
use studio_ui::{Key, KeyPress};

/// Something a shortcut can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Download the processed image
    Download,
    /// Restore every filter to its default
    Reset,
}

/// A key, optionally combined with the command modifier (Ctrl/⌘).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: Key,
    #[serde(default)]
    pub command: bool,
}

impl Shortcut {
    /// Shortcut requiring Ctrl/⌘.
    pub const fn command(key: Key) -> Self {
        Self { key, command: true }
    }

    /// Whether `press` triggers this shortcut.
    pub fn matches(&self, press: &KeyPress) -> bool {
        self.key == press.key && self.command == press.modifiers.command()
    }
}

impl std::fmt::Display for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.command {
            write!(f, "Ctrl+{}", self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Download the processed image
    #[serde(default = "default_download")]
    pub download: Shortcut,
    /// Reset all filters
    #[serde(default = "default_reset")]
    pub reset: Shortcut,
}

fn default_download() -> Shortcut {
    Shortcut::command(Key::Char('s'))
}

fn default_reset() -> Shortcut {
    Shortcut::command(Key::Char('r'))
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            download: default_download(),
            reset: default_reset(),
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the action that corresponds to a key press, if any.
    pub fn action_for(&self, press: &KeyPress) -> Option<ShortcutAction> {
        if self.download.matches(press) {
            Some(ShortcutAction::Download)
        } else if self.reset.matches(press) {
            Some(ShortcutAction::Reset)
        } else {
            None
        }
    }

    /// Rebind an action.
    pub fn set(&mut self, action: ShortcutAction, shortcut: Shortcut) {
        match action {
            ShortcutAction::Download => self.download = shortcut,
            ShortcutAction::Reset => self.reset = shortcut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_ui::Modifiers;

    fn press(c: char, ctrl: bool, meta: bool) -> KeyPress {
        KeyPress::new(
            Key::Char(c),
            Modifiers {
                ctrl,
                meta,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_default_shortcuts() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.action_for(&press('s', true, false)),
            Some(ShortcutAction::Download)
        );
        assert_eq!(
            bindings.action_for(&press('s', false, true)),
            Some(ShortcutAction::Download)
        );
        assert_eq!(
            bindings.action_for(&press('r', true, false)),
            Some(ShortcutAction::Reset)
        );
    }

    #[test]
    fn test_plain_keys_ignored() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.action_for(&press('s', false, false)), None);
        assert_eq!(bindings.action_for(&press('x', true, false)), None);
    }

    #[test]
    fn test_rebind() {
        let mut bindings = KeyBindings::new();
        bindings.set(ShortcutAction::Reset, Shortcut::command(Key::Backspace));

        assert_eq!(bindings.action_for(&press('r', true, false)), None);
        let press = KeyPress::new(
            Key::Backspace,
            Modifiers {
                ctrl: true,
                ..Default::default()
            },
        );
        assert_eq!(bindings.action_for(&press), Some(ShortcutAction::Reset));
        assert_eq!(
            bindings.reset.to_string(),
            "Ctrl+Backspace"
        );
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let bindings: KeyBindings = serde_json::from_str("{}").unwrap();
        assert_eq!(bindings, KeyBindings::default());
    }
}
