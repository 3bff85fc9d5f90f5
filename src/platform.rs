//! Platform-specific configuration

use crossterm::event::{KeyEvent, KeyModifiers};

/// Platform-appropriate modifier accepted alongside Ctrl for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Show/hide secrets shortcut display
pub const REVEAL_SHORTCUT: &str = "Ctrl+T";

/// Ctrl works everywhere; the platform modifier is a fallback
pub fn is_shortcut(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(SHORTCUT_MODIFIER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_ctrl_is_always_a_shortcut() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(is_shortcut(&key));
    }

    #[test]
    fn test_plain_key_is_not_a_shortcut() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(!is_shortcut(&key));
        let key = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert!(!is_shortcut(&key));
    }
}
