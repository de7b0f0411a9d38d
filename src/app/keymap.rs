use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub open: Vec<String>,
    pub toggle_theme: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            open: vec!["ctrl+k".to_string(), "/".to_string()],
            toggle_theme: vec!["t".to_string()],
            quit: vec!["q".to_string(), "ctrl+c".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Bindings while the menu is closed
    pub global: HashMap<KeyEvent, Action>,
    // Chorded shortcuts that still fire while typing into the menu
    pub menu: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut menu = HashMap::new();

        let bindings = [
            (&config.open, Action::OpenMenu),
            (&config.toggle_theme, Action::ToggleTheme),
            (&config.quit, Action::Quit),
        ];
        for (specs, action) in bindings {
            for spec in specs {
                let Some(event) = parse_key(spec) else {
                    tracing::warn!(key = %spec, "ignoring unparsable key binding");
                    continue;
                };
                if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                    menu.insert(event, action.clone());
                }
                global.insert(event, action.clone());
            }
        }

        Self { global, menu }
    }

    pub fn get_action(&self, event: KeyEvent, menu_open: bool) -> Option<Action> {
        let event = normalize(event);
        if menu_open {
            self.menu.get(&event).cloned()
        } else {
            self.global.get(&event).cloned()
        }
    }
}

/// Parses bindings like `ctrl+k`, `/`, `alt+enter`.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }
    // A lone "+" is the plus key, not a separator
    if spec == "+" {
        return Some(key(KeyCode::Char('+')));
    }

    let mut parts: Vec<&str> = spec.split('+').collect();
    let last = parts.pop()?;
    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match last.to_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        _ => {
            let mut chars = last.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if modifiers.is_empty() => KeyCode::Char(c),
                (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                _ => return None,
            }
        }
    };

    Some(normalize(KeyEvent::new(code, modifiers)))
}

// Terminals disagree on SHIFT for printable characters, and may report
// press/repeat state; compare on code + modifiers only.
fn normalize(event: KeyEvent) -> KeyEvent {
    let modifiers = match event.code {
        KeyCode::Char(_) => event.modifiers - KeyModifiers::SHIFT,
        _ => event.modifiers,
    };
    KeyEvent::new(event.code, modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(
            parse_key("ctrl+k"),
            Some(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL))
        );
        assert_eq!(parse_key("/"), Some(key(KeyCode::Char('/'))));
        assert_eq!(parse_key("+"), Some(key(KeyCode::Char('+'))));
        assert_eq!(parse_key("Esc"), Some(key(KeyCode::Esc)));
        assert_eq!(parse_key("hyper+k"), None);
        assert_eq!(parse_key("ctrl+"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let ctrl_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);

        assert_eq!(map.get_action(key(KeyCode::Char('/')), false), Some(Action::OpenMenu));
        assert_eq!(map.get_action(ctrl_k, false), Some(Action::OpenMenu));
        assert_eq!(map.get_action(key(KeyCode::Char('t')), false), Some(Action::ToggleTheme));

        // While typing, only chorded shortcuts apply
        assert_eq!(map.get_action(key(KeyCode::Char('/')), true), None);
        assert_eq!(map.get_action(key(KeyCode::Char('q')), true), None);
        assert_eq!(map.get_action(ctrl_k, true), Some(Action::OpenMenu));
    }

    #[test]
    fn test_shift_is_ignored_for_chars() {
        let map = KeyMap::from_config(&KeyConfig::default());
        let slash = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::SHIFT);
        assert_eq!(map.get_action(slash, false), Some(Action::OpenMenu));
    }

    #[test]
    fn test_bad_binding_is_skipped() {
        let config = KeyConfig {
            open: vec!["nonsense+x".to_string(), "o".to_string()],
            ..Default::default()
        };
        let map = KeyMap::from_config(&config);
        assert_eq!(map.get_action(key(KeyCode::Char('o')), false), Some(Action::OpenMenu));
        assert_eq!(map.get_action(key(KeyCode::Char('/')), false), None);
    }
}
