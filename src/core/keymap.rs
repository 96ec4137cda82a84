//! Key to [`Direction`] bindings.

use rustc_hash::FxHashMap;

use crate::services::settings::KeybindingRule;
use crate::ui::core::input::Direction;

use super::event::{Key, KeyCode, KeyModifiers};

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: FxHashMap<Key, Direction>,
}

/// Arrow keys move; Enter, Space and `a` confirm; Esc, Backspace and `b` go
/// back. The letter bindings mirror a handheld's A/B face buttons.
const DEFAULT_BINDINGS: [(KeyCode, Direction); 10] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
    (KeyCode::Enter, Direction::Confirm),
    (KeyCode::Char(' '), Direction::Confirm),
    (KeyCode::Char('a'), Direction::Confirm),
    (KeyCode::Esc, Direction::Back),
    (KeyCode::Backspace, Direction::Back),
    (KeyCode::Char('b'), Direction::Back),
];

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        for (code, direction) in DEFAULT_BINDINGS {
            keymap.bind(Key::simple(code), direction);
        }
        keymap
    }
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    /// Defaults with `rules` layered on top. Rules that fail to parse are
    /// logged and skipped.
    pub fn with_rules(rules: &[KeybindingRule]) -> Self {
        let mut keymap = Self::default();
        for rule in rules {
            let key = parse_keybinding(&rule.key);
            let direction = Direction::from_name(&rule.direction);
            match (key, direction) {
                (Some(key), Some(direction)) => keymap.bind(key, direction),
                _ => tracing::warn!(
                    key = %rule.key,
                    direction = %rule.direction,
                    "ignoring invalid keybinding"
                ),
            }
        }
        keymap
    }

    pub fn bind(&mut self, key: Key, direction: Direction) {
        self.bindings.insert(key, direction);
    }

    pub fn lookup(&self, key: &Key) -> Option<Direction> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Parse `ctrl+shift+x` style key notation. Uppercase letters imply shift.
pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "meta" | "cmd" => modifiers |= KeyModifiers::SUPER,
            _ => key_part = Some(part),
        }
    }
    let mut code = parse_key_code(key_part?)?;
    if let KeyCode::Char(ch) = code {
        if ch.is_ascii_uppercase() {
            code = KeyCode::Char(ch.to_ascii_lowercase());
            modifiers |= KeyModifiers::SHIFT;
        }
    }
    Some(Key::new(code, modifiers))
}

const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("enter", KeyCode::Enter),
    ("return", KeyCode::Enter),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("esc", KeyCode::Esc),
    ("escape", KeyCode::Esc),
    ("backspace", KeyCode::Backspace),
    ("delete", KeyCode::Delete),
    ("del", KeyCode::Delete),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
    ("space", KeyCode::Char(' ')),
];

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let lower = value.to_ascii_lowercase();
    if let Some((_, code)) = NAMED_KEYS.iter().find(|(name, _)| *name == lower) {
        return Some(*code);
    }
    if let Some(n) = lower.strip_prefix('f').filter(|rest| !rest.is_empty()) {
        return n.parse::<u8>().ok().map(KeyCode::F);
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(KeyCode::Char(ch)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/keymap.rs"]
mod tests;
