//! On-screen keyboard driven entirely by navigation inputs.

use unicode_width::UnicodeWidthStr;

use crate::ui::core::frame::{Ui, Widget};
use crate::ui::core::geom::Rect;
use crate::ui::core::input::Direction;
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::Style;
use crate::ui::core::theme::{Theme, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Character,
    Backspace,
    Space,
    Enter,
    Cancel,
    Shift,
    Symbols,
}

#[derive(Clone, Copy, Debug)]
pub struct KeyDef {
    pub display: &'static str,
    pub value: &'static str,
    pub symbol: Option<&'static str>,
    pub action: KeyAction,
}

const fn ch(display: &'static str, value: &'static str) -> KeyDef {
    KeyDef {
        display,
        value,
        symbol: None,
        action: KeyAction::Character,
    }
}

const fn sym(display: &'static str, symbol: &'static str) -> KeyDef {
    KeyDef {
        display,
        value: display,
        symbol: Some(symbol),
        action: KeyAction::Character,
    }
}

const fn action(display: &'static str, action: KeyAction) -> KeyDef {
    KeyDef {
        display,
        value: "",
        symbol: None,
        action,
    }
}

pub const LAYOUT: &[&[KeyDef]] = &[
    &[
        sym("1", "!"),
        sym("2", "@"),
        sym("3", "#"),
        sym("4", "$"),
        sym("5", "%"),
        sym("6", "¨"),
        sym("7", "&"),
        sym("8", "*"),
        sym("9", "("),
        sym("0", ")"),
        sym("-", "_"),
        sym("=", "+"),
    ],
    &[
        ch("Q", "q"),
        ch("W", "w"),
        ch("E", "e"),
        ch("R", "r"),
        ch("T", "t"),
        ch("Y", "y"),
        ch("U", "u"),
        ch("I", "i"),
        ch("O", "o"),
        ch("P", "p"),
        sym("[", "{"),
        sym("]", "}"),
        sym("\\", "|"),
    ],
    &[
        ch("A", "a"),
        ch("S", "s"),
        ch("D", "d"),
        ch("F", "f"),
        ch("G", "g"),
        ch("H", "h"),
        ch("J", "j"),
        ch("K", "k"),
        ch("L", "l"),
        sym(";", ":"),
    ],
    &[
        ch("Z", "z"),
        ch("X", "x"),
        ch("C", "c"),
        ch("V", "v"),
        ch("B", "b"),
        ch("N", "n"),
        ch("M", "m"),
        sym(",", "<"),
        sym(".", ">"),
        sym("/", "?"),
    ],
    &[
        action("Shift", KeyAction::Shift),
        action("Sym", KeyAction::Symbols),
        action("Space", KeyAction::Space),
        action("Back", KeyAction::Backspace),
        action("Enter", KeyAction::Enter),
        action("Cancel", KeyAction::Cancel),
    ],
];

/// What an activated key asks the owning text field to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Char(&'static str),
    Space,
    Backspace,
    Enter,
    Cancel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyboardOutcome {
    /// Keyboard hidden; the input was not looked at.
    Ignored,
    /// Consumed with no output (cursor moved, mode toggled).
    Handled,
    Emit(KeyPress),
}

#[derive(Clone, Copy, Debug)]
pub struct KeyboardStyles {
    pub panel: Style,
    pub border: Style,
    pub key: Style,
    pub key_focused: Style,
}

impl KeyboardStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            panel: theme.style(Token::Surface),
            border: theme.style(Token::FocusBorder),
            key: theme.style(Token::Key),
            key_focused: theme.style(Token::KeyFocused),
        }
    }
}

impl Default for KeyboardStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

pub struct VirtualKeyboard {
    id: String,
    visible: bool,
    row: usize,
    col: usize,
    upper_case: bool,
    symbols: bool,
    styles: KeyboardStyles,
}

impl VirtualKeyboard {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: false,
            row: 0,
            col: 0,
            upper_case: false,
            symbols: false,
            styles: KeyboardStyles::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Show the keyboard with the cursor on the first key.
    pub fn show(&mut self) {
        self.visible = true;
        self.row = 0;
        self.col = 0;
        tracing::debug!(id = %self.id, "keyboard shown");
    }

    pub fn hide(&mut self) {
        if self.visible {
            tracing::debug!(id = %self.id, "keyboard hidden");
        }
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_upper_case(&self) -> bool {
        self.upper_case
    }

    pub fn is_symbols(&self) -> bool {
        self.symbols
    }

    pub fn current_key(&self) -> Option<&'static KeyDef> {
        LAYOUT.get(self.row)?.get(self.col)
    }

    pub fn handle_input(&mut self, direction: Direction) -> KeyboardOutcome {
        if !self.visible {
            return KeyboardOutcome::Ignored;
        }
        match direction {
            Direction::Up => {
                if self.row > 0 {
                    self.row -= 1;
                    self.clamp_col();
                }
                KeyboardOutcome::Handled
            }
            Direction::Down => {
                if self.row + 1 < LAYOUT.len() {
                    self.row += 1;
                    self.clamp_col();
                }
                KeyboardOutcome::Handled
            }
            Direction::Left => {
                let len = LAYOUT[self.row].len();
                self.col = if self.col == 0 { len - 1 } else { self.col - 1 };
                KeyboardOutcome::Handled
            }
            Direction::Right => {
                let len = LAYOUT[self.row].len();
                self.col = if self.col + 1 >= len { 0 } else { self.col + 1 };
                KeyboardOutcome::Handled
            }
            Direction::Confirm => self.activate(),
            Direction::Back => KeyboardOutcome::Emit(KeyPress::Cancel),
        }
    }

    fn clamp_col(&mut self) {
        let len = LAYOUT[self.row].len();
        if self.col >= len {
            self.col = len - 1;
        }
    }

    fn activate(&mut self) -> KeyboardOutcome {
        let Some(key) = self.current_key() else {
            return KeyboardOutcome::Handled;
        };
        tracing::trace!(key = key.display, "keyboard key activated");
        let press = match key.action {
            KeyAction::Character => KeyPress::Char(self.key_value(key)),
            KeyAction::Shift => {
                self.upper_case = !self.upper_case;
                return KeyboardOutcome::Handled;
            }
            KeyAction::Symbols => {
                self.symbols = !self.symbols;
                return KeyboardOutcome::Handled;
            }
            KeyAction::Space => KeyPress::Space,
            KeyAction::Backspace => KeyPress::Backspace,
            KeyAction::Enter => KeyPress::Enter,
            KeyAction::Cancel => KeyPress::Cancel,
        };
        KeyboardOutcome::Emit(press)
    }

    /// Text a character key produces (and shows) in the current mode.
    fn key_value(&self, key: &KeyDef) -> &'static str {
        match key.symbol {
            Some(symbol) if self.symbols => symbol,
            _ if self.upper_case => key.display,
            _ => key.value,
        }
    }

    fn key_label(&self, key: &KeyDef) -> &'static str {
        match key.action {
            KeyAction::Character => self.key_value(key),
            _ => key.display,
        }
    }

    /// Cells needed to draw the keyboard panel, border included.
    pub fn preferred_size(&self) -> (u16, u16) {
        let width = LAYOUT
            .iter()
            .map(|row| self.row_width(row))
            .max()
            .unwrap_or(0);
        let height = LAYOUT.len() as u16;
        (width.saturating_add(4), height.saturating_add(2))
    }

    fn row_width(&self, row: &[KeyDef]) -> u16 {
        let keys: usize = row
            .iter()
            .map(|k| self.key_label(k).width() + 2)
            .sum();
        let gaps = row.len().saturating_sub(1);
        u16::try_from(keys + gaps).unwrap_or(u16::MAX)
    }
}

impl Widget for VirtualKeyboard {
    fn ui(&mut self, ui: &mut Ui) {
        if !self.visible || ui.rect.is_empty() {
            return;
        }
        let (w, h) = self.preferred_size();
        let panel = ui.rect.centered(w, h);
        ui.declare(&format!("{}_container", self.id), panel);
        ui.painter.fill_rect(panel, self.styles.panel);
        ui.painter.border(panel, self.styles.border, BorderKind::Rounded);

        let body = panel.inset(Insets::xy(2, 1));
        for (r, row) in LAYOUT.iter().enumerate() {
            let y = body.y.saturating_add(r as u16);
            if y >= body.bottom() {
                break;
            }
            let row_w = self.row_width(row).min(body.w);
            let mut x = body.x + (body.w - row_w) / 2;
            for (c, key) in row.iter().enumerate() {
                let label = self.key_label(key);
                let key_w = u16::try_from(label.width() + 2).unwrap_or(u16::MAX);
                let rect = Rect::new(x, y, key_w, 1).intersect(body);
                if rect.is_empty() {
                    break;
                }
                ui.declare(&format!("{}_key_{}_{}", self.id, r, c), rect);

                let latched = (key.action == KeyAction::Shift && self.upper_case)
                    || (key.action == KeyAction::Symbols && self.symbols);
                let style = if (r, c) == (self.row, self.col) || latched {
                    self.styles.key_focused
                } else {
                    self.styles.key
                };
                ui.painter.fill_rect(rect, style);
                ui.painter.label_centered(rect, label, style);
                x = x.saturating_add(key_w).saturating_add(1);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/virtual_keyboard.rs"]
mod tests;
