use crate::ui::core::focus::Focusable;
use crate::ui::core::frame::{Ui, Widget};
use crate::ui::core::geom::Pos;
use crate::ui::core::input::Direction;
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::Style;
use crate::ui::core::theme::{Theme, Token};

use super::virtual_keyboard::{KeyPress, KeyboardOutcome, VirtualKeyboard};

#[derive(Clone, Copy, Debug)]
pub struct InputStyles {
    pub normal: Style,
    pub focused: Style,
    pub border: Style,
    pub focus_border: Style,
    pub placeholder: Style,
}

impl InputStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            normal: theme.style(Token::Control),
            focused: theme.style(Token::ControlFocused),
            border: theme.style(Token::Border),
            focus_border: theme.style(Token::FocusBorder),
            placeholder: theme.style(Token::Muted),
        }
    }
}

impl Default for InputStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

type TextCallback = Box<dyn FnMut(&str)>;

/// Single-line text field edited through an attached [`VirtualKeyboard`].
///
/// The cursor counts characters, not bytes.
pub struct InputText {
    id: String,
    text: String,
    placeholder: String,
    max_len: usize,
    cursor: usize,
    focused: bool,
    enabled: bool,
    keyboard: VirtualKeyboard,
    on_change: Option<TextCallback>,
    on_submit: Option<TextCallback>,
    styles: InputStyles,
}

impl InputText {
    pub fn new(id: impl Into<String>, placeholder: impl Into<String>, max_len: usize) -> Self {
        let id = id.into();
        let keyboard = VirtualKeyboard::new(format!("{}_keyboard", id));
        Self {
            id,
            text: String::new(),
            placeholder: placeholder.into(),
            max_len,
            cursor: 0,
            focused: false,
            enabled: true,
            keyboard,
            on_change: None,
            on_submit: None,
            styles: InputStyles::default(),
        }
    }

    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_submit(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    pub fn with_styles(mut self, styles: InputStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Replace the text, truncated to the max length, cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(self.max_len).collect();
        self.cursor = self.char_len();
        self.changed();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.changed();
    }

    /// Insert at the cursor, dropping whatever would exceed the max length.
    pub fn insert(&mut self, s: &str) -> bool {
        let room = self.max_len.saturating_sub(self.char_len());
        if room == 0 || s.is_empty() {
            return false;
        }
        let piece: String = s.chars().take(room).collect();
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, &piece);
        self.cursor += piece.chars().count();
        self.changed();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        self.changed();
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn open_keyboard(&mut self) {
        self.keyboard.show();
    }

    pub fn close_keyboard(&mut self) {
        self.keyboard.hide();
    }

    pub fn is_keyboard_visible(&self) -> bool {
        self.keyboard.is_visible()
    }

    pub fn keyboard(&self) -> &VirtualKeyboard {
        &self.keyboard
    }

    /// Render the keyboard panel (when open) inside `ui.rect`. Screens call
    /// this after everything else so the panel is painted on top.
    pub fn keyboard_ui(&mut self, ui: &mut Ui) {
        self.keyboard.ui(ui);
    }

    fn apply_key(&mut self, press: KeyPress) {
        match press {
            KeyPress::Char(s) => {
                self.insert(s);
            }
            KeyPress::Space => {
                self.insert(" ");
            }
            KeyPress::Backspace => {
                self.backspace();
            }
            KeyPress::Enter => {
                if let Some(f) = self.on_submit.as_mut() {
                    f(&self.text);
                }
                self.close_keyboard();
            }
            KeyPress::Cancel => self.close_keyboard(),
        }
    }

    fn changed(&mut self) {
        if let Some(f) = self.on_change.as_mut() {
            f(&self.text);
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn display_text(&self) -> String {
        if !self.focused {
            return self.text.clone();
        }
        let at = self.byte_offset(self.cursor);
        let mut out = String::with_capacity(self.text.len() + 1);
        out.push_str(&self.text[..at]);
        out.push('|');
        out.push_str(&self.text[at..]);
        out
    }
}

impl Focusable for InputText {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn on_focus_changed(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.close_keyboard();
        }
    }

    fn can_focus(&self) -> bool {
        self.enabled
    }

    fn handle_input(&mut self, direction: Direction) -> bool {
        match self.keyboard.handle_input(direction) {
            KeyboardOutcome::Handled => return true,
            KeyboardOutcome::Emit(press) => {
                self.apply_key(press);
                return true;
            }
            KeyboardOutcome::Ignored => {}
        }

        match direction {
            Direction::Confirm => {
                self.open_keyboard();
                true
            }
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Back => self.backspace(),
            Direction::Up | Direction::Down => false,
        }
    }
}

impl Widget for InputText {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }
        ui.declare(&self.id, rect);

        let (fill, border) = if self.focused {
            (self.styles.focused, self.styles.focus_border)
        } else {
            (self.styles.normal, self.styles.border)
        };
        ui.painter.fill_rect(rect, fill);
        ui.painter.border(rect, border, BorderKind::Rounded);

        let body = rect.inset(Insets::xy(2, 1));
        if body.is_empty() {
            return;
        }
        let pos = Pos::new(body.x, body.y);
        if self.text.is_empty() && !self.focused {
            let style = match self.styles.placeholder.fg {
                Some(fg) => fill.fg(fg),
                None => fill,
            };
            ui.painter.text_clipped(pos, self.placeholder.as_str(), style, body);
        } else {
            ui.painter.text_clipped(pos, self.display_text(), fill, body);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/input_text.rs"]
mod tests;
