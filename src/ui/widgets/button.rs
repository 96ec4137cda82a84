use crate::ui::core::focus::Focusable;
use crate::ui::core::frame::{Ui, Widget};
use crate::ui::core::input::Direction;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::Style;
use crate::ui::core::theme::{Theme, Token};

#[derive(Clone, Copy, Debug)]
pub struct ButtonStyles {
    pub normal: Style,
    pub focused: Style,
    pub disabled: Style,
    pub border: Style,
    pub focus_border: Style,
}

impl ButtonStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            normal: theme.style(Token::Control),
            focused: theme.style(Token::ControlFocused),
            disabled: theme.style(Token::ControlDisabled),
            border: theme.style(Token::Border),
            focus_border: theme.style(Token::FocusBorder),
        }
    }
}

impl Default for ButtonStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

pub struct Button {
    id: String,
    label: String,
    focused: bool,
    enabled: bool,
    on_click: Option<Box<dyn FnMut()>>,
    styles: ButtonStyles,
}

impl Button {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            focused: false,
            enabled: true,
            on_click: None,
            styles: ButtonStyles::default(),
        }
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn with_styles(mut self, styles: ButtonStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Fire the click callback. Disabled buttons do nothing.
    pub fn click(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        if let Some(f) = self.on_click.as_mut() {
            f();
        }
        true
    }
}

impl Focusable for Button {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn on_focus_changed(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn can_focus(&self) -> bool {
        self.enabled
    }

    fn handle_input(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Confirm => self.click(),
            _ => false,
        }
    }
}

impl Widget for Button {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }
        ui.declare(&self.id, rect);

        let (fill, border) = if !self.enabled {
            (self.styles.disabled, self.styles.border)
        } else if self.focused {
            (self.styles.focused, self.styles.focus_border)
        } else {
            (self.styles.normal, self.styles.border)
        };
        ui.painter.fill_rect(rect, fill);
        ui.painter.border(rect, border, BorderKind::Rounded);
        ui.painter.label_centered(rect, &self.label, fill);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/button.rs"]
mod tests;
