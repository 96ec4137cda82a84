use crate::ui::core::style::{Color, Mod, Style};

/// Semantic theme tokens for the navigation widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Surface,
    Title,
    Border,
    FocusBorder,
    Control,
    ControlFocused,
    ControlDisabled,
    Row,
    RowFocused,
    RowSelected,
    ScrollIndicator,
    Muted,
    Status,
    Key,
    KeyFocused,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub surface_bg: Color,
    pub surface_fg: Color,
    pub title_fg: Color,
    pub border: Color,
    pub focus_border: Color,
    pub control_bg: Color,
    pub control_fg: Color,
    pub focus_bg: Color,
    pub focus_fg: Color,
    pub disabled_fg: Color,
    pub selected_fg: Color,
    pub muted_fg: Color,
    pub accent_fg: Color,
}

impl Theme {
    pub fn style(&self, token: Token) -> Style {
        let base = Style::plain().bg(self.surface_bg).fg(self.surface_fg);
        match token {
            Token::Surface => base,
            Token::Title => base.fg(self.title_fg).add_mod(Mod::BOLD),
            Token::Border => base.fg(self.border),
            Token::FocusBorder => base.fg(self.focus_border).add_mod(Mod::BOLD),
            Token::Control => base.bg(self.control_bg).fg(self.control_fg),
            Token::ControlFocused => base
                .bg(self.focus_bg)
                .fg(self.focus_fg)
                .add_mod(Mod::BOLD),
            Token::ControlDisabled => base.bg(self.control_bg).fg(self.disabled_fg),
            Token::Row => base,
            Token::RowFocused => base.bg(self.focus_bg).fg(self.focus_fg),
            Token::RowSelected => base.fg(self.selected_fg),
            Token::ScrollIndicator => base.fg(self.accent_fg),
            Token::Muted => base.fg(self.muted_fg),
            Token::Status => base.fg(self.accent_fg),
            Token::Key => base.bg(self.control_bg).fg(self.control_fg),
            Token::KeyFocused => base
                .bg(self.focus_bg)
                .fg(self.focus_fg)
                .add_mod(Mod::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_bg: Color::Reset,
            surface_fg: Color::Indexed(15), // White
            title_fg: Color::Indexed(6),    // Cyan
            border: Color::Indexed(8),      // DarkGray
            focus_border: Color::Indexed(6),
            control_bg: Color::Indexed(236),
            control_fg: Color::Indexed(15),
            focus_bg: Color::Indexed(24),
            focus_fg: Color::Indexed(15),
            disabled_fg: Color::Indexed(8),
            selected_fg: Color::Indexed(2), // Green
            muted_fg: Color::Indexed(8),
            accent_fg: Color::Indexed(3), // Yellow
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/theme.rs"]
mod tests;
