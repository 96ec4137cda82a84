//! Virtualized multi-select list.
//!
//! Only the rows inside the visible window are laid out each frame. The
//! window is derived from the measured container height, the scroll offset
//! and the focused row, and always contains the focused row while the list
//! holds focus.

use std::ops::Range;

use crate::services::config::ListConfig;
use crate::ui::core::focus::Focusable;
use crate::ui::core::frame::{Ui, Widget};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::input::Direction;
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::Style;
use crate::ui::core::theme::{Theme, Token};

#[derive(Clone, Debug, PartialEq)]
pub struct ListItem<T> {
    pub label: String,
    pub value: T,
    pub selected: bool,
}

impl<T> ListItem<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ListStyles {
    pub base: Style,
    pub border: Style,
    pub focus_border: Style,
    pub row: Style,
    pub row_focused: Style,
    pub row_selected: Style,
    pub indicator: Style,
    pub empty: Style,
}

impl ListStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            base: theme.style(Token::Surface),
            border: theme.style(Token::Border),
            focus_border: theme.style(Token::FocusBorder),
            row: theme.style(Token::Row),
            row_focused: theme.style(Token::RowFocused),
            row_selected: theme.style(Token::RowSelected),
            indicator: theme.style(Token::ScrollIndicator),
            empty: theme.style(Token::Muted),
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

pub struct CheckboxList<T> {
    id: String,
    items: Vec<ListItem<T>>,
    scroll_offset: usize,
    focused_index: Option<usize>,
    has_focus: bool,
    viewport_height: Option<f32>,
    config: ListConfig,
    styles: ListStyles,
}

impl<T> CheckboxList<T> {
    pub fn new(id: impl Into<String>, items: Vec<ListItem<T>>) -> Self {
        Self {
            id: id.into(),
            items,
            scroll_offset: 0,
            focused_index: None,
            has_focus: false,
            viewport_height: None,
            config: ListConfig::default(),
            styles: ListStyles::default(),
        }
    }

    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn items(&self) -> &[ListItem<T>] {
        &self.items
    }

    /// Replace the rows, keeping focus and scroll position inside the new bounds.
    pub fn set_items(&mut self, items: Vec<ListItem<T>>) {
        self.items = items;
        let n = self.items.len();
        self.focused_index = match self.focused_index {
            Some(_) if n == 0 => None,
            Some(f) => Some(f.min(n - 1)),
            None => None,
        };
        self.scroll_offset = self.scroll_offset.min(n.saturating_sub(1));
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Move the first visible row. Clamped on the next window computation.
    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    pub fn viewport_height(&self) -> Option<f32> {
        self.viewport_height
    }

    /// Record the container height measured by the layout pass.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = Some(height);
    }

    /// Number of rows that fit the measured viewport, or the configured
    /// fallback before the first measurement. Never less than one.
    pub fn max_visible(&self) -> usize {
        let Some(height) = self.viewport_height else {
            return self.config.fallback_rows.max(1);
        };
        let stride = self.config.row_stride();
        if stride <= 0.0 || !height.is_finite() {
            return self.config.fallback_rows.max(1);
        }
        ((height / stride).floor() as usize).max(1)
    }

    /// Half-open range of rows to lay out this frame. May move the scroll
    /// offset so the focused row stays visible.
    pub fn visible_window(&mut self) -> Range<usize> {
        let n = self.items.len();
        let k = self.max_visible();
        if n <= k {
            self.scroll_offset = 0;
            return 0..n;
        }

        self.scroll_offset = self.scroll_offset.min(n - k);
        let mut window = window_at(self.scroll_offset, k, n);

        if self.has_focus {
            if let Some(f) = self.focused_index {
                if !window.contains(&f) {
                    self.scroll_offset = if f < window.start {
                        f
                    } else {
                        (f + 1).saturating_sub(k)
                    };
                    window = window_at(self.scroll_offset, k, n);
                }
            }
        }

        if window.end < n && window.len() < k {
            self.scroll_offset = n - k;
            window = window_at(self.scroll_offset, k, n);
        }
        window
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        item.selected = !item.selected;
        true
    }

    pub fn selected_items(&self) -> Vec<&ListItem<T>> {
        self.items.iter().filter(|i| i.selected).collect()
    }

    pub fn selected_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.value.clone())
            .collect()
    }

    fn move_up(&mut self) -> bool {
        let Some(f) = self.focused_index else {
            return self.seed_focused_row();
        };
        if f == 0 {
            return false;
        }
        let f = f - 1;
        self.focused_index = Some(f);
        if f < self.scroll_offset {
            self.scroll_offset = f;
        }
        true
    }

    fn move_down(&mut self) -> bool {
        let Some(f) = self.focused_index else {
            return self.seed_focused_row();
        };
        if f + 1 >= self.items.len() {
            return false;
        }
        let f = f + 1;
        self.focused_index = Some(f);
        let k = self.max_visible();
        if f >= self.scroll_offset + k {
            self.scroll_offset = f + 1 - k;
        }
        true
    }

    fn seed_focused_row(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.focused_index = Some(self.scroll_offset.min(self.items.len() - 1));
        true
    }

    fn row_rect(&self, inner: Rect, slot: usize) -> Rect {
        let top = (slot as f32 * self.config.row_stride()).floor() as u16;
        let h = self.config.item_height.ceil().max(1.0) as u16;
        let y = inner.y.saturating_add(top);
        Rect::new(inner.x, y, inner.w, h).intersect(inner)
    }
}

fn window_at(start: usize, k: usize, n: usize) -> Range<usize> {
    start..(start + k).min(n)
}

impl<T> Focusable for CheckboxList<T> {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_focused(&self) -> bool {
        self.has_focus
    }

    fn on_focus_changed(&mut self, focused: bool) {
        self.has_focus = focused;
        if focused && self.focused_index.is_none() {
            self.seed_focused_row();
        }
    }

    fn can_focus(&self) -> bool {
        !self.items.is_empty()
    }

    fn handle_input(&mut self, direction: Direction) -> bool {
        if !self.has_focus || self.items.is_empty() {
            return false;
        }
        match direction {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Confirm => {
                if let Some(f) = self.focused_index {
                    self.toggle(f);
                }
                true
            }
            Direction::Left | Direction::Right | Direction::Back => false,
        }
    }
}

impl<T> Widget for CheckboxList<T> {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }
        ui.declare(&self.id, rect);

        let border = if self.has_focus {
            self.styles.focus_border
        } else {
            self.styles.border
        };
        ui.painter.fill_rect(rect, self.styles.base);
        ui.painter.border(rect, border, BorderKind::Plain);

        // Rows live inside the border, left of the indicator column.
        let body = rect.inset(Insets::all(1));
        let rows_key = format!("{}-rows", self.id);
        let rows_area = Rect::new(body.x, body.y, body.w.saturating_sub(1), body.h);
        ui.declare(&rows_key, rows_area);
        if let Some(bounds) = ui.layout.element_data(&rows_key) {
            self.set_viewport_height(bounds.height);
        }

        if self.items.is_empty() {
            ui.painter
                .text_clipped(Pos::new(body.x, body.y), "(empty)", self.styles.empty, body);
            return;
        }

        let window = self.visible_window();
        for (slot, index) in window.clone().enumerate() {
            let row = self.row_rect(rows_area, slot);
            if row.is_empty() {
                break;
            }
            ui.declare(&format!("{}-item-{}", self.id, index), row);

            let item = &self.items[index];
            let focused_row = self.has_focus && self.focused_index == Some(index);
            let style = if focused_row {
                self.styles.row_focused
            } else if item.selected {
                self.styles.row_selected
            } else {
                self.styles.row
            };
            ui.painter.fill_rect(row, style);
            let mark = if item.selected { "[x]" } else { "[ ]" };
            ui.painter.text_clipped(
                Pos::new(row.x, row.y),
                format!("{} {}", mark, item.label),
                style,
                row,
            );
        }

        let indicator_x = body.right().saturating_sub(1);
        if window.start > 0 {
            ui.painter
                .text(Pos::new(indicator_x, body.y), "▲", self.styles.indicator);
        }
        if window.end < self.items.len() && body.h > 0 {
            ui.painter.text(
                Pos::new(indicator_x, body.bottom() - 1),
                "▼",
                self.styles.indicator,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/checkbox_list.rs"]
mod tests;
