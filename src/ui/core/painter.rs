use unicode_width::UnicodeWidthStr;

use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
    Rounded,
}

/// One draw operation. Backends apply them in list order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    FillRect {
        rect: Rect,
        style: Style,
    },
    /// Single-line text run starting at `pos`, cut at `clip` (or the backend
    /// bounds when unset).
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Option<Rect>,
    },
    Border {
        rect: Rect,
        style: Style,
        kind: BorderKind,
    },
}

/// Draw list for one frame. Widgets append, the app hands it to a backend.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        if !rect.is_empty() {
            self.cmds.push(PaintCmd::FillRect { rect, style });
        }
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.push_text(pos, text.into(), style, None);
    }

    pub fn text_clipped(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.push_text(pos, text.into(), style, Some(clip));
    }

    /// Single-line label centred in `rect`, clipped to it.
    pub fn label_centered(&mut self, rect: Rect, text: &str, style: Style) {
        if rect.is_empty() {
            return;
        }
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX).min(rect.w);
        let pos = Pos::new(
            rect.x + (rect.w - width) / 2,
            rect.y + rect.h.saturating_sub(1) / 2,
        );
        self.text_clipped(pos, text, style, rect);
    }

    /// Box outline around `rect`. Needs at least 2x2 cells.
    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        if rect.w >= 2 && rect.h >= 2 {
            self.cmds.push(PaintCmd::Border { rect, style, kind });
        }
    }

    fn push_text(&mut self, pos: Pos, text: String, style: Style, clip: Option<Rect>) {
        if !text.is_empty() {
            self.cmds.push(PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
