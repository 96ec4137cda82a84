use rustc_hash::FxHashMap;

use super::geom::{BoundingBox, Rect};
use super::id::{element_id, ElementId};
use super::layout::Insets;
use super::painter::Painter;

/// One resolved element as emitted by the layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderCommand {
    pub id: ElementId,
    pub bounding_box: BoundingBox,
}

impl RenderCommand {
    pub fn new(id: ElementId, bounding_box: BoundingBox) -> Self {
        Self { id, bounding_box }
    }
}

/// Per-frame element table.
///
/// Elements are declared in paint order. Their boxes are resolved as soon as
/// they are declared, so a widget can read back its container's size while
/// it is still building its children.
#[derive(Debug, Default)]
pub struct LayoutFrame {
    commands: Vec<RenderCommand>,
    resolved: FxHashMap<ElementId, BoundingBox>,
}

impl LayoutFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.resolved.clear();
    }

    pub fn declare(&mut self, key: &str, rect: Rect) -> ElementId {
        let id = element_id(key);
        self.push(RenderCommand::new(id, rect.into()));
        id
    }

    pub fn push(&mut self, command: RenderCommand) {
        self.resolved.entry(command.id).or_insert(command.bounding_box);
        self.commands.push(command);
    }

    pub fn element_data(&self, key: &str) -> Option<BoundingBox> {
        self.element_data_by_id(element_id(key))
    }

    pub fn element_data_by_id(&self, id: ElementId) -> Option<BoundingBox> {
        self.resolved.get(&id).copied()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

pub struct Ui<'a> {
    pub rect: Rect,
    pub painter: &'a mut Painter,
    pub layout: &'a mut LayoutFrame,
}

impl<'a> Ui<'a> {
    pub fn new(rect: Rect, painter: &'a mut Painter, layout: &'a mut LayoutFrame) -> Self {
        Self {
            rect,
            painter,
            layout,
        }
    }

    pub fn with_rect<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        let mut child = Ui {
            rect,
            painter: self.painter,
            layout: self.layout,
        };
        f(&mut child)
    }

    pub fn declare(&mut self, key: &str, rect: Rect) -> ElementId {
        self.layout.declare(key, rect)
    }

    pub fn inset(&mut self, insets: Insets) {
        self.rect = self.rect.inset(insets);
    }

    pub fn take_top(&mut self, h: u16) -> Rect {
        let (top, rest) = self.rect.split_top(h);
        self.rect = rest;
        top
    }

    pub fn take_bottom(&mut self, h: u16) -> Rect {
        let (rest, bottom) = self.rect.split_bottom(h);
        self.rect = rest;
        bottom
    }
}

pub trait Widget {
    fn ui(&mut self, ui: &mut Ui);
}

#[cfg(test)]
#[path = "../../../../tests/unit/ui/core/frame.rs"]
mod tests;
