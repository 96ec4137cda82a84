use super::focus::{FocusHandle, FocusRegistry};
use super::frame::RenderCommand;
use super::geom::BoundingBox;
use super::id::ElementId;
use super::input::Direction;

/// A focusable widget as laid out in the last frame.
#[derive(Clone)]
pub struct ElementPosition {
    pub id: String,
    pub element: ElementId,
    pub bounding_box: BoundingBox,
    pub widget: FocusHandle,
}

impl ElementPosition {
    fn can_focus(&self) -> bool {
        self.widget
            .try_borrow()
            .map(|w| w.can_focus())
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for ElementPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementPosition")
            .field("id", &self.id)
            .field("element", &self.element)
            .field("bounding_box", &self.bounding_box)
            .finish_non_exhaustive()
    }
}

/// Spatial snapshot of the focusable elements in one frame, in render order.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    elements: Vec<ElementPosition>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn elements(&self) -> &[ElementPosition] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&ElementPosition> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Append an element unless its id is already indexed this frame.
    pub fn push(&mut self, element: ElementPosition) -> bool {
        if self.get(&element.id).is_some() {
            return false;
        }
        self.elements.push(element);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<ElementPosition> {
        let index = self.position(id)?;
        Some(self.elements.remove(index))
    }

    /// Replace the snapshot with the registered widgets found in `commands`.
    /// Commands for unregistered elements are skipped.
    pub fn rebuild(&mut self, commands: &[RenderCommand], registry: &FocusRegistry) -> usize {
        self.elements.clear();
        for command in commands {
            let Some((id, widget)) = registry.resolve(command.id) else {
                tracing::trace!(element = %command.id, "no focusable for element");
                continue;
            };
            self.push(ElementPosition {
                id: id.to_string(),
                element: command.id,
                bounding_box: command.bounding_box,
                widget: widget.clone(),
            });
        }
        self.elements.len()
    }

    pub fn first_focusable(&self) -> Option<&ElementPosition> {
        self.elements.iter().find(|e| e.can_focus())
    }

    /// Nearest focusable element strictly on the `direction` side of `from`.
    ///
    /// Candidates are scored by centre distance plus `alignment_weight` times
    /// the offset across the travel axis. Ties keep the earliest element.
    pub fn find_best_candidate(
        &self,
        from: &ElementPosition,
        direction: Direction,
        alignment_weight: f32,
    ) -> Option<&ElementPosition> {
        let (dx, dy) = direction.vector()?;
        let origin = from.bounding_box.center();

        let mut best: Option<(&ElementPosition, f32)> = None;
        for candidate in &self.elements {
            if candidate.id == from.id {
                continue;
            }
            let center = candidate.bounding_box.center();
            let off_x = center.x - origin.x;
            let off_y = center.y - origin.y;

            let along = off_x * dx + off_y * dy;
            if along <= 0.0 {
                continue;
            }
            if !candidate.can_focus() {
                continue;
            }

            let across = (off_x * dy - off_y * dx).abs();
            let score = origin.distance(center) + alignment_weight * across;
            if best.map_or(true, |(_, s)| score < s) {
                best = Some((candidate, score));
            }
        }
        best.map(|(e, _)| e)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/ui/core/tree.rs"]
mod tests;
