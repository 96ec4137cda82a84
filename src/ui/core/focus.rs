//! Focusable widget contract and the persistent focus registry.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::id::{element_id, ElementId};
use super::input::Direction;

/// A widget that can take part in spatial navigation.
pub trait Focusable {
    /// Stable string id; the same key the widget declares its layout element with.
    fn id(&self) -> &str;

    fn is_focused(&self) -> bool;

    fn on_focus_changed(&mut self, focused: bool);

    fn can_focus(&self) -> bool;

    /// Offered every input while focused. Return `true` to consume it.
    fn handle_input(&mut self, direction: Direction) -> bool;
}

/// Shared handle to a focusable widget. The owner screen keeps its own typed
/// `Rc` and hands a clone to the navigation engine.
pub type FocusHandle = Rc<RefCell<dyn Focusable>>;

struct Entry {
    widget: FocusHandle,
    element: ElementId,
}

/// Widgets known to the engine, keyed by string id, with a reverse map from
/// hashed element id so render commands resolve in O(1).
#[derive(Default)]
pub struct FocusRegistry {
    entries: FxHashMap<String, Entry>,
    by_element: FxHashMap<ElementId, String>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `widget` under its own id, replacing any earlier registration
    /// of that id. Returns the replaced widget.
    pub fn register(&mut self, widget: FocusHandle) -> Option<FocusHandle> {
        let id = widget.borrow().id().to_string();
        let element = element_id(&id);

        if let Some(other) = self.by_element.get(&element) {
            if *other != id {
                tracing::warn!(
                    id = %id,
                    other = %other,
                    element = %element,
                    "focusable ids hash to the same element id"
                );
            }
        }

        self.by_element.insert(element, id.clone());
        self.entries
            .insert(id, Entry { widget, element })
            .map(|old| old.widget)
    }

    pub fn unregister(&mut self, id: &str) -> Option<FocusHandle> {
        let entry = self.entries.remove(id)?;
        if self.by_element.get(&entry.element).map(String::as_str) == Some(id) {
            self.by_element.remove(&entry.element);
        }
        Some(entry.widget)
    }

    pub fn get(&self, id: &str) -> Option<&FocusHandle> {
        self.entries.get(id).map(|e| &e.widget)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Map a render command's element id back to a registered widget.
    pub fn resolve(&self, element: ElementId) -> Option<(&str, &FocusHandle)> {
        let id = self.by_element.get(&element)?;
        let entry = self.entries.get(id)?;
        Some((id.as_str(), &entry.widget))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_element.clear();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/focus.rs"]
mod tests;
