//! Spatial focus navigation.
//!
//! Widgets register once; every frame the render commands are fed back in
//! through [`SpatialNavigation::update_layout`] so directional input can pick
//! the nearest focusable element on screen.

use std::rc::Rc;

use crate::services::config::NavConfig;

use super::focus::{FocusHandle, FocusRegistry};
use super::frame::RenderCommand;
use super::input::Direction;
use super::tree::{ElementPosition, SpatialIndex};

pub struct SpatialNavigation {
    registry: FocusRegistry,
    index: SpatialIndex,
    current_focus: Option<String>,
    enabled: bool,
    config: NavConfig,
}

impl Default for SpatialNavigation {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialNavigation {
    pub fn new() -> Self {
        Self::with_config(NavConfig::default())
    }

    pub fn with_config(config: NavConfig) -> Self {
        Self {
            registry: FocusRegistry::new(),
            index: SpatialIndex::new(),
            current_focus: None,
            enabled: true,
            config,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Add a widget, replacing any earlier one with the same id. Replacing
    /// the focused widget hands focus over to the new one, or drops it if
    /// the new one refuses focus.
    pub fn register_focusable(&mut self, widget: FocusHandle) {
        let id = widget.borrow().id().to_string();
        let Some(previous) = self.registry.register(widget.clone()) else {
            return;
        };
        if Rc::ptr_eq(&previous, &widget) {
            return;
        }
        tracing::debug!(id = %id, "focusable re-registered");
        if self.current_focus.as_deref() != Some(id.as_str()) {
            return;
        }

        previous.borrow_mut().on_focus_changed(false);
        if widget.borrow().can_focus() {
            widget.borrow_mut().on_focus_changed(true);
        } else {
            tracing::debug!(id = %id, "replacement refuses focus, clearing");
            self.current_focus = None;
        }
    }

    /// Forget a widget. If it held focus, it is told so and focus is cleared.
    pub fn unregister_focusable(&mut self, id: &str) {
        let Some(widget) = self.registry.unregister(id) else {
            return;
        };
        self.index.remove(id);
        tracing::debug!(id = %id, "focusable unregistered");
        if self.current_focus.as_deref() == Some(id) {
            self.current_focus = None;
            widget.borrow_mut().on_focus_changed(false);
        }
    }

    /// Rebuild the spatial index from this frame's render commands.
    pub fn update_layout(&mut self, commands: &[RenderCommand]) {
        let found = self.index.rebuild(commands, &self.registry);
        tracing::trace!(
            commands = commands.len(),
            focusable = found,
            "spatial index rebuilt"
        );
    }

    /// Route one input. Returns `true` if it changed focus or was consumed
    /// by the focused widget.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        if !self.enabled {
            return false;
        }

        let Some(current) = self.current_element().cloned() else {
            if let Some(stale) = self.current_focus.as_deref() {
                tracing::debug!(id = %stale, "focused widget not laid out, reseeding");
            }
            return self.focus_first();
        };

        // The registry handle wins over the indexed one, which can be a
        // replaced widget until the next layout pass.
        let widget = self
            .current_widget()
            .unwrap_or_else(|| current.widget.clone());
        if widget.borrow_mut().handle_input(direction) {
            return true;
        }

        if !direction.is_directional() {
            return false;
        }

        let next = self
            .index
            .find_best_candidate(&current, direction, self.config.alignment_weight)
            .map(|e| e.id.clone());
        match next {
            Some(id) => self.set_focus(&id),
            None => false,
        }
    }

    pub fn set_focus(&mut self, id: &str) -> bool {
        let Some(widget) = self.registry.get(id).cloned() else {
            tracing::debug!(id = %id, "set_focus on unknown widget");
            return false;
        };
        if !widget.borrow().can_focus() {
            tracing::debug!(id = %id, "set_focus on widget that refuses focus");
            return false;
        }
        if self.current_focus.as_deref() == Some(id) {
            return true;
        }

        if let Some(previous) = self.current_widget() {
            previous.borrow_mut().on_focus_changed(false);
        }
        self.current_focus = Some(id.to_string());
        widget.borrow_mut().on_focus_changed(true);
        tracing::debug!(id = %id, "focus changed");
        true
    }

    /// Focus the first focusable element of the last laid out frame.
    pub fn focus_first(&mut self) -> bool {
        let Some(id) = self.index.first_focusable().map(|e| e.id.clone()) else {
            tracing::debug!(elements = self.index.len(), "nothing to focus");
            return false;
        };
        self.set_focus(&id)
    }

    pub fn current_focus(&self) -> Option<&str> {
        self.current_focus.as_deref()
    }

    pub fn current_widget(&self) -> Option<FocusHandle> {
        let id = self.current_focus.as_deref()?;
        self.registry.get(id).cloned()
    }

    /// The focused widget's entry in the spatial index, if it was laid out
    /// in the last frame.
    pub fn current_element(&self) -> Option<&ElementPosition> {
        let id = self.current_focus.as_deref()?;
        self.index.get(id)
    }

    /// Disabling drops the current focus and tells its holder.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            return;
        }
        if let Some(widget) = self.current_widget() {
            widget.borrow_mut().on_focus_changed(false);
        }
        self.current_focus = None;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Drop focus, registrations and the spatial index. No widget is notified.
    pub fn clear(&mut self) {
        self.current_focus = None;
        self.registry.clear();
        self.index.clear();
    }

    pub fn element_count(&self) -> usize {
        self.index.len()
    }

    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    pub fn debug_elements(&self) {
        tracing::debug!(
            focused = ?self.current_focus,
            count = self.index.len(),
            "navigation elements"
        );
        for element in self.index.elements() {
            let center = element.bounding_box.center();
            tracing::debug!(
                id = %element.id,
                element = %element.element,
                x = element.bounding_box.x,
                y = element.bounding_box.y,
                w = element.bounding_box.width,
                h = element.bounding_box.height,
                cx = center.x,
                cy = center.y,
                "navigation element"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/navigation.rs"]
mod tests;
