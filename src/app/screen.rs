use std::cell::Cell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::ui::core::frame::{RenderCommand, Ui};
use crate::ui::core::input::Direction;
use crate::ui::core::navigation::SpatialNavigation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenRequest {
    Switch(&'static str),
    Quit,
}

/// Mailbox shared between a screen and the callbacks of its widgets.
///
/// Callbacks run while the screen is borrowed, so they post a request here and
/// the app applies it once input handling returns. A later post replaces an
/// earlier one.
#[derive(Clone, Debug, Default)]
pub struct RequestSlot(Rc<Cell<Option<ScreenRequest>>>);

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, request: ScreenRequest) {
        self.0.set(Some(request));
    }

    pub fn take(&self) -> Option<ScreenRequest> {
        self.0.take()
    }
}

/// One page of the application. Each screen owns its navigation engine.
pub trait Screen {
    fn name(&self) -> &'static str;

    fn navigation(&mut self) -> &mut SpatialNavigation;

    fn render(&mut self, ui: &mut Ui);

    fn take_request(&mut self) -> Option<ScreenRequest>;

    fn on_enter(&mut self) {}

    fn on_exit(&mut self) {}

    fn handle_input(&mut self, direction: Direction) -> bool {
        self.navigation().handle_input(direction)
    }

    fn update_layout(&mut self, commands: &[RenderCommand]) {
        self.navigation().update_layout(commands);
    }
}

/// Named screens with a single active one.
#[derive(Default)]
pub struct ScreenManager {
    screens: FxHashMap<&'static str, Box<dyn Screen>>,
    current: Option<&'static str>,
}

impl ScreenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a screen under its own name, replacing any screen of that name.
    pub fn add(&mut self, screen: Box<dyn Screen>) {
        let name = screen.name();
        if self.screens.insert(name, screen).is_some() {
            tracing::debug!(screen = name, "screen replaced");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.screens.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Make `name` the active screen. The outgoing screen gets `on_exit`, the
    /// incoming one `on_enter`, even when they are the same screen.
    pub fn switch_to(&mut self, name: &str) -> bool {
        let Some(next) = self.screens.get(name).map(|s| s.name()) else {
            tracing::warn!(screen = name, "unknown screen");
            return false;
        };
        if let Some(screen) = self.current_mut() {
            screen.on_exit();
        }
        self.current = Some(next);
        if let Some(screen) = self.current_mut() {
            screen.on_enter();
        }
        tracing::info!(screen = next, "screen switched");
        true
    }

    pub fn current_name(&self) -> Option<&'static str> {
        self.current
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        let name = self.current?;
        self.screens.get_mut(name).map(|s| s.as_mut())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Screen + 'static)> {
        self.screens.get_mut(name).map(|s| s.as_mut())
    }

    pub fn handle_input(&mut self, direction: Direction) -> bool {
        match self.current_mut() {
            Some(screen) => screen.handle_input(direction),
            None => false,
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        if let Some(screen) = self.current_mut() {
            screen.render(ui);
        }
    }

    pub fn update_layout(&mut self, commands: &[RenderCommand]) {
        if let Some(screen) = self.current_mut() {
            screen.update_layout(commands);
        }
    }

    pub fn take_request(&mut self) -> Option<ScreenRequest> {
        self.current_mut()?.take_request()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/screen.rs"]
mod tests;
