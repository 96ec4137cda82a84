//! Demo application: two screens driven by spatial navigation.
//!
//! Each frame drains queued inputs into the active screen, lays the screen
//! out and paints it, then feeds the frame's render commands back to the
//! screen's navigation engine.

mod home;
mod screen;
mod second;

pub use home::{
    HomeScreen, EXIT_BUTTON_ID, HOME_SCREEN, LIST_ID, NEXT_BUTTON_ID, SHOW_SELECTED_BUTTON_ID,
};
pub use screen::{RequestSlot, Screen, ScreenManager, ScreenRequest};
pub use second::{
    SecondScreen, BACK_BUTTON_ID, NAME_INPUT_ID, OPTIONS_BUTTON_ID, QUIT_BUTTON_ID, SECOND_SCREEN,
};

use crate::services::settings::Settings;
use crate::ui::backend::Backend;
use crate::ui::core::frame::{LayoutFrame, Ui};
use crate::ui::core::geom::Rect;
use crate::ui::core::input::Direction;
use crate::ui::core::painter::Painter;

pub struct App {
    screens: ScreenManager,
    painter: Painter,
    layout: LayoutFrame,
    running: bool,
}

impl App {
    /// The demo: home and second screen, starting on home.
    pub fn new(settings: &Settings) -> Self {
        let mut screens = ScreenManager::new();
        screens.add(Box::new(HomeScreen::new(settings)));
        screens.add(Box::new(SecondScreen::new(settings)));
        screens.switch_to(HOME_SCREEN);
        Self::with_screens(screens)
    }

    pub fn with_screens(screens: ScreenManager) -> Self {
        Self {
            screens,
            painter: Painter::new(),
            layout: LayoutFrame::new(),
            running: true,
        }
    }

    pub fn screens(&self) -> &ScreenManager {
        &self.screens
    }

    pub fn screens_mut(&mut self) -> &mut ScreenManager {
        &mut self.screens
    }

    pub fn current_screen(&self) -> Option<&'static str> {
        self.screens.current_name()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        if self.running {
            tracing::info!("quit requested");
        }
        self.running = false;
    }

    /// Route one input to the active screen, then apply whatever the screen
    /// asked for while handling it.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        let handled = self.screens.handle_input(direction);
        self.apply_requests();
        handled
    }

    /// Lay out and paint the active screen, then hand the frame's render
    /// commands to its navigation engine.
    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        self.painter.clear();
        self.layout.clear();
        {
            let mut ui = Ui::new(area, &mut self.painter, &mut self.layout);
            self.screens.render(&mut ui);
        }
        backend.draw(area, self.painter.cmds());
        self.screens.update_layout(self.layout.commands());
    }

    /// Render commands of the last frame.
    pub fn layout(&self) -> &LayoutFrame {
        &self.layout
    }

    fn apply_requests(&mut self) {
        while let Some(request) = self.screens.take_request() {
            match request {
                ScreenRequest::Switch(name) => {
                    self.screens.switch_to(name);
                }
                ScreenRequest::Quit => {
                    self.quit();
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/mod.rs"]
mod tests;
