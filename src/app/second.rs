use std::cell::RefCell;
use std::rc::Rc;

use crate::services::settings::Settings;
use crate::ui::core::frame::{Ui, Widget};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::input::Direction;
use crate::ui::core::layout::Insets;
use crate::ui::core::navigation::SpatialNavigation;
use crate::ui::core::theme::{Theme, Token};
use crate::ui::widgets::{Button, InputText};

use super::screen::{RequestSlot, Screen, ScreenRequest};
use super::HOME_SCREEN;

pub const SECOND_SCREEN: &str = "second";
pub const NAME_INPUT_ID: &str = "name-input";
pub const BACK_BUTTON_ID: &str = "back-btn";
pub const OPTIONS_BUTTON_ID: &str = "options-btn";
pub const QUIT_BUTTON_ID: &str = "exit-btn";

const NAME_MAX_LEN: usize = 24;
const HEADER_HEIGHT: u16 = 4;
const STATUS_HEIGHT: u16 = 1;
/// Shared by the name field and the button row. Three columns with 2-cell
/// gaps split it evenly, so the middle button sits centred under the field.
const CONTENT_WIDTH: u16 = 52;
const ROW_HEIGHT: u16 = 3;

/// Text entry screen. An unconsumed Back returns to the home screen.
pub struct SecondScreen {
    nav: SpatialNavigation,
    input: Rc<RefCell<InputText>>,
    buttons: Vec<Rc<RefCell<Button>>>,
    status: Rc<RefCell<String>>,
    requests: RequestSlot,
    theme: Theme,
}

impl SecondScreen {
    pub fn new(settings: &Settings) -> Self {
        let requests = RequestSlot::new();
        let status = Rc::new(RefCell::new(String::new()));

        let input = {
            let status = status.clone();
            InputText::new(NAME_INPUT_ID, "Player name", NAME_MAX_LEN).on_submit(move |name| {
                tracing::info!(name, "name submitted");
                *status.borrow_mut() = format!("Hello, {}", name);
            })
        };
        let input = Rc::new(RefCell::new(input));

        let back = {
            let requests = requests.clone();
            Button::new(BACK_BUTTON_ID, "Back")
                .on_click(move || requests.post(ScreenRequest::Switch(HOME_SCREEN)))
        };
        let options = {
            let status = status.clone();
            Button::new(OPTIONS_BUTTON_ID, "Options").on_click(move || {
                tracing::info!("options pressed");
                *status.borrow_mut() = String::from("No options yet");
            })
        };
        let quit = {
            let requests = requests.clone();
            Button::new(QUIT_BUTTON_ID, "Exit").on_click(move || requests.post(ScreenRequest::Quit))
        };
        let buttons: Vec<_> = [back, options, quit]
            .into_iter()
            .map(|b| Rc::new(RefCell::new(b)))
            .collect();

        let mut nav = SpatialNavigation::with_config(settings.nav.clone());
        nav.register_focusable(input.clone());
        for button in &buttons {
            nav.register_focusable(button.clone());
        }

        Self {
            nav,
            input,
            buttons,
            status,
            requests,
            theme: Theme::default(),
        }
    }

    pub fn input(&self) -> Rc<RefCell<InputText>> {
        self.input.clone()
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    fn render_header(&self, ui: &mut Ui, area: Rect) {
        let title = self.theme.style(Token::Title);
        let muted = self.theme.style(Token::Muted);
        let lines = [
            ("Second screen", title),
            ("Enter opens the on-screen keyboard on the name field.", muted),
            ("Esc on an empty field returns home.", muted),
        ];
        for (row, (text, style)) in lines.into_iter().enumerate() {
            let y = area.y.saturating_add(row as u16);
            if y >= area.bottom() {
                break;
            }
            ui.painter
                .text_clipped(Pos::new(area.x + 1, y), text, style, area);
        }
    }

    fn render_status(&self, ui: &mut Ui, area: Rect) {
        let style = self.theme.style(Token::Status);
        ui.painter.fill_rect(area, style);
        let line = format!(
            "{}  focus: {}",
            self.status.borrow(),
            self.nav.current_focus().unwrap_or("-")
        );
        ui.painter
            .text_clipped(Pos::new(area.x + 1, area.y), line, style, area);
    }
}

impl Screen for SecondScreen {
    fn name(&self) -> &'static str {
        SECOND_SCREEN
    }

    fn navigation(&mut self) -> &mut SpatialNavigation {
        &mut self.nav
    }

    fn take_request(&mut self) -> Option<ScreenRequest> {
        self.requests.take()
    }

    fn on_enter(&mut self) {
        tracing::info!("entering second screen");
    }

    fn on_exit(&mut self) {
        self.input.borrow_mut().close_keyboard();
        tracing::info!("leaving second screen");
    }

    fn handle_input(&mut self, direction: Direction) -> bool {
        if self.nav.handle_input(direction) {
            return true;
        }
        if direction == Direction::Back {
            self.requests.post(ScreenRequest::Switch(HOME_SCREEN));
            return true;
        }
        tracing::debug!(%direction, "second: input not handled");
        false
    }

    fn render(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() {
            return;
        }
        ui.painter.fill_rect(area, self.theme.style(Token::Surface));

        let header = ui.take_top(HEADER_HEIGHT);
        let status = ui.take_bottom(STATUS_HEIGHT);
        self.render_header(ui, header);

        let body = ui.rect.inset(Insets::xy(1, 0));
        let (field_row, rest) = body.split_top(ROW_HEIGHT);
        let field = Rect::new(
            field_row.x,
            field_row.y,
            CONTENT_WIDTH.min(field_row.w),
            field_row.h,
        );
        let input = self.input.clone();
        ui.with_rect(field, |ui| input.borrow_mut().ui(ui));

        let (_, rest) = rest.split_top(1);
        let (button_row, _) = rest.split_top(ROW_HEIGHT);
        let button_row = Rect::new(
            button_row.x,
            button_row.y,
            CONTENT_WIDTH.min(button_row.w),
            button_row.h,
        );
        let cells = button_row.split_columns(self.buttons.len() as u16, 2);
        for (button, rect) in self.buttons.iter().zip(cells) {
            ui.with_rect(rect, |ui| button.borrow_mut().ui(ui));
        }

        self.render_status(ui, status);

        // Keyboard last so it is painted over everything else.
        ui.with_rect(area, |ui| input.borrow_mut().keyboard_ui(ui));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/second.rs"]
mod tests;
