use std::cell::RefCell;
use std::rc::Rc;

use crate::services::settings::Settings;
use crate::ui::core::frame::{Ui, Widget};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::input::Direction;
use crate::ui::core::layout::Insets;
use crate::ui::core::navigation::SpatialNavigation;
use crate::ui::core::theme::{Theme, Token};
use crate::ui::widgets::{Button, CheckboxList, ListItem};

use super::screen::{RequestSlot, Screen, ScreenRequest};
use super::SECOND_SCREEN;

pub const HOME_SCREEN: &str = "home";
pub const LIST_ID: &str = "consoles-checkbox-list";
pub const NEXT_BUTTON_ID: &str = "next-button";
pub const SHOW_SELECTED_BUTTON_ID: &str = "show-selected";
pub const EXIT_BUTTON_ID: &str = "exit-button";

const HEADER_HEIGHT: u16 = 2;
const STATUS_HEIGHT: u16 = 1;
const LIST_WIDTH_PERCENT: u16 = 40;
const BUTTON_WIDTH: u16 = 24;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 1;

const GAMES: &[(&str, &str, bool)] = &[
    ("Super Action Adventure", "game1", false),
    ("Epic RPG", "game2", true),
    ("Retro Platformer", "game3", false),
    ("Speed Racing", "game4", false),
    ("Clever Puzzle", "game5", true),
    ("First Person Shooter", "game6", false),
    ("Real Time Strategy", "game7", false),
    ("Life Simulator", "game8", false),
    ("Point-and-Click Adventure", "game9", false),
    ("Classic Arcade Fighter", "game10", true),
    ("Music and Rhythm", "game11", false),
    ("Psychological Horror", "game12", false),
    ("Alex Kidd in Miracle World", "game13", false),
    ("Street Fighter", "game14", true),
    ("Need for Speed", "game15", false),
    ("BLACK", "game16", false),
];

fn game_items() -> Vec<ListItem<String>> {
    GAMES
        .iter()
        .map(|(label, value, selected)| ListItem::new(*label, value.to_string()).selected(*selected))
        .collect()
}

/// Landing screen: a game list on the left, actions on the right.
pub struct HomeScreen {
    nav: SpatialNavigation,
    list: Rc<RefCell<CheckboxList<String>>>,
    buttons: Vec<Rc<RefCell<Button>>>,
    status: Rc<RefCell<String>>,
    requests: RequestSlot,
    theme: Theme,
}

impl HomeScreen {
    pub fn new(settings: &Settings) -> Self {
        let requests = RequestSlot::new();
        let status = Rc::new(RefCell::new(String::from("Ready")));
        let list = Rc::new(RefCell::new(
            CheckboxList::new(LIST_ID, game_items()).with_config(settings.list.clone()),
        ));

        let next = {
            let requests = requests.clone();
            Button::new(NEXT_BUTTON_ID, "Next screen")
                .on_click(move || requests.post(ScreenRequest::Switch(SECOND_SCREEN)))
        };
        let show_selected = {
            let list = list.clone();
            let status = status.clone();
            Button::new(SHOW_SELECTED_BUTTON_ID, "Show selected").on_click(move || {
                let values = list.borrow().selected_values();
                tracing::info!(count = values.len(), values = ?values, "selected items");
                *status.borrow_mut() = if values.is_empty() {
                    String::from("Nothing selected")
                } else {
                    format!("Selected: {}", values.join(", "))
                };
            })
        };
        let exit = {
            let requests = requests.clone();
            Button::new(EXIT_BUTTON_ID, "Exit").on_click(move || requests.post(ScreenRequest::Quit))
        };
        let buttons: Vec<_> = [next, show_selected, exit]
            .into_iter()
            .map(|b| Rc::new(RefCell::new(b)))
            .collect();

        let mut nav = SpatialNavigation::with_config(settings.nav.clone());
        nav.register_focusable(list.clone());
        for button in &buttons {
            nav.register_focusable(button.clone());
        }

        Self {
            nav,
            list,
            buttons,
            status,
            requests,
            theme: Theme::default(),
        }
    }

    pub fn list(&self) -> Rc<RefCell<CheckboxList<String>>> {
        self.list.clone()
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    fn render_header(&self, ui: &mut Ui, area: Rect) {
        let title = self.theme.style(Token::Title);
        let muted = self.theme.style(Token::Muted);
        let (first, second) = area.split_top(1);
        ui.painter
            .text_clipped(Pos::new(first.x + 1, first.y), "padnav: game library", title, first);
        ui.painter.text_clipped(
            Pos::new(second.x + 1, second.y),
            "arrows move, enter toggles or activates, esc goes back",
            muted,
            second,
        );
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

impl Screen for HomeScreen {
    fn name(&self) -> &'static str {
        HOME_SCREEN
    }

    fn navigation(&mut self) -> &mut SpatialNavigation {
        &mut self.nav
    }

    fn take_request(&mut self) -> Option<ScreenRequest> {
        self.requests.take()
    }

    fn on_enter(&mut self) {
        tracing::info!("entering home screen");
    }

    fn on_exit(&mut self) {
        tracing::info!("leaving home screen");
    }

    fn handle_input(&mut self, direction: Direction) -> bool {
        let handled = self.nav.handle_input(direction);
        if !handled {
            tracing::debug!(%direction, "home: input not handled");
        }
        handled
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
        let (list_area, rest) = body.split_left(percent_of(body.w, LIST_WIDTH_PERCENT));
        let list = self.list.clone();
        ui.with_rect(list_area, |ui| list.borrow_mut().ui(ui));

        let column = rest.inset(Insets {
            left: 2,
            ..Insets::default()
        });
        let mut y = column.y;
        for button in &self.buttons {
            let rect = Rect::new(column.x, y, BUTTON_WIDTH.min(column.w), BUTTON_HEIGHT)
                .intersect(column);
            ui.with_rect(rect, |ui| button.borrow_mut().ui(ui));
            y = y.saturating_add(BUTTON_HEIGHT + BUTTON_GAP);
        }

        self.render_status(ui, status);
    }
}

/// `percent`% of `width`, computed wide so large terminals cannot overflow.
fn percent_of(width: u16, percent: u16) -> u16 {
    let cells = u32::from(width) * u32::from(percent) / 100;
    u16::try_from(cells).unwrap_or(width)
}

#[cfg(test)]
#[path = "../../tests/unit/app/home.rs"]
mod tests;
