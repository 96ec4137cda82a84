use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::frame::LayoutFrame;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;

fn focused_input(max_len: usize) -> InputText {
    let mut input = InputText::new("name-input", "Type a name", max_len);
    input.on_focus_changed(true);
    input
}

#[test]
fn insert_respects_max_length() {
    let mut input = focused_input(4);
    assert!(input.insert("abc"));
    assert!(input.insert("def"));
    assert_eq!(input.text(), "abcd");
    assert!(!input.insert("x"));
    assert_eq!(input.cursor(), 4);
}

#[test]
fn cursor_moves_and_edits_in_the_middle() {
    let mut input = focused_input(16);
    input.set_text("héllo");
    assert_eq!(input.cursor(), 5);
    assert!(input.handle_input(Direction::Left));
    assert!(input.handle_input(Direction::Left));
    assert!(input.handle_input(Direction::Left));
    assert!(input.handle_input(Direction::Back));
    assert_eq!(input.text(), "hllo");
    input.insert("e");
    assert_eq!(input.text(), "hello");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn cursor_at_edges_lets_input_bubble() {
    let mut input = focused_input(16);
    assert!(!input.handle_input(Direction::Left));
    assert!(!input.handle_input(Direction::Right));
    assert!(!input.handle_input(Direction::Back));
    assert!(!input.handle_input(Direction::Up));
    assert!(!input.handle_input(Direction::Down));
}

#[test]
fn set_text_truncates() {
    let mut input = focused_input(3);
    input.set_text("abcdef");
    assert_eq!(input.text(), "abc");
    input.clear();
    assert_eq!(input.text(), "");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn confirm_opens_keyboard_and_delegates() {
    let mut input = focused_input(16);
    assert!(input.handle_input(Direction::Confirm));
    assert!(input.is_keyboard_visible());

    // First key is "1"; Up is swallowed by the keyboard, not the field.
    assert!(input.handle_input(Direction::Up));
    assert!(input.handle_input(Direction::Confirm));
    assert!(input.handle_input(Direction::Down));
    assert!(input.handle_input(Direction::Confirm));
    assert_eq!(input.text(), "1q");

    assert!(input.handle_input(Direction::Back));
    assert!(!input.is_keyboard_visible());
    assert_eq!(input.text(), "1q");
}

#[test]
fn enter_submits_and_closes() {
    let submitted = Rc::new(RefCell::new(Vec::new()));
    let sink = submitted.clone();
    let mut input = InputText::new("name-input", "", 16)
        .on_submit(move |text| sink.borrow_mut().push(text.to_string()));
    input.on_focus_changed(true);
    input.set_text("ok");

    input.handle_input(Direction::Confirm);
    for _ in 0..4 {
        input.handle_input(Direction::Down);
    }
    // Action row: Shift, Sym, Space, Back, Enter.
    for _ in 0..4 {
        input.handle_input(Direction::Right);
    }
    assert!(input.handle_input(Direction::Confirm));
    assert_eq!(*submitted.borrow(), vec!["ok".to_string()]);
    assert!(!input.is_keyboard_visible());
}

#[test]
fn on_change_sees_every_edit() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut input =
        InputText::new("name-input", "", 16).on_change(move |text| sink.borrow_mut().push(text.to_string()));
    input.insert("a");
    input.insert("b");
    input.backspace();
    assert_eq!(*seen.borrow(), vec!["a", "ab", "a"]);
}

#[test]
fn losing_focus_closes_keyboard() {
    let mut input = focused_input(16);
    input.open_keyboard();
    input.on_focus_changed(false);
    assert!(!input.is_keyboard_visible());
    assert!(!input.is_focused());
}

#[test]
fn disabled_input_cannot_focus() {
    let mut input = focused_input(16);
    input.set_enabled(false);
    assert!(!input.can_focus());
}

#[test]
fn render_shows_placeholder_or_text_with_cursor() {
    let mut input = InputText::new("name-input", "Type a name", 16);
    let area = Rect::new(0, 0, 20, 3);

    let mut painter = Painter::new();
    let mut layout = LayoutFrame::new();
    input.ui(&mut Ui::new(area, &mut painter, &mut layout));
    let mut backend = TestBackend::new(20, 3);
    backend.draw(area, painter.cmds());
    assert!(backend.buffer().row_text(1).contains("Type a name"));
    assert!(layout.element_data("name-input").is_some());

    input.on_focus_changed(true);
    input.set_text("abc");
    input.move_left();
    let mut painter = Painter::new();
    let mut layout = LayoutFrame::new();
    input.ui(&mut Ui::new(area, &mut painter, &mut layout));
    let mut backend = TestBackend::new(20, 3);
    backend.draw(area, painter.cmds());
    assert!(backend.buffer().row_text(1).contains("ab|c"));
}

#[test]
fn keyboard_ui_only_draws_when_open() {
    let mut input = focused_input(16);
    let area = Rect::new(0, 0, 60, 9);
    let mut painter = Painter::new();
    let mut layout = LayoutFrame::new();
    input.keyboard_ui(&mut Ui::new(area, &mut painter, &mut layout));
    assert!(painter.cmds().is_empty());

    input.open_keyboard();
    input.keyboard_ui(&mut Ui::new(area, &mut painter, &mut layout));
    assert!(layout.element_data("name-input_keyboard_container").is_some());
    assert_eq!(input.keyboard().id(), "name-input_keyboard");
}
