use super::*;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::focus::Focusable;
use crate::ui::core::frame::LayoutFrame;
use crate::ui::core::painter::Painter;

fn frame(screen: &mut HomeScreen, backend: &mut TestBackend) {
    let area = backend.area();
    let mut painter = Painter::new();
    let mut layout = LayoutFrame::new();
    {
        let mut ui = Ui::new(area, &mut painter, &mut layout);
        screen.render(&mut ui);
    }
    backend.draw(area, painter.cmds());
    screen.update_layout(layout.commands());
}

fn laid_out(width: u16, height: u16) -> (HomeScreen, TestBackend) {
    let mut screen = HomeScreen::new(&Settings::default());
    let mut backend = TestBackend::new(width, height);
    frame(&mut screen, &mut backend);
    (screen, backend)
}

#[test]
fn list_and_buttons_are_indexed() {
    let (mut screen, _) = laid_out(80, 24);
    assert_eq!(screen.navigation().registered_count(), 4);
    assert_eq!(screen.navigation().element_count(), 4);
}

#[test]
fn first_input_focuses_the_list() {
    let (mut screen, _) = laid_out(80, 24);
    assert!(screen.handle_input(Direction::Down));
    assert_eq!(screen.navigation().current_focus(), Some(LIST_ID));
    let list = screen.list();
    assert!(list.borrow().is_focused());
    assert_eq!(list.borrow().focused_index(), Some(0));
}

#[test]
fn list_consumes_vertical_moves_and_confirm() {
    let (mut screen, mut backend) = laid_out(80, 24);
    screen.handle_input(Direction::Down);
    assert!(screen.handle_input(Direction::Down));
    assert!(screen.handle_input(Direction::Confirm));
    frame(&mut screen, &mut backend);

    let list = screen.list();
    assert_eq!(list.borrow().focused_index(), Some(1));
    // "Epic RPG" starts selected, so confirm cleared it.
    assert!(!list.borrow().items()[1].selected);
    assert!(backend.buffer().contains_text("[ ] Epic RPG"));
    assert_eq!(screen.navigation().current_focus(), Some(LIST_ID));
}

#[test]
fn right_leaves_the_list_for_the_nearest_button() {
    let (mut screen, _) = laid_out(80, 24);
    screen.handle_input(Direction::Down);
    assert!(screen.handle_input(Direction::Right));
    // The exit button is the one closest to the list's vertical centre.
    assert_eq!(screen.navigation().current_focus(), Some(EXIT_BUTTON_ID));
    assert!(!screen.list().borrow().is_focused());

    assert!(screen.handle_input(Direction::Up));
    assert_eq!(screen.navigation().current_focus(), Some(SHOW_SELECTED_BUTTON_ID));
    assert!(screen.handle_input(Direction::Left));
    assert_eq!(screen.navigation().current_focus(), Some(LIST_ID));
}

#[test]
fn show_selected_reports_selected_values() {
    let (mut screen, _) = laid_out(80, 24);
    screen.handle_input(Direction::Down);
    screen.handle_input(Direction::Right);
    screen.handle_input(Direction::Up);
    assert!(screen.handle_input(Direction::Confirm));
    assert_eq!(screen.status(), "Selected: game2, game5, game10, game14");
    assert_eq!(screen.take_request(), None);
}

#[test]
fn next_and_exit_buttons_post_requests() {
    let (mut screen, _) = laid_out(80, 24);
    screen.handle_input(Direction::Down);
    screen.handle_input(Direction::Right);
    screen.handle_input(Direction::Confirm);
    assert_eq!(screen.take_request(), Some(ScreenRequest::Quit));

    screen.handle_input(Direction::Up);
    screen.handle_input(Direction::Up);
    assert_eq!(screen.navigation().current_focus(), Some(NEXT_BUTTON_ID));
    screen.handle_input(Direction::Confirm);
    assert_eq!(
        screen.take_request(),
        Some(ScreenRequest::Switch(SECOND_SCREEN))
    );
}

#[test]
fn back_is_not_handled_on_home() {
    let (mut screen, _) = laid_out(80, 24);
    screen.handle_input(Direction::Down);
    assert!(!screen.handle_input(Direction::Back));
    assert_eq!(screen.take_request(), None);
}

#[test]
fn short_terminal_virtualizes_the_list() {
    let (screen, backend) = laid_out(80, 12);
    let list = screen.list();
    assert_eq!(list.borrow().max_visible(), 7);
    assert!(backend.buffer().contains_text("Super Action Adventure"));
    assert!(!backend.buffer().contains_text("BLACK"));
    assert!(backend.buffer().contains_text("▼"));
}

#[test]
fn scrolling_to_the_end_flips_the_indicators() {
    let (mut screen, mut backend) = laid_out(80, 12);
    screen.handle_input(Direction::Down);
    for _ in 0..15 {
        assert!(screen.handle_input(Direction::Down));
    }
    backend.reset();
    frame(&mut screen, &mut backend);

    let list = screen.list();
    assert_eq!(list.borrow().focused_index(), Some(15));
    assert_eq!(list.borrow().scroll_offset(), 9);
    assert!(backend.buffer().contains_text("BLACK"));
    assert!(backend.buffer().contains_text("▲"));
    assert!(!backend.buffer().contains_text("▼"));
}

#[test]
fn very_wide_terminal_lays_out_without_overflow() {
    let (mut screen, backend) = laid_out(2000, 10);
    assert_eq!(screen.navigation().element_count(), 4);
    assert!(backend.buffer().contains_text("[x]"));
    assert!(screen.handle_input(Direction::Down));
    assert_eq!(screen.navigation().current_focus(), Some(LIST_ID));
}

#[test]
fn list_width_is_a_share_of_the_body() {
    assert_eq!(percent_of(80, LIST_WIDTH_PERCENT), 32);
    assert_eq!(percent_of(2000, LIST_WIDTH_PERCENT), 800);
    assert_eq!(percent_of(u16::MAX, 100), u16::MAX);
}
