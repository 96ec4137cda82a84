use super::*;
use crate::ui::backend::test::TestBackend;

fn started() -> (App, TestBackend) {
    let mut app = App::new(&Settings::default());
    let mut backend = TestBackend::new(80, 24);
    let area = backend.area();
    app.render(&mut backend, area);
    (app, backend)
}

fn redraw(app: &mut App, backend: &mut TestBackend) {
    backend.reset();
    let area = backend.area();
    app.render(backend, area);
}

#[test]
fn starts_running_on_home() {
    let (app, backend) = started();
    assert!(app.is_running());
    assert_eq!(app.current_screen(), Some(HOME_SCREEN));
    assert_eq!(app.screens().len(), 2);
    assert!(backend.buffer().contains_text("padnav: game library"));
    assert!(!app.layout().commands().is_empty());
}

#[test]
fn exit_button_stops_the_app() {
    let (mut app, _) = started();
    app.handle_input(Direction::Down);
    app.handle_input(Direction::Right);
    assert!(app.handle_input(Direction::Confirm));
    assert!(!app.is_running());
}

#[test]
fn next_button_switches_and_back_returns() {
    let (mut app, mut backend) = started();
    app.handle_input(Direction::Down);
    app.handle_input(Direction::Right);
    app.handle_input(Direction::Up);
    app.handle_input(Direction::Up);
    assert!(app.handle_input(Direction::Confirm));
    assert_eq!(app.current_screen(), Some(SECOND_SCREEN));

    redraw(&mut app, &mut backend);
    assert!(backend.buffer().contains_text("Second screen"));

    // Nothing focused yet on the second screen: the first input seeds focus.
    assert!(app.handle_input(Direction::Down));
    assert!(app.handle_input(Direction::Back));
    assert_eq!(app.current_screen(), Some(HOME_SCREEN));
    assert!(app.is_running());

    // Home kept its own focus while away.
    redraw(&mut app, &mut backend);
    let focus = app
        .screens_mut()
        .current_mut()
        .and_then(|s| s.navigation().current_focus().map(str::to_string));
    assert_eq!(focus.as_deref(), Some(NEXT_BUTTON_ID));
}

#[test]
fn input_before_the_first_frame_is_ignored() {
    let mut app = App::new(&Settings::default());
    assert!(!app.handle_input(Direction::Down));
    assert!(app.is_running());
}

#[test]
fn quit_is_idempotent() {
    let (mut app, _) = started();
    app.quit();
    app.quit();
    assert!(!app.is_running());
}
