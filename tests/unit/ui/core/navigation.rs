use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::ui::core::focus::Focusable;
use crate::ui::core::geom::BoundingBox;
use crate::ui::core::id::element_id;

type Log = Rc<RefCell<Vec<String>>>;

struct FakeWidget {
    id: String,
    focused: bool,
    enabled: bool,
    consume: Vec<Direction>,
    log: Log,
}

impl Focusable for FakeWidget {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn on_focus_changed(&mut self, focused: bool) {
        self.focused = focused;
        let sign = if focused { '+' } else { '-' };
        self.log.borrow_mut().push(format!("{sign}{}", self.id));
    }

    fn can_focus(&self) -> bool {
        self.enabled
    }

    fn handle_input(&mut self, direction: Direction) -> bool {
        self.consume.contains(&direction)
    }
}

fn fake(id: &str, log: &Log) -> Rc<RefCell<FakeWidget>> {
    Rc::new(RefCell::new(FakeWidget {
        id: id.to_string(),
        focused: false,
        enabled: true,
        consume: Vec::new(),
        log: log.clone(),
    }))
}

fn cmd(id: &str, x: f32, y: f32, w: f32, h: f32) -> RenderCommand {
    RenderCommand::new(element_id(id), BoundingBox::new(x, y, w, h))
}

/// A(0,0) above B(0,20), C(20,0) to the right of A.
fn abc() -> (SpatialNavigation, Vec<Rc<RefCell<FakeWidget>>>, Log) {
    let log: Log = Rc::default();
    let widgets: Vec<_> = ["A", "B", "C"].iter().map(|id| fake(id, &log)).collect();
    let mut nav = SpatialNavigation::new();
    for w in &widgets {
        nav.register_focusable(w.clone());
    }
    nav.update_layout(&[
        cmd("A", 0.0, 0.0, 10.0, 10.0),
        cmd("B", 0.0, 20.0, 10.0, 10.0),
        cmd("C", 20.0, 0.0, 10.0, 10.0),
    ]);
    (nav, widgets, log)
}

#[test]
fn down_moves_to_element_below() {
    let (mut nav, widgets, _) = abc();
    assert!(nav.set_focus("A"));
    assert!(nav.handle_input(Direction::Down));
    assert_eq!(nav.current_focus(), Some("B"));
    assert!(widgets[1].borrow().is_focused());
    assert!(!widgets[0].borrow().is_focused());
}

#[test]
fn right_moves_to_element_beside() {
    let (mut nav, _, _) = abc();
    nav.set_focus("A");
    assert!(nav.handle_input(Direction::Right));
    assert_eq!(nav.current_focus(), Some("C"));
}

#[test]
fn no_candidate_keeps_focus() {
    let (mut nav, _, log) = abc();
    nav.set_focus("A");
    log.borrow_mut().clear();
    assert!(!nav.handle_input(Direction::Up));
    assert!(!nav.handle_input(Direction::Left));
    assert_eq!(nav.current_focus(), Some("A"));
    assert!(log.borrow().is_empty());
}

#[test]
fn first_input_without_focus_seeds_first_element() {
    let (mut nav, widgets, _) = abc();
    assert!(nav.handle_input(Direction::Confirm));
    assert_eq!(nav.current_focus(), Some("A"));
    assert!(widgets[0].borrow().is_focused());
}

#[test]
fn focus_changes_notify_old_then_new() {
    let (mut nav, _, log) = abc();
    nav.set_focus("A");
    nav.set_focus("C");
    assert_eq!(*log.borrow(), vec!["+A", "-A", "+C"]);
}

#[test]
fn set_focus_on_current_is_silent() {
    let (mut nav, _, log) = abc();
    nav.set_focus("B");
    log.borrow_mut().clear();
    assert!(nav.set_focus("B"));
    assert!(log.borrow().is_empty());
}

#[test]
fn set_focus_rejects_unknown_and_unfocusable() {
    let (mut nav, widgets, _) = abc();
    assert!(!nav.set_focus("missing"));
    widgets[2].borrow_mut().enabled = false;
    assert!(!nav.set_focus("C"));
    assert_eq!(nav.current_focus(), None);
}

#[test]
fn directional_search_skips_unfocusable_candidates() {
    let (mut nav, widgets, _) = abc();
    nav.set_focus("A");
    widgets[1].borrow_mut().enabled = false;
    assert!(!nav.handle_input(Direction::Down));
    assert_eq!(nav.current_focus(), Some("A"));
}

#[test]
fn widget_gets_first_refusal() {
    let (mut nav, widgets, _) = abc();
    nav.set_focus("A");
    widgets[0].borrow_mut().consume = vec![Direction::Down, Direction::Confirm];
    assert!(nav.handle_input(Direction::Down));
    assert_eq!(nav.current_focus(), Some("A"));
    assert!(nav.handle_input(Direction::Confirm));
}

#[test]
fn unconsumed_confirm_and_back_return_false() {
    let (mut nav, _, _) = abc();
    nav.set_focus("A");
    assert!(!nav.handle_input(Direction::Confirm));
    assert!(!nav.handle_input(Direction::Back));
    assert_eq!(nav.current_focus(), Some("A"));
}

#[test]
fn disabled_engine_ignores_input() {
    let (mut nav, widgets, _) = abc();
    nav.set_focus("B");
    nav.set_enabled(false);
    assert!(!nav.is_enabled());
    assert_eq!(nav.current_focus(), None);
    assert!(!widgets[1].borrow().is_focused());
    assert!(!nav.handle_input(Direction::Down));
    nav.set_enabled(true);
    assert!(nav.handle_input(Direction::Down));
    assert_eq!(nav.current_focus(), Some("A"));
}

#[test]
fn unregistering_focused_widget_reseeds_on_next_input() {
    let (mut nav, widgets, log) = abc();
    nav.set_focus("A");
    nav.unregister_focusable("A");
    assert_eq!(nav.current_focus(), None);
    assert!(!widgets[0].borrow().is_focused());
    assert_eq!(log.borrow().last().map(String::as_str), Some("-A"));

    assert!(nav.handle_input(Direction::Down));
    assert_eq!(nav.current_focus(), Some("B"));
    assert_eq!(nav.registered_count(), 2);
}

#[test]
fn focus_missing_from_layout_reseeds() {
    let (mut nav, _, _) = abc();
    nav.set_focus("B");
    nav.update_layout(&[cmd("C", 20.0, 0.0, 10.0, 10.0), cmd("A", 0.0, 0.0, 10.0, 10.0)]);
    assert!(nav.handle_input(Direction::Down));
    assert_eq!(nav.current_focus(), Some("C"));
}

#[test]
fn update_layout_ignores_unregistered_commands() {
    let (mut nav, _, _) = abc();
    nav.update_layout(&[
        cmd("A", 0.0, 0.0, 10.0, 10.0),
        cmd("title", 0.0, 0.0, 80.0, 1.0),
        cmd("A", 50.0, 50.0, 10.0, 10.0),
    ]);
    assert_eq!(nav.element_count(), 1);
    assert_eq!(nav.registered_count(), 3);
}

#[test]
fn clear_drops_everything_without_notifying() {
    let (mut nav, widgets, log) = abc();
    nav.set_focus("A");
    log.borrow_mut().clear();
    nav.clear();
    assert_eq!(nav.current_focus(), None);
    assert_eq!(nav.element_count(), 0);
    assert_eq!(nav.registered_count(), 0);
    assert!(log.borrow().is_empty());
    assert!(widgets[0].borrow().is_focused());
}

#[test]
fn current_widget_returns_registered_handle() {
    let (mut nav, _, _) = abc();
    assert!(nav.current_widget().is_none());
    nav.set_focus("C");
    let widget = nav.current_widget().expect("focused widget");
    assert_eq!(widget.borrow().id(), "C");
    nav.debug_elements();
}

#[test]
fn alignment_weight_comes_from_config() {
    let log: Log = Rc::default();
    let mut nav = SpatialNavigation::with_config(NavConfig {
        alignment_weight: 0.0,
    });
    for id in ["origin", "near-diagonal", "far-aligned"] {
        nav.register_focusable(fake(id, &log));
    }
    nav.update_layout(&[
        cmd("origin", 0.0, 0.0, 10.0, 10.0),
        cmd("near-diagonal", 30.0, 30.0, 10.0, 10.0),
        cmd("far-aligned", 45.0, 0.0, 10.0, 10.0),
    ]);
    nav.set_focus("origin");
    nav.handle_input(Direction::Right);
    assert_eq!(nav.current_focus(), Some("near-diagonal"));
    assert_eq!(nav.config().alignment_weight, 0.0);
}

#[test]
fn replacing_the_focused_widget_hands_focus_over() {
    let (mut nav, widgets, _) = abc();
    nav.set_focus("A");
    let log: Log = Rc::default();
    let replacement = fake("A", &log);
    replacement.borrow_mut().consume = vec![Direction::Confirm];
    nav.register_focusable(replacement.clone());

    assert!(!widgets[0].borrow().is_focused());
    assert!(replacement.borrow().is_focused());
    assert_eq!(nav.current_focus(), Some("A"));
    assert_eq!(nav.registered_count(), 3);

    // Input reaches the replacement even before the next layout pass.
    assert!(nav.handle_input(Direction::Confirm));

    nav.update_layout(&[cmd("A", 0.0, 0.0, 10.0, 10.0), cmd("B", 0.0, 20.0, 10.0, 10.0)]);
    assert!(nav.set_focus("A"));
    assert!(replacement.borrow().is_focused());
    assert!(nav.handle_input(Direction::Down));
    assert_eq!(nav.current_focus(), Some("B"));
    assert!(!replacement.borrow().is_focused());
}

#[test]
fn replacing_the_focused_widget_with_an_unfocusable_one_clears_focus() {
    let (mut nav, widgets, _) = abc();
    nav.set_focus("B");
    let log: Log = Rc::default();
    let replacement = fake("B", &log);
    replacement.borrow_mut().enabled = false;
    nav.register_focusable(replacement.clone());

    assert!(!widgets[1].borrow().is_focused());
    assert!(!replacement.borrow().is_focused());
    assert_eq!(nav.current_focus(), None);
}

#[test]
fn registering_the_same_handle_again_is_silent() {
    let (mut nav, widgets, log) = abc();
    nav.set_focus("C");
    log.borrow_mut().clear();
    nav.register_focusable(widgets[2].clone());
    assert!(log.borrow().is_empty());
    assert!(widgets[2].borrow().is_focused());
    assert_eq!(nav.current_focus(), Some("C"));
}

#[test]
fn lone_element_has_nowhere_to_go() {
    let log: Log = Rc::default();
    let mut nav = SpatialNavigation::new();
    nav.register_focusable(fake("only", &log));
    nav.update_layout(&[cmd("only", 10.0, 10.0, 10.0, 10.0)]);
    assert!(nav.set_focus("only"));
    log.borrow_mut().clear();

    for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        assert!(!nav.handle_input(direction), "{direction} moved focus");
        assert_eq!(nav.current_focus(), Some("only"));
    }
    assert!(log.borrow().is_empty());
}
