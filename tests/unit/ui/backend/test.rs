use super::*;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, Painter};
use crate::ui::core::style::{Color, Style};

fn draw(backend: &mut TestBackend, paint: impl FnOnce(&mut Painter)) {
    let mut painter = Painter::new();
    paint(&mut painter);
    let area = backend.area();
    backend.draw(area, painter.cmds());
}

#[test]
fn wide_glyph_that_does_not_fit_is_dropped() {
    let mut backend = TestBackend::new(3, 1);
    draw(&mut backend, |p| {
        p.text_clipped(Pos::new(0, 0), "▲界", Style::default(), Rect::new(0, 0, 2, 1))
    });
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, "▲");
    assert_eq!(backend.buffer().cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn wide_glyph_pads_its_second_cell() {
    let mut backend = TestBackend::new(4, 1);
    draw(&mut backend, |p| p.text(Pos::new(0, 0), "界a", Style::default()));
    assert_eq!(backend.buffer().row_text(0), "界 a");
}

#[test]
fn fill_clips_to_the_buffer() {
    let mut backend = TestBackend::new(2, 2);
    let style = Style::default().bg(Color::Indexed(4));
    draw(&mut backend, |p| {
        p.text(Pos::new(0, 0), "A", Style::default());
        p.fill_rect(Rect::new(0, 0, 10, 10), style);
    });
    let buf = backend.buffer();
    assert_eq!(buf.cell(0, 0).unwrap().symbol, " ");
    assert_eq!(buf.cell(1, 1).unwrap().style, style);
    assert!(buf.cell(2, 2).is_none());
}

#[test]
fn rounded_border_uses_rounded_corners() {
    let mut backend = TestBackend::new(4, 3);
    draw(&mut backend, |p| {
        p.border(Rect::new(0, 0, 4, 3), Style::default(), BorderKind::Rounded)
    });
    assert_eq!(backend.buffer().row_text(0), "╭──╮");
    assert_eq!(backend.buffer().row_text(1), "│  │");
    assert_eq!(backend.buffer().row_text(2), "╰──╯");
}

#[test]
fn reset_blanks_the_buffer() {
    let mut backend = TestBackend::new(6, 1);
    draw(&mut backend, |p| p.text(Pos::new(0, 0), "[x] a", Style::default()));
    assert!(backend.buffer().contains_text("[x] a"));
    backend.reset();
    assert!(!backend.buffer().contains_text("[x]"));
}
