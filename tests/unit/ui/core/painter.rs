use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.text(Pos::new(0, 0), "hi", Style::default());
    p.border(Rect::new(0, 0, 3, 3), Style::default(), BorderKind::Plain);
    assert_eq!(p.cmds().len(), 3);

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn degenerate_rects_and_empty_text_are_skipped() {
    let mut p = Painter::new();
    p.fill_rect(Rect::new(0, 0, 0, 4), Style::default());
    p.border(Rect::new(0, 0, 1, 4), Style::default(), BorderKind::Rounded);
    p.text(Pos::new(1, 1), "", Style::default());
    assert!(p.cmds().is_empty());
}

#[test]
fn label_is_centred_and_clipped() {
    let mut p = Painter::new();
    let rect = Rect::new(2, 1, 10, 3);
    p.label_centered(rect, "Next", Style::default());
    assert_eq!(
        p.cmds(),
        &[PaintCmd::Text {
            pos: Pos::new(5, 2),
            text: "Next".to_string(),
            style: Style::default(),
            clip: Some(rect),
        }]
    );
}
