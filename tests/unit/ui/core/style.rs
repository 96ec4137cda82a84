use super::*;

#[test]
fn mod_union_and_contains() {
    let m = Mod::BOLD | Mod::REVERSE;
    assert!(m.contains(Mod::BOLD));
    assert!(m.contains(Mod::REVERSE));
    assert!(!m.contains(Mod::DIM));
    assert!(m.contains(Mod::NONE));
    assert_eq!(Mod::NONE.union(Mod::DIM), Mod::DIM);
}

#[test]
fn builders_stack_on_a_plain_style() {
    let s = Style::plain()
        .fg(Color::Indexed(7))
        .bg(Color::Reset)
        .add_mod(Mod::BOLD)
        .add_mod(Mod::UNDERLINE);
    assert_eq!(s.fg, Some(Color::Indexed(7)));
    assert_eq!(s.bg, Some(Color::Reset));
    assert_eq!(s.mods, Mod::BOLD | Mod::UNDERLINE);
    assert_eq!(Style::plain(), Style::default());
}
