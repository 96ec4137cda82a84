use super::*;

#[test]
fn defaults_cover_arrows_and_face_buttons() {
    let keymap = Keymap::default();
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Up)), Some(Direction::Up));
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Right)), Some(Direction::Right));
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Enter)), Some(Direction::Confirm));
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Char('a'))), Some(Direction::Confirm));
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Esc)), Some(Direction::Back));
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Char('z'))), None);
    assert_eq!(keymap.lookup(&Key::ctrl(KeyCode::Char('a'))), None);
}

#[test]
fn parse_keybinding_handles_modifiers_and_names() {
    assert_eq!(
        parse_keybinding("ctrl+shift+k"),
        Some(Key::new(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(parse_keybinding("Space"), Some(Key::simple(KeyCode::Char(' '))));
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(
        parse_keybinding("J"),
        Some(Key::new(KeyCode::Char('j'), KeyModifiers::SHIFT))
    );
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("nope"), None);
}

#[test]
fn rules_override_defaults_and_skip_invalid_entries() {
    let rules = vec![
        KeybindingRule {
            key: "j".to_string(),
            direction: "down".to_string(),
        },
        KeybindingRule {
            key: "a".to_string(),
            direction: "back".to_string(),
        },
        KeybindingRule {
            key: "k".to_string(),
            direction: "sideways".to_string(),
        },
    ];
    let keymap = Keymap::with_rules(&rules);
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Char('j'))), Some(Direction::Down));
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Char('a'))), Some(Direction::Back));
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Char('k'))), None);
    assert_eq!(keymap.len(), Keymap::default().len() + 1);
}

#[test]
fn empty_keymap_binds_only_what_it_is_given() {
    let mut keymap = Keymap::empty();
    assert!(keymap.is_empty());
    keymap.bind(Key::simple(KeyCode::Tab), Direction::Down);
    assert_eq!(keymap.len(), 1);
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Tab)), Some(Direction::Down));
    assert_eq!(keymap.lookup(&Key::simple(KeyCode::Up)), None);
}
