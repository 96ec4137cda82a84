use crossterm::event as ct;

use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Convert a terminal event. Mouse and paste events have no navigation
/// meaning and are dropped.
pub fn into_input_event(event: ct::Event) -> Option<InputEvent> {
    match event {
        ct::Event::Key(key) => Some(InputEvent::Key(into_key_event(key))),
        ct::Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        ct::Event::FocusGained => Some(InputEvent::FocusGained),
        ct::Event::FocusLost => Some(InputEvent::FocusLost),
        ct::Event::Mouse(_) | ct::Event::Paste(_) => None,
    }
}

pub fn into_key_event(event: ct::KeyEvent) -> KeyEvent {
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    KeyEvent {
        code,
        modifiers,
        kind: match event.kind {
            ct::KeyEventKind::Press => KeyEventKind::Press,
            ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
            ct::KeyEventKind::Release => KeyEventKind::Release,
        },
    }
}

fn into_key_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    [
        (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (ct::KeyModifiers::ALT, KeyModifiers::ALT),
        (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
    ]
    .into_iter()
    .filter(|(from, _)| mods.contains(*from))
    .fold(KeyModifiers::NONE, |acc, (_, to)| acc | to)
}

fn into_key_code(code: ct::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    match code {
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::F(n) => KeyCode::F(n),
        // Some terminals report Ctrl-Space as NUL.
        ct::KeyCode::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
