use crate::ui::app::{App, PAGE_SCROLL};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.controller_mut().clear_input();
        return;
    }

    if is_ctrl_char(key, 'v') {
        app.paste_from_clipboard();
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.controller_mut().pop_char(),
        KeyCode::Up => app.controller_mut().scroll(-1),
        KeyCode::Down => app.controller_mut().scroll(1),
        KeyCode::PageUp => app.controller_mut().scroll(-PAGE_SCROLL),
        KeyCode::PageDown => app.controller_mut().scroll(PAGE_SCROLL),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.controller_mut().push_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
