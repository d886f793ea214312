use crate::nav::{SelectionTab, Tagged};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    if app.show_path_log() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('p') => app.close_path_log(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.focus_up(),
        KeyCode::Down | KeyCode::Char('j') => app.focus_down(),
        KeyCode::Enter | KeyCode::Right => app.activate(),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Esc => app.back(),
        KeyCode::Char('r') => app.pop_to_root(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('p') => app.toggle_path_log(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // Tabs are numbered from 1 in the UI.
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if let Some(tab) = index
                .checked_sub(1)
                .and_then(|i| SelectionTab::ALL.get(i))
            {
                app.select_tab(*tab);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
