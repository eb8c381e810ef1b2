use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::app::App;
use crate::ui::layout::ScreenRegions;

/// Process a key event.
///
/// Returns the trimmed expression when the event triggered a submission
/// that should go out over the network.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<String> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return None;
    }

    if is_ctrl_char(key, 'u') {
        app.clear_input();
        return None;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => {
            app.backspace();
            None
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_char(ch);
            None
        }
        _ => None,
    }
}

/// Process a mouse event. A left click on the calculate control triggers
/// the same submission path as Enter.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, regions: &ScreenRegions) -> Option<String> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if regions.hits_button(mouse.column, mouse.row) {
        app.submit()
    } else {
        None
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
