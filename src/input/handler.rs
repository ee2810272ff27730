use crate::app::AppState;
use crate::domain::NavDirection;
use crate::ui::handles::{Hit, RowPart};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Handle keyboard input events. Returns true when the widget should close.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Quit
        KeyCode::Esc => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,

        // Navigation
        KeyCode::Up => {
            app.navigate(NavDirection::Up);
            false
        }
        KeyCode::Down => {
            app.navigate(NavDirection::Down);
            false
        }

        // Submit from the input, toggle on a row
        KeyCode::Enter => {
            if app.input_focused() {
                app.submit_input();
            } else {
                app.toggle_selected();
            }
            false
        }

        // Edit the input, or remove the selected row
        KeyCode::Backspace => {
            if app.input_focused() {
                app.input_backspace();
            } else {
                app.remove_selected();
            }
            false
        }
        KeyCode::Delete => {
            if !app.input_focused() {
                app.remove_selected();
            }
            false
        }

        // Typing goes to the input field only
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.input_focused() {
                app.input_push(c);
            }
            false
        }

        _ => false,
    }
}

/// Handle mouse events against the handles of the last drawn frame
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(hit) = app.handles.hit(mouse.column, mouse.row) else {
                return;
            };
            match hit {
                Hit::Input => app.focus_input(),
                Hit::AddButton => app.submit_input(),
                Hit::Row(id, RowPart::Checkbox) | Hit::Row(id, RowPart::Text) => {
                    app.toggle(id);
                    app.activate_row(id);
                }
                Hit::Row(id, RowPart::Delete) => app.remove(id),
                Hit::Row(id, RowPart::Body) => app.activate_row(id),
            }
        }
        MouseEventKind::ScrollUp => app.navigate(NavDirection::Up),
        MouseEventKind::ScrollDown => app.navigate(NavDirection::Down),
        _ => {}
    }
}
