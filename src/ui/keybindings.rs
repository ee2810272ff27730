use crate::app::AppState;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar; Enter's hint follows the focused element
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = Line::from(vec![
        Span::raw("↑/↓ select   "),
        Span::raw(enter_hint(app)),
        Span::raw("Del remove   "),
        Span::raw("Esc quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

fn enter_hint(app: &AppState) -> &'static str {
    if app.input_focused() {
        return "Enter add   ";
    }
    match app.selected_task() {
        Some(task) if task.completed => "Enter undo   ",
        Some(_) => "Enter done   ",
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::NavDirection;

    #[test]
    fn test_enter_hint_follows_focus() {
        let mut app = AppState::new(AppConfig {
            glyphs: 0,
            ..AppConfig::default()
        });
        assert_eq!(enter_hint(&app), "Enter add   ");

        app.input = "a".to_string();
        app.submit_input();
        app.navigate(NavDirection::Down);
        assert_eq!(enter_hint(&app), "Enter done   ");

        app.toggle_selected();
        assert_eq!(enter_hint(&app), "Enter undo   ");
    }
}
