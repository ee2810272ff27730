use crate::app::AppState;
use crate::ui::handles::RowHandles;
use crate::ui::styles::{
    border_style, button_style, default_style, focused_border_style, placeholder_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const PLACEHOLDER: &str = "Enter a new task";

/// Render the new-task field and the add button, registering both
pub fn render_input_bar(
    f: &mut Frame,
    app: &AppState,
    input_area: Rect,
    button_area: Rect,
    handles: &mut RowHandles,
) {
    let focused = app.input_focused();

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let mut spans = vec![Span::raw("> ")];
    if app.input.is_empty() && !focused {
        spans.push(Span::styled(PLACEHOLDER, placeholder_style()));
    } else {
        spans.push(Span::styled(visible_tail(&app.input, input_area), default_style()));
    }
    if focused {
        spans.push(Span::styled("█", focused_border_style())); // Cursor
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(field, input_area);

    let button = Paragraph::new("+")
        .alignment(Alignment::Center)
        .style(button_style())
        .block(Block::default().borders(Borders::ALL).border_style(border_style()));
    f.render_widget(button, button_area);

    handles.input = Some(input_area);
    handles.add_button = Some(button_area);
}

/// The end of the buffer that fits in the field, so the cursor stays visible.
/// Measured in terminal columns; wide characters take two.
fn visible_tail(input: &str, area: Rect) -> String {
    // Borders, the "> " prompt and the cursor
    let room = area.width.saturating_sub(5) as usize;
    let mut used = 0;
    let mut start = input.len();
    for (i, c) in input.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > room {
            break;
        }
        start = i;
    }
    input[start..].to_string()
}
