use crate::app::AppState;
use crate::domain::Task;
use crate::ui::handles::{RowHandle, RowHandles};
use crate::ui::styles::{default_style, delete_style, done_style, selected_style};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

/// Narrowest list that still fits marker, checkbox, some text and the delete control
const MIN_ROW_WIDTH: u16 = 12;
const CHECKBOX_WIDTH: u16 = 3;
const DELETE_LABEL: &str = "[del]";

/// Render the task rows and register a handle for each one drawn
pub fn render_list_pane(f: &mut Frame, app: &mut AppState, area: Rect, handles: &mut RowHandles) {
    if app.tasks.is_empty() || area.width < MIN_ROW_WIDTH || area.height == 0 {
        return;
    }

    let height = area.height as usize;
    let anchor = app.anchor_row().and_then(|id| app.tasks.position(id));
    app.list_offset = scroll_offset(app.list_offset, anchor, app.tasks.len(), height);

    let selected = app.selection.selected();
    let focused = app.selection.focus().and_then(|target| target.row());

    for (slot, task) in app.tasks.iter().skip(app.list_offset).take(height).enumerate() {
        let handle = row_handle(task, area, slot as u16);
        let is_selected = selected == Some(task.id);
        let is_focused = focused == Some(task.id);
        render_row(f, task, &handle, is_selected, is_focused);
        handles.register_row(handle);
    }
}

/// First row to show so the anchor row stays in view
pub fn scroll_offset(current: usize, anchor: Option<usize>, len: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }

    let mut offset = current.min(len.saturating_sub(height));
    if let Some(a) = anchor {
        if a < offset {
            offset = a;
        } else if a >= offset + height {
            offset = a + 1 - height;
        }
    }
    offset
}

/// Screen rectangles for a row at `slot` lines below the top of the list
/// Format: `›[x] Buy milk ........................ [del] `
fn row_handle(task: &Task, area: Rect, slot: u16) -> RowHandle {
    let y = area.y + slot;
    let delete_width = DELETE_LABEL.len() as u16;
    let text_x = area.x + 1 + CHECKBOX_WIDTH + 1;
    let delete_x = area.x + area.width - delete_width - 1;

    RowHandle {
        id: task.id,
        row: Rect::new(area.x, y, area.width, 1),
        checkbox: Rect::new(area.x + 1, y, CHECKBOX_WIDTH, 1),
        text: Rect::new(text_x, y, delete_x.saturating_sub(text_x + 1), 1),
        delete: Rect::new(delete_x, y, delete_width, 1),
    }
}

fn render_row(f: &mut Frame, task: &Task, handle: &RowHandle, is_selected: bool, is_focused: bool) {
    let row_style = if is_selected {
        selected_style()
    } else {
        default_style()
    };

    // Row background
    f.render_widget(Block::default().style(row_style), handle.row);

    if is_focused {
        let marker = Rect::new(handle.row.x, handle.row.y, 1, 1);
        f.render_widget(Paragraph::new("›").style(row_style), marker);
    }

    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    f.render_widget(Paragraph::new(checkbox).style(row_style), handle.checkbox);

    f.render_widget(
        Paragraph::new(Span::styled(task.text.clone(), text_style(task, is_selected))),
        handle.text,
    );

    f.render_widget(
        Paragraph::new(DELETE_LABEL).style(row_style.patch(delete_style())),
        handle.delete,
    );
}

fn text_style(task: &Task, is_selected: bool) -> Style {
    match (task.completed, is_selected) {
        (true, true) => selected_style().add_modifier(Modifier::CROSSED_OUT),
        (true, false) => done_style(),
        (false, true) => selected_style(),
        (false, false) => default_style(),
    }
}
