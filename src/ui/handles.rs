use crate::domain::{RenderedRows, TaskId};
use ratatui::layout::Rect;

/// Clickable part of a list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPart {
    Checkbox,
    Text,
    Delete,
    /// Padding around the controls
    Body,
}

/// What sits under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    AddButton,
    Row(TaskId, RowPart),
}

/// Screen rectangles of one drawn row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHandle {
    pub id: TaskId,
    pub row: Rect,
    pub checkbox: Rect,
    pub text: Rect,
    pub delete: Rect,
}

impl RowHandle {
    fn part_at(&self, x: u16, y: u16) -> Option<RowPart> {
        if !contains(self.row, x, y) {
            return None;
        }
        let part = if contains(self.checkbox, x, y) {
            RowPart::Checkbox
        } else if contains(self.delete, x, y) {
            RowPart::Delete
        } else if contains(self.text, x, y) {
            RowPart::Text
        } else {
            RowPart::Body
        };
        Some(part)
    }
}

/// Focusable elements drawn in the latest frame. Rebuilt on every render;
/// only ever refers to tasks by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowHandles {
    pub input: Option<Rect>,
    pub add_button: Option<Rect>,
    pub rows: Vec<RowHandle>,
}

impl RowHandles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_row(&mut self, handle: RowHandle) {
        self.rows.push(handle);
    }

    pub fn row(&self, id: TaskId) -> Option<&RowHandle> {
        self.rows.iter().find(|h| h.id == id)
    }

    /// Resolve a mouse position against the frame
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        if self.add_button.is_some_and(|r| contains(r, x, y)) {
            return Some(Hit::AddButton);
        }
        if self.input.is_some_and(|r| contains(r, x, y)) {
            return Some(Hit::Input);
        }
        self.rows
            .iter()
            .find_map(|h| h.part_at(x, y).map(|part| Hit::Row(h.id, part)))
    }
}

impl RenderedRows for RowHandles {
    fn contains_row(&self, id: TaskId) -> bool {
        self.row(id).is_some()
    }
}

/// Whether a cell lies inside a rectangle
pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}
