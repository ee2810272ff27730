use super::enums::{FocusTarget, NavDirection};
use super::list::TaskList;
use super::task::TaskId;

/// Rows that currently have an on-screen element able to take focus
pub trait RenderedRows {
    fn contains_row(&self, id: TaskId) -> bool;
}

/// Tracks the logically selected row and keeps keyboard focus in step with it.
///
/// `focus` is `None` while focus is detached: the focused row was just removed
/// and its replacement only becomes focusable once the next frame is drawn.
/// That transfer is queued in `deferred` and applied by [`Self::after_render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<TaskId>,
    focus: Option<FocusTarget>,
    deferred: Option<FocusTarget>,
}

impl Default for SelectionController {
    fn default() -> Self {
        // The input field has focus when the widget mounts
        Self {
            selected: None,
            focus: Some(FocusTarget::Input),
            deferred: None,
        }
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<TaskId> {
        self.selected
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn deferred_focus(&self) -> Option<FocusTarget> {
        self.deferred
    }

    pub fn input_focused(&self) -> bool {
        self.focus.is_some_and(|target| target.is_input())
    }

    /// Position of the selected task, `None` when nothing (or a stale id) is selected
    pub fn selected_index(&self, list: &TaskList) -> Option<usize> {
        self.selected.and_then(|id| list.position(id))
    }

    /// Click/activate a row
    pub fn activate_row(&mut self, id: TaskId, list: &TaskList) {
        if list.get(id).is_some() {
            self.select_and_focus(id);
        }
    }

    /// Move focus to the input field, dropping any row selection
    pub fn focus_input(&mut self) {
        self.selected = None;
        self.focus = Some(FocusTarget::Input);
        self.deferred = None;
    }

    /// Arrow-key navigation.
    ///
    /// Down enters the list at the first row and wraps from the last row back
    /// to the first. Up from the first row (or with nothing selected) leaves
    /// the list for the input field instead of wrapping.
    pub fn navigate(&mut self, direction: NavDirection, list: &TaskList) {
        let current = self.selected_index(list);

        match direction {
            NavDirection::Down => {
                let next = match current {
                    Some(i) => (i + 1) % list.len(),
                    None => 0,
                };
                if let Some(id) = list.id_at(next) {
                    self.select_and_focus(id);
                }
            }
            NavDirection::Up => match current {
                Some(i) if i > 0 => {
                    if let Some(id) = list.id_at(i - 1) {
                        self.select_and_focus(id);
                    }
                }
                _ => self.focus_input(),
            },
        }
    }

    /// Recompute selection after `removed` left the list.
    ///
    /// `removed_index` is its position before removal and `list` is the
    /// post-removal sequence. Selection moves to the successor, else the
    /// predecessor, else back to the input. Row focus is deferred until the
    /// next frame.
    pub fn on_removed(&mut self, removed: TaskId, removed_index: usize, list: &TaskList) {
        if self.focus == Some(FocusTarget::Row(removed)) {
            self.focus = None;
        }
        if self.deferred == Some(FocusTarget::Row(removed)) {
            self.deferred = None;
        }

        if self.selected != Some(removed) {
            return;
        }

        let successor = list.id_at(removed_index);
        let predecessor = removed_index.checked_sub(1).and_then(|i| list.id_at(i));

        match successor.or(predecessor) {
            Some(id) => {
                self.selected = Some(id);
                self.deferred = Some(FocusTarget::Row(id));
            }
            None => self.focus_input(),
        }
    }

    /// Post-render effect: apply any deferred focus transfer against the
    /// rows drawn in the frame that just finished.
    pub fn after_render(&mut self, rows: &impl RenderedRows) {
        match self.deferred.take() {
            Some(FocusTarget::Input) => self.focus = Some(FocusTarget::Input),
            Some(FocusTarget::Row(id)) if rows.contains_row(id) => {
                self.focus = Some(FocusTarget::Row(id));
            }
            Some(FocusTarget::Row(_)) => self.resync(rows),
            None if self.focus.is_none() => self.resync(rows),
            None => {}
        }
    }

    /// Selection survives frames that do not draw its row; focus stays
    /// detached and the transfer waits for a frame that does.
    fn resync(&mut self, rows: &impl RenderedRows) {
        match self.selected {
            Some(id) if rows.contains_row(id) => self.focus = Some(FocusTarget::Row(id)),
            Some(id) => self.deferred = Some(FocusTarget::Row(id)),
            None => self.focus = Some(FocusTarget::Input),
        }
    }

    fn select_and_focus(&mut self, id: TaskId) {
        self.selected = Some(id);
        self.focus = Some(FocusTarget::Row(id));
        self.deferred = None;
    }
}
