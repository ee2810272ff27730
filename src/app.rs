use crate::config::AppConfig;
use crate::domain::{FocusTarget, NavDirection, SelectionController, Task, TaskId, TaskList};
use crate::rain::GlyphRain;
use crate::ui::handles::RowHandles;

/// Everything the widget owns. Built when the TUI starts, dropped when it exits.
pub struct AppState {
    pub tasks: TaskList,
    pub selection: SelectionController,
    /// Pending text of the new-task field
    pub input: String,
    pub config: AppConfig,
    pub rain: GlyphRain,
    /// Focusable elements of the last drawn frame
    pub handles: RowHandles,
    /// First list row shown when the list is taller than its pane
    pub list_offset: usize,
    /// Animation frame counter (increments every tick)
    pub animation_frame: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            tasks: TaskList::new(),
            selection: SelectionController::new(),
            input: String::new(),
            rain: GlyphRain::new(config.glyphs),
            config,
            handles: RowHandles::new(),
            list_offset: 0,
            animation_frame: 0,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.selected().and_then(|id| self.tasks.get(id))
    }

    pub fn input_focused(&self) -> bool {
        self.selection.input_focused()
    }

    /// Add the input buffer as a new task; the buffer is cleared only on success
    pub fn submit_input(&mut self) {
        match self.tasks.add(&self.input) {
            Some(id) => {
                log::debug!("added task {} ({} total)", id, self.tasks.len());
                self.input.clear();
            }
            None => log::trace!("ignored blank task text"),
        }
    }

    /// Flip completion of a task
    pub fn toggle(&mut self, id: TaskId) {
        if self.tasks.toggle(id) {
            log::debug!("toggled task {}", id);
        } else {
            log::trace!("toggle ignored, no task {}", id);
        }
    }

    /// Remove a task and move the selection off it if it was selected
    pub fn remove(&mut self, id: TaskId) {
        let Some(removed_index) = self.tasks.remove(id) else {
            log::trace!("remove ignored, no task {}", id);
            return;
        };

        self.selection.on_removed(id, removed_index, &self.tasks);
        log::debug!(
            "removed task {} at {}, selection now {:?}",
            id,
            removed_index,
            self.selection.selected()
        );
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selection.selected() {
            self.toggle(id);
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selection.selected() {
            self.remove(id);
        }
    }

    /// Arrow-key navigation
    pub fn navigate(&mut self, direction: NavDirection) {
        self.selection.navigate(direction, &self.tasks);
        log::trace!("navigate {:?} -> {:?}", direction, self.selection.focus());
    }

    /// Click on a row
    pub fn activate_row(&mut self, id: TaskId) {
        self.selection.activate_row(id, &self.tasks);
    }

    /// Click on the input field
    pub fn focus_input(&mut self) {
        self.selection.focus_input();
    }

    pub fn input_push(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Post-render effect hook: keep the frame's handles for hit testing and
    /// apply any focus transfer that was waiting for the new rows.
    pub fn after_render(&mut self, handles: RowHandles) {
        self.handles = handles;
        if let Some(target) = self.selection.deferred_focus() {
            log::trace!("applying deferred focus to {:?}", target);
        }
        self.selection.after_render(&self.handles);
    }

    /// Row the list should keep in view: the focused row, else the selected one
    pub fn anchor_row(&self) -> Option<TaskId> {
        match self.selection.focus() {
            Some(FocusTarget::Row(id)) => Some(id),
            _ => self.selection.selected(),
        }
    }

    /// Advance the animation by one tick
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.rain.tick(self.config.tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::handles::RowHandle;
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    fn create_test_app() -> AppState {
        AppState::new(AppConfig {
            glyphs: 0,
            ..AppConfig::default()
        })
    }

    fn type_and_submit(app: &mut AppState, text: &str) {
        app.input = text.to_string();
        app.submit_input();
    }

    fn snapshot(app: &AppState) -> Vec<(String, bool)> {
        app.tasks.iter().map(|t| (t.text.clone(), t.completed)).collect()
    }

    /// Handles for every task, one row each, as the list pane would draw them
    fn drawn(app: &AppState) -> RowHandles {
        let mut handles = RowHandles::new();
        for (i, task) in app.tasks.iter().enumerate() {
            let y = i as u16;
            handles.register_row(RowHandle {
                id: task.id,
                row: Rect::new(0, y, 40, 1),
                checkbox: Rect::new(1, y, 3, 1),
                text: Rect::new(5, y, 28, 1),
                delete: Rect::new(34, y, 5, 1),
            });
        }
        handles
    }

    fn selected_text(app: &AppState) -> Option<String> {
        app.selected_task().map(|t| t.text.clone())
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert!(app.tasks.is_empty());
        assert!(app.input.is_empty());
        assert!(app.input_focused());
        assert!(app.rain.is_empty());
    }

    #[test]
    fn test_submit_clears_input() {
        let mut app = create_test_app();
        type_and_submit(&mut app, "Buy milk");

        assert_eq!(app.tasks.len(), 1);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_blank_submit_keeps_buffer() {
        let mut app = create_test_app();
        type_and_submit(&mut app, "   ");

        assert!(app.tasks.is_empty());
        assert_eq!(app.input, "   ");
    }

    #[test]
    fn test_input_editing() {
        let mut app = create_test_app();
        app.input_push('h');
        app.input_push('i');
        app.input_backspace();
        assert_eq!(app.input, "h");

        app.input_backspace();
        app.input_backspace();
        assert_eq!(app.input, "");
    }

    #[test]
    fn test_remove_unselected_keeps_selection() {
        let mut app = create_test_app();
        type_and_submit(&mut app, "a");
        type_and_submit(&mut app, "b");
        let a = app.tasks.id_at(0).unwrap();
        let b = app.tasks.id_at(1).unwrap();
        app.activate_row(b);

        app.remove(a);

        assert_eq!(app.selection.selected(), Some(b));
        assert_eq!(app.selection.focus(), Some(FocusTarget::Row(b)));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut app = create_test_app();
        type_and_submit(&mut app, "a");

        app.remove(TaskId(-1));
        app.toggle(TaskId(-1));

        assert_eq!(snapshot(&app), vec![("a".to_string(), false)]);
    }

    #[test]
    fn test_after_render_moves_focus_to_successor() {
        let mut app = create_test_app();
        type_and_submit(&mut app, "a");
        type_and_submit(&mut app, "b");
        type_and_submit(&mut app, "c");
        app.navigate(NavDirection::Down);
        app.navigate(NavDirection::Down);

        app.remove_selected();
        assert_eq!(app.selection.focus(), None);

        let handles = drawn(&app);
        app.after_render(handles);

        let c = app.tasks.id_at(1).unwrap();
        assert_eq!(app.selection.focus(), Some(FocusTarget::Row(c)));
        assert_eq!(app.anchor_row(), Some(c));
    }

    #[test]
    fn test_anchor_row_follows_selection_while_focus_detached() {
        let mut app = create_test_app();
        type_and_submit(&mut app, "a");
        type_and_submit(&mut app, "b");
        app.navigate(NavDirection::Down);

        app.remove_selected();

        assert_eq!(app.anchor_row(), app.tasks.id_at(0));
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut app = create_test_app();
        app.tick();
        app.tick();
        assert_eq!(app.animation_frame, 2);
    }

    #[test]
    fn test_buy_milk_walk_dog_scenario() {
        let mut app = create_test_app();

        type_and_submit(&mut app, "Buy milk");
        type_and_submit(&mut app, "Walk dog");
        assert_eq!(
            snapshot(&app),
            vec![("Buy milk".to_string(), false), ("Walk dog".to_string(), false)]
        );

        let first = app.tasks.id_at(0).unwrap();
        app.toggle(first);
        assert_eq!(
            snapshot(&app),
            vec![("Buy milk".to_string(), true), ("Walk dog".to_string(), false)]
        );

        app.navigate(NavDirection::Down);
        assert_eq!(selected_text(&app).as_deref(), Some("Buy milk"));
        app.navigate(NavDirection::Down);
        assert_eq!(selected_text(&app).as_deref(), Some("Walk dog"));
        app.navigate(NavDirection::Down);
        assert_eq!(selected_text(&app).as_deref(), Some("Buy milk"));

        app.remove_selected();
        assert_eq!(snapshot(&app), vec![("Walk dog".to_string(), false)]);
        assert_eq!(selected_text(&app).as_deref(), Some("Walk dog"));

        let handles = drawn(&app);
        app.after_render(handles);
        let walk_dog = app.tasks.id_at(0).unwrap();
        assert_eq!(app.selection.focus(), Some(FocusTarget::Row(walk_dog)));
    }
}
