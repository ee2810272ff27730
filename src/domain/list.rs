use super::task::{IdGenerator, Task, TaskId};

/// Ordered task sequence. Insertion order is display and navigation order.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task with the trimmed text.
    ///
    /// Returns `None` (and leaves the list untouched) when the text is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, text.to_string()));
        Some(id)
    }

    /// Flip the completion flag of a task. Returns false for unknown ids.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    /// Remove a task, returning the position it held before removal
    pub fn remove(&mut self, id: TaskId) -> Option<usize> {
        let index = self.position(id)?;
        self.tasks.remove(index);
        Some(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.tasks.get(index).map(|t| t.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(list: &TaskList) -> Vec<(String, bool)> {
        list.iter().map(|t| (t.text.clone(), t.completed)).collect()
    }

    fn row(text: &str, completed: bool) -> (String, bool) {
        (text.to_string(), completed)
    }

    fn list_of(items: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for item in items {
            list.add(item);
        }
        list
    }

    #[test]
    fn test_add_appends_uncompleted_task() {
        let mut list = TaskList::new();
        for (n, text) in ["one", "two", "three"].iter().enumerate() {
            let id = list.add(text).unwrap();
            assert_eq!(list.len(), n + 1);
            assert_eq!(list.id_at(n), Some(id));
            assert!(!list.get(id).unwrap().completed);
        }
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TaskList::new();
        let id = list.add("  Walk dog \t").unwrap();
        assert_eq!(list.get(id).unwrap().text, "Walk dog");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = list_of(&["keep"]);
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add("\t\n"), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let list = list_of(&["a", "b", "c", "d", "e"]);
        let mut ids: Vec<TaskId> = list.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut list = list_of(&["a", "b"]);
        let id = list.id_at(1).unwrap();

        assert!(list.toggle(id));
        assert_eq!(texts(&list), vec![row("a", false), row("b", true)]);

        assert!(list.toggle(id));
        assert_eq!(texts(&list), vec![row("a", false), row("b", false)]);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = list_of(&["a"]);
        assert!(!list.toggle(TaskId(-1)));
        assert_eq!(texts(&list), vec![row("a", false)]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        let id = list.id_at(1).unwrap();

        assert_eq!(list.remove(id), Some(1));
        assert_eq!(list.len(), 3);
        assert_eq!(
            texts(&list),
            vec![row("a", false), row("c", false), row("d", false)]
        );
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = list_of(&["a", "b"]);
        let id = list.id_at(0).unwrap();
        list.remove(id);

        assert_eq!(list.remove(id), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_completed_count() {
        let mut list = list_of(&["a", "b", "c"]);
        list.toggle(list.id_at(0).unwrap());
        list.toggle(list.id_at(2).unwrap());
        assert_eq!(list.completed_count(), 2);
    }
}
