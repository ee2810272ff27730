use super::task::TaskId;

/// Element that should receive keyboard events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The new-task text field
    Input,
    /// A rendered list row
    Row(TaskId),
}

impl FocusTarget {
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input)
    }

    pub fn row(&self) -> Option<TaskId> {
        match self {
            Self::Row(id) => Some(*id),
            Self::Input => None,
        }
    }
}

/// Arrow-key navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
}
