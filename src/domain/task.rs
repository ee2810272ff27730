use chrono::Local;
use std::fmt;

/// Unique task identifier, derived from the creation timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Hands out strictly increasing ids based on wall-clock milliseconds.
///
/// Two tasks created within the same millisecond (or after the clock stepped
/// backwards) get `last + 1` instead of a duplicate timestamp.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    /// Next id using the current local time
    pub fn next_id(&mut self) -> TaskId {
        self.next_at(Local::now().timestamp_millis())
    }

    /// Next id given a timestamp in milliseconds
    pub fn next_at(&mut self, now_millis: i64) -> TaskId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        TaskId(id)
    }
}
