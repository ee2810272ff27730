pub mod enums;
pub mod list;
pub mod selection;
pub mod task;

pub use enums::{FocusTarget, NavDirection};
pub use list::TaskList;
pub use selection::{RenderedRows, SelectionController};
pub use task::{Task, TaskId};
