//! UI Components
//!
//! Leptos components for the header and the task list.

mod new_task_input;
mod status_header;
mod todo_items;
mod todo_row;

pub use new_task_input::NewTaskInput;
pub use status_header::StatusHeader;
pub use todo_items::TodoItems;
pub use todo_row::TodoRow;
