//! UI Components
//!
//! Leptos components for the task page.

mod date_header;
mod new_task_form;
mod task_row;
mod task_list;
mod list_footer;

pub use date_header::DateHeader;
pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
pub use task_list::TaskList;
pub use list_footer::ListFooter;
