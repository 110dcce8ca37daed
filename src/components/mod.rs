//! UI Components
//!
//! Leptos components for the task list.

mod task_form;
mod task_list;
mod task_row;
mod toast_stack;

pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use toast_stack::ToastStack;
