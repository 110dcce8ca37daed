//! Task List View State
//!
//! Everything the task list renders, owned by one value and changed only
//! through the methods below.

use leptos::prelude::*;

use crate::models::{Task, TaskDraft};

/// Whether the form creates a new task or edits an existing one
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditMode {
    #[default]
    Idle,
    Editing {
        target: String,
        /// Completion of the target when editing began, resent unchanged on update
        completed: bool,
    },
}

impl EditMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            EditMode::Editing { target, .. } => Some(target),
            EditMode::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// A user-visible notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct TaskListState {
    /// Collection from the newest successful List
    pub tasks: Vec<Task>,
    pub draft: TaskDraft,
    pub edit: EditMode,
    pub is_loading: bool,
    pub toasts: Vec<Toast>,
    list_ticket: u64,
    next_toast_id: u64,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn clear_name(&mut self) {
        self.draft.name.clear();
    }

    /// Load a task into the draft and switch the form to editing
    pub fn begin_edit(&mut self, task: &Task) {
        self.draft = TaskDraft::new(task.name.clone(), false);
        self.edit = EditMode::Editing {
            target: task.id.clone(),
            completed: task.completed,
        };
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditMode::Idle;
        self.clear_name();
    }

    /// Successful update: back to create mode with an empty name
    pub fn finish_edit(&mut self) {
        self.cancel_edit();
    }

    /// Start a List request and return its ticket
    pub fn begin_list(&mut self) -> u64 {
        self.list_ticket += 1;
        self.is_loading = true;
        self.list_ticket
    }

    /// Apply a List response. Responses to superseded requests are dropped.
    pub fn apply_list(&mut self, ticket: u64, tasks: Vec<Task>) -> bool {
        if ticket != self.list_ticket {
            return false;
        }
        self.tasks = tasks;
        self.is_loading = false;
        true
    }

    /// A List request failed; existing tasks are kept
    pub fn fail_list(&mut self, ticket: u64) {
        if ticket == self.list_ticket {
            self.is_loading = false;
        }
    }

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Owner of a `TaskListState` that the controller reads and mutates
pub trait StateCell: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&TaskListState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut TaskListState));
}

impl StateCell for RwSignal<TaskListState> {
    fn read<R>(&self, f: impl FnOnce(&TaskListState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut TaskListState)) {
        self.update(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::completed_tasks;

    fn make_task(id: &str, name: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            completed,
        }
    }

    #[test]
    fn test_begin_edit_loads_draft() {
        let mut state = TaskListState::new();
        state.begin_edit(&make_task("a1", "Walk dog", true));

        assert_eq!(state.draft, TaskDraft::new("Walk dog", false));
        assert_eq!(state.edit.target(), Some("a1"));
        assert_eq!(
            state.edit,
            EditMode::Editing { target: "a1".to_string(), completed: true }
        );
    }

    #[test]
    fn test_cancel_edit_returns_to_idle() {
        let mut state = TaskListState::new();
        state.begin_edit(&make_task("a1", "Walk dog", false));
        state.cancel_edit();

        assert!(!state.edit.is_editing());
        assert!(state.draft.name.is_empty());
    }

    #[test]
    fn test_apply_list_replaces_tasks() {
        let mut state = TaskListState::new();
        let ticket = state.begin_list();
        assert!(state.is_loading);

        let applied = state.apply_list(
            ticket,
            vec![
                make_task("1", "A", false),
                make_task("2", "B", true),
                make_task("3", "C", false),
            ],
        );

        assert!(applied);
        assert!(!state.is_loading);
        assert_eq!(state.tasks.len(), 3);
        assert_eq!(completed_tasks(&state.tasks).len(), 1);
    }

    #[test]
    fn test_stale_list_response_is_dropped() {
        let mut state = TaskListState::new();
        let first = state.begin_list();
        let second = state.begin_list();

        // Newer response lands first
        assert!(state.apply_list(second, vec![make_task("1", "A", true)]));
        assert!(!state.apply_list(first, vec![]));

        assert_eq!(state.tasks.len(), 1);
        assert_eq!(completed_tasks(&state.tasks).len(), 1);
    }

    #[test]
    fn test_stale_failure_keeps_loading() {
        let mut state = TaskListState::new();
        let first = state.begin_list();
        let _second = state.begin_list();

        state.fail_list(first);
        assert!(state.is_loading);
    }

    #[test]
    fn test_fail_list_keeps_tasks() {
        let mut state = TaskListState::new();
        let ticket = state.begin_list();
        state.apply_list(ticket, vec![make_task("1", "A", false)]);

        let ticket = state.begin_list();
        state.fail_list(ticket);

        assert!(!state.is_loading);
        assert_eq!(state.tasks.len(), 1);
    }

    #[test]
    fn test_toasts() {
        let mut state = TaskListState::new();
        let first = state.notify(ToastKind::Success, "Task deleted");
        let second = state.notify(ToastKind::Error, "Network Error");
        assert_ne!(first, second);
        assert_eq!(state.toasts.len(), 2);

        state.dismiss_toast(first);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "Network Error");
        assert_eq!(state.toasts[0].kind.css_class(), "toast toast-error");
    }
}
