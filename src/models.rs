//! Frontend Models
//!
//! Data structures matching the remote task store.

use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the store, never changes after creation
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

/// Editable fields of a task, also the Create/Update request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    pub completed: bool,
}

impl TaskDraft {
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
        }
    }

    /// Body to send for this draft, or `empty` if the name is blank
    pub fn validated(&self, empty: TaskError) -> Result<TaskDraft, TaskError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(empty);
        }
        Ok(TaskDraft::new(name, self.completed))
    }
}

/// Completed subset of a task collection, in display order
pub fn completed_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|task| task.completed).collect()
}
