//! Task List Controller
//!
//! Runs the CRUD actions against the task store and keeps the view state in
//! step with it. Every successful write is followed by a full List, so the
//! rendered collection only ever shows what the store returned.


use std::rc::Rc;

use crate::api::TaskApi;
use crate::error::TaskError;
use crate::models::{Task, TaskDraft};
use crate::state::{EditMode, StateCell, TaskListState, ToastKind};

pub struct TaskListController<A, S> {
    api: Rc<A>,
    state: S,
}

impl<A, S: Clone> Clone for TaskListController<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: self.state.clone(),
        }
    }
}

impl<A: TaskApi, S: StateCell> TaskListController<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self {
            api: Rc::new(api),
            state,
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub fn state(&self) -> &S {
        &self.state
    }

    // ========================
    // Draft / Edit Mode
    // ========================

    pub fn set_name(&self, name: String) {
        self.state.write(|s| s.set_name(name));
    }

    pub fn begin_edit(&self, task: &Task) {
        log::debug!("Editing task {}", task.id);
        self.state.write(|s| s.begin_edit(task));
    }

    pub fn cancel_edit(&self) {
        self.state.write(TaskListState::cancel_edit);
    }

    // ========================
    // Store Actions
    // ========================

    /// Reload the whole collection from the store
    pub async fn refresh(&self) -> Result<(), TaskError> {
        let mut ticket = 0;
        self.state.write(|s| ticket = s.begin_list());

        match self.api.list().await {
            Ok(tasks) => {
                let count = tasks.len();
                let mut applied = false;
                self.state.write(|s| applied = s.apply_list(ticket, tasks));
                if applied {
                    log::debug!("Loaded {} tasks", count);
                } else {
                    log::debug!("Dropped superseded list response #{}", ticket);
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("Loading tasks failed: {}", err);
                self.state.write(|s| {
                    s.fail_list(ticket);
                    s.notify(ToastKind::Error, err.to_string());
                });
                Err(err)
            }
        }
    }

    /// Create or update, depending on the edit mode
    pub async fn submit(&self) -> Result<(), TaskError> {
        if self.state.read(|s| s.edit.is_editing()) {
            self.update().await
        } else {
            self.create().await
        }
    }

    pub async fn create(&self) -> Result<(), TaskError> {
        let result = self.try_create().await;
        self.surface(result)
    }

    pub async fn update(&self) -> Result<(), TaskError> {
        let result = self.try_update().await;
        self.surface(result)
    }

    /// Store `task` as completed, keeping its name
    pub async fn mark_complete(&self, task: &Task) -> Result<(), TaskError> {
        let body = TaskDraft::new(task.name.clone(), true);
        let result = self.api.update(&task.id, &body).await.map(|_| ());
        if result.is_ok() {
            log::info!("Completed task {}", task.id);
            let _ = self.refresh().await;
        }
        self.surface(result)
    }

    pub async fn delete(&self, id: &str) -> Result<(), TaskError> {
        let result = self.api.delete(id).await;
        if result.is_ok() {
            log::info!("Deleted task {}", id);
            self.state.write(|s| {
                if s.edit.target() == Some(id) {
                    s.cancel_edit();
                }
                s.notify(ToastKind::Success, "Task deleted");
            });
            let _ = self.refresh().await;
        }
        self.surface(result)
    }

    async fn try_create(&self) -> Result<(), TaskError> {
        let draft = self.state.read(|s| s.draft.clone());
        let body = TaskDraft::new(draft.name, false).validated(TaskError::EmptyDraft)?;

        let created = self.api.create(&body).await?;
        log::info!("Created task {}", created.id);
        self.state.write(|s| {
            s.clear_name();
            s.notify(ToastKind::Success, "Task added successfully");
        });
        let _ = self.refresh().await;
        Ok(())
    }

    async fn try_update(&self) -> Result<(), TaskError> {
        let (edit, draft) = self.state.read(|s| (s.edit.clone(), s.draft.clone()));
        let EditMode::Editing { target, completed } = edit else {
            return Err(TaskError::NotEditing);
        };
        let body = TaskDraft::new(draft.name, completed).validated(TaskError::EmptyEdit)?;

        self.api.update(&target, &body).await?;
        log::info!("Updated task {}", target);
        self.state.write(|s| {
            s.finish_edit();
            s.notify(ToastKind::Info, "Task Edited");
        });
        let _ = self.refresh().await;
        Ok(())
    }

    /// Show a failed action to the user and hand the result back
    fn surface(&self, result: Result<(), TaskError>) -> Result<(), TaskError> {
        if let Err(err) = &result {
            if !err.is_validation() {
                log::warn!("Task action failed: {}", err);
            }
            let message = err.to_string();
            self.state.write(|s| {
                s.notify(ToastKind::Error, message);
            });
        }
        result
    }
}
