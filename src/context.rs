//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTaskApi;
use crate::controller::TaskListController;
use crate::state::TaskListState;

pub type AppController = TaskListController<HttpTaskApi, RwSignal<TaskListState>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TaskContext {
    /// View state rendered by the task list
    pub state: RwSignal<TaskListState>,
    /// Controller lives on the UI thread only
    controller: StoredValue<AppController, LocalStorage>,
}

impl TaskContext {
    pub fn new(state: RwSignal<TaskListState>, controller: AppController) -> Self {
        Self {
            state,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Spawn an async controller action
    pub fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.controller()));
    }
}

/// Get the task context, provided by `App`
pub fn use_task_context() -> TaskContext {
    use_context::<TaskContext>().expect("TaskContext should be provided")
}
