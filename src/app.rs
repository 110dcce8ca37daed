//! Task Manager App
//!
//! Root component: wires the HTTP store, view state and controller, then
//! renders the task list and its notifications.

use leptos::prelude::*;

use crate::api::HttpTaskApi;
use crate::components::{TaskList, ToastStack};
use crate::config::ApiConfig;
use crate::context::TaskContext;
use crate::controller::TaskListController;
use crate::state::TaskListState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::resolve();
    log::info!("Using task store at {}", config.base_url);

    let state = RwSignal::new(TaskListState::new());
    let controller = TaskListController::new(HttpTaskApi::new(&config), state);
    provide_context(TaskContext::new(state, controller));

    view! {
        <div class="app">
            <div class="task-container">
                <TaskList />
            </div>
            <ToastStack />
        </div>
    }
}
