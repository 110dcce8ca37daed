//! Task List Component
//!
//! Form, counters, loading indicator and task rows.

use leptos::prelude::*;

use crate::components::{TaskForm, TaskRow};
use crate::context::use_task_context;
use crate::models::{completed_tasks, Task};

const LOADER_IMG: &str = "assets/loader.svg";

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_task_context();
    let state = ctx.state;

    // Initial load
    Effect::new(move |_| {
        ctx.run(|ctrl| async move {
            let _ = ctrl.refresh().await;
        });
    });

    let on_input = Callback::new(move |name: String| ctx.controller().set_name(name));
    let on_submit = Callback::new(move |_: ()| {
        ctx.run(|ctrl| async move {
            let _ = ctrl.submit().await;
        });
    });
    let on_cancel = Callback::new(move |_: ()| ctx.controller().cancel_edit());
    let on_delete = Callback::new(move |id: String| {
        ctx.run(|ctrl| async move {
            let _ = ctrl.delete(&id).await;
        });
    });
    let on_edit = Callback::new(move |task: Task| ctx.controller().begin_edit(&task));
    let on_complete = Callback::new(move |task: Task| {
        ctx.run(|ctrl| async move {
            let _ = ctrl.mark_complete(&task).await;
        });
    });

    let name = Signal::derive(move || state.with(|s| s.draft.name.clone()));
    let is_editing = Signal::derive(move || state.with(|s| s.edit.is_editing()));
    // Rows only re-render when the collection or loading flag changes, not on typing
    let tasks = Memo::new(move |_| state.with(|s| s.tasks.clone()));
    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading));
    let completed_count = Memo::new(move |_| tasks.with(|t| completed_tasks(t).len()));

    view! {
        <div>
            <h2>"Task Manager"</h2>
            <TaskForm
                name=name
                is_editing=is_editing
                on_input=on_input
                on_submit=on_submit
                on_cancel=on_cancel
            />

            <Show when=move || tasks.with(|t| !t.is_empty())>
                <div class="--flex-between --pb">
                    <p>
                        <b>"Total Tasks: "</b>
                        {move || tasks.with(Vec::len)}
                    </p>
                    <p>
                        <b>"Completed Tasks: "</b>
                        {move || completed_count.get()}
                    </p>
                </div>
            </Show>
            <hr />

            <Show when=move || is_loading.get()>
                <div class="--flex-center">
                    <img src=LOADER_IMG alt="loading" />
                </div>
            </Show>

            {move || {
                let tasks = tasks.get();
                if !is_loading.get() && tasks.is_empty() {
                    view! { <p class="--py">"No Task Found, Add a Task"</p> }.into_any()
                } else {
                    tasks
                        .into_iter()
                        .enumerate()
                        .map(|(index, task)| view! {
                            <TaskRow
                                task=task
                                index=index
                                on_delete=on_delete
                                on_edit=on_edit
                                on_complete=on_complete
                            />
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
