//! Task Row Component
//!
//! One numbered task with complete, edit and delete actions.

use leptos::prelude::*;

use crate::models::Task;

#[component]
pub fn TaskRow(
    task: Task,
    /// Zero-based position, shown from 1
    index: usize,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_complete: Callback<Task>,
) -> impl IntoView {
    let row_class = if task.completed { "task completed" } else { "task" };
    let id = task.id.clone();
    let name = task.name.clone();
    let edit_task = task.clone();

    view! {
        <div class=row_class>
            <p>
                <b>{index + 1}". "</b>
                {name}
            </p>
            <div class="task-icons">
                <button
                    class="complete-btn"
                    title="Mark complete"
                    on:click=move |_| on_complete.run(task.clone())
                >
                    "✓"
                </button>
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| on_edit.run(edit_task.clone())
                >
                    "✎"
                </button>
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
