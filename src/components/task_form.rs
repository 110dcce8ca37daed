//! Task Form Component
//!
//! Single-line form that adds a task, or renames the one being edited.

use leptos::prelude::*;

#[component]
pub fn TaskForm(
    #[prop(into)] name: Signal<String>,
    #[prop(into)] is_editing: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="task-form" on:submit=submit>
            <input
                type="text"
                name="name"
                placeholder="Add a Task"
                prop:value=move || name.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button type="submit">
                {move || if is_editing.get() { "Edit" } else { "Add" }}
            </button>
            <Show when=move || is_editing.get()>
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
