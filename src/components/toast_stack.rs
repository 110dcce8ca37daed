//! Toast Stack Component
//!
//! Success, info and error notifications in the corner of the page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_task_context;
use crate::state::Toast;

const TOAST_TIMEOUT_MS: u32 = 3_000;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_task_context();
    let state = ctx.state;

    view! {
        <div class="toast-stack">
            <For
                each=move || state.with(|s| s.toasts.clone())
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let state = use_task_context().state;
    let id = toast.id;

    // Auto-dismiss
    spawn_local(async move {
        TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        state.update(|s| s.dismiss_toast(id));
    });

    view! {
        <div
            class=toast.kind.css_class()
            role="status"
            on:click=move |_| state.update(|s| s.dismiss_toast(id))
        >
            {toast.message}
        </div>
    }
}
