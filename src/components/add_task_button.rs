//! Floating "+" button that opens the add dialog.

use leptos::prelude::*;

#[component]
pub fn AddTaskButton(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <button class="add-task-btn" title="Add task" on:click=move |_| open.set(true)>
            "+"
        </button>
    }
}
