//! All Tasks List
//!
//! Category grid over the in-memory task list. A card opens the category's
//! tasks: swipe a row to delete it, tap it to edit.

use leptos::prelude::*;

use crate::components::{AddOrEditTaskDialog, AddTaskButton, DialogMode, SwipeableTask};
use crate::models::{Category, Task};
use crate::store::{store_notify, store_remove_task, use_app_store, AppStateStoreFields};
use crate::tasks::{group_by_category, should_close_detail};
use crate::toast::{Toast, DELETED_MESSAGE};

/// "(1 task)" / "(3 tasks)"
fn task_count_label(count: usize) -> String {
    format!("({} task{})", count, if count == 1 { "" } else { "s" })
}

/// One row in a category detail view, with its own edit dialog
#[component]
fn AllTaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let edit_open = RwSignal::new(false);

    let id = task.id.clone();
    let on_swipe = Callback::new(move |_| {
        if store_remove_task(&store, &id).is_some() {
            store_notify(&store, Toast::success(DELETED_MESSAGE));
        }
    });
    let on_tap = Callback::new(move |_| edit_open.set(true));

    view! {
        <SwipeableTask task=task.clone() hint="🗑" enabled=true on_swipe=on_swipe on_tap=on_tap />
        <AddOrEditTaskDialog open=edit_open mode=DialogMode::Edit(task) />
    }
}

#[component]
pub fn AllTasksList() -> impl IntoView {
    let store = use_app_store();
    let sheet_open = RwSignal::new(false);
    let (selected, set_selected) = signal::<Option<Category>>(None);

    let buckets = Memo::new(move |_| group_by_category(&store.tasks().read()));

    // Close the detail view once its last task is gone
    Effect::new(move |_| {
        if should_close_detail(&buckets.read(), selected.get()) {
            set_selected.set(None);
        }
    });

    let cards = move || {
        buckets
            .read()
            .non_empty()
            .map(|(category, tasks)| (category, tasks.len()))
            .collect::<Vec<_>>()
    };
    let detail_tasks = move || {
        selected
            .get()
            .map(|category| buckets.read().get(category).to_vec())
            .unwrap_or_default()
    };

    view! {
        <div class="all-tasks">
            <Show
                when=move || !store.tasks().read().is_empty()
                fallback=|| view! { <div class="list-status">"Click the + icon to add your first task!"</div> }
            >
                <div class="category-grid">
                    <For
                        each=cards
                        key=|entry| *entry
                        children=move |(category, count)| view! {
                            <div class="category-card" on:click=move |_| set_selected.set(Some(category))>
                                <p class="category-label">{category.label()}</p>
                                <p class="category-count">{task_count_label(count)}</p>
                            </div>
                        }
                    />
                </div>
            </Show>
        </div>

        <AddTaskButton open=sheet_open />
        <AddOrEditTaskDialog open=sheet_open mode=DialogMode::Add />

        <Show when=move || selected.get().is_some()>
            <div class="dialog-backdrop" on:click=move |_| set_selected.set(None)>
                <div class="dialog category-detail" on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">
                        {move || selected.get().map(|c| format!("{} Tasks", c.label()))}
                    </h2>
                    <p class="dialog-hint">"Swipe to delete a task, Tap to edit"</p>
                    <For
                        each=detail_tasks
                        key=|task| task.clone()
                        children=|task| view! { <AllTaskRow task=task /> }
                    />
                </div>
            </div>
        </Show>
    }
}
