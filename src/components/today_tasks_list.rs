//! Today Tasks List
//!
//! Today's tasks from the backend. Swiping a row completes it optimistically;
//! the backend confirmation runs in the background and a rejection restores
//! the server version of the task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{TaskApi, TauriApi};
use crate::completion::finish_and_refresh;
use crate::components::{AddOrEditTaskDialog, AddTaskButton, DialogMode, SwipeableTask};
use crate::models::{Recurrence, Task, TaskId};
use crate::store::{store_notify, use_app_store, AppStateStoreFields, AppStore};
use crate::toast::{Toast, FINISHED_ICON, FINISHED_MESSAGE, FINISH_FAILED_MESSAGE};

/// Start a completion for `id` and settle it once the backend answers
fn complete_task(store: AppStore, id: TaskId) {
    let effect = match store.today().write().begin(&id) {
        Ok(effect) => effect,
        Err(e) => {
            log::debug!("swipe ignored: {}", e);
            return;
        }
    };
    log::info!("completing task {}: {:?}", id, effect);

    spawn_local(async move {
        match finish_and_refresh(&TauriApi, &id).await {
            Ok(refreshed) => {
                store.today().write().confirm(&id, refreshed);
                store_notify(&store, Toast::success(FINISHED_MESSAGE).with_icon(FINISHED_ICON));
            }
            Err(e) => {
                log::error!("finishing task {} failed: {}", id, e);
                store.today().write().rollback(&id);
                store_notify(&store, Toast::error(FINISH_FAILED_MESSAGE));
            }
        }
    });
}

/// Row key; a counter change builds a fresh row so it returns to position
fn row_key(task: &Task) -> (TaskId, u32) {
    let done = match task.recurrence {
        Recurrence::Daily { done, .. } => done,
        _ => 0,
    };
    (task.id.clone(), done)
}

#[component]
pub fn TodayTasksList() -> impl IntoView {
    let store = use_app_store();
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let sheet_open = RwSignal::new(false);

    // Load today's tasks on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match TauriApi.get_todays_tasks().await {
                Ok(tasks) => {
                    set_load_error.set(None);
                    store.today().write().hydrate(tasks);
                }
                Err(e) => {
                    log::error!("loading today's tasks failed: {}", e);
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let is_loading = move || !store.today().read().is_loaded() && load_error.get().is_none();
    let is_empty = move || store.today().read().visible().is_empty();
    let visible = move || store.today().read().visible().to_vec();

    view! {
        {move || {
            if is_loading() {
                view! { <div class="list-status">"Loading..."</div> }.into_any()
            } else if let Some(err) = load_error.get() {
                view! { <div class="list-status error">{format!("Could not load tasks: {}", err)}</div> }.into_any()
            } else if is_empty() {
                view! { <div class="list-status">"No tasks left for today!"</div> }.into_any()
            } else {
                view! {
                    <div class="today-list">
                        <For
                            each=visible
                            key=row_key
                            children=move |task| {
                                let id = task.id.clone();
                                let pending_id = id.clone();
                                let enabled = Signal::derive(move || !store.today().read().is_pending(&pending_id));
                                let on_swipe = Callback::new(move |_| complete_task(store, id.clone()));
                                view! {
                                    <SwipeableTask task=task hint="✓" enabled=enabled on_swipe=on_swipe />
                                }
                            }
                        />
                    </div>
                }.into_any()
            }
        }}

        // New tasks join the all-tasks list; today's list only changes through the backend
        <AddTaskButton open=sheet_open />
        <AddOrEditTaskDialog open=sheet_open mode=DialogMode::Add />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_changes_with_daily_counter() {
        let mut task = Task::new(TaskId::new("w"), "Water", Recurrence::Daily { done: 1, target: 3 });
        let before = row_key(&task);
        task.recurrence = Recurrence::Daily { done: 2, target: 3 };
        assert_ne!(before, row_key(&task));
        assert_eq!(before.0, row_key(&task).0);
    }
}
