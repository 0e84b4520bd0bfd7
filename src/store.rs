//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::UiConfig;
use crate::completion::TodayBoard;
use crate::models::{Task, TaskId};
use crate::tasks::{self, sort_by_category, TaskError};
use crate::toast::{Toast, ToastSlot};
use crate::validation::TaskDraft;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All recurring tasks (in-memory, seeded from the example set)
    pub tasks: Vec<Task>,
    /// Today's tasks from the backend, with optimistic completions applied
    pub today: TodayBoard,
    /// The single visible notification
    pub toast: ToastSlot,
    pub config: UiConfig,
}

impl AppState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Create a task from an accepted draft and insert it in category order
pub fn store_add_task(store: &AppStore, draft: &TaskDraft) -> Result<(), TaskError> {
    let task = tasks::task_from_draft(draft)?;
    tasks::add_task(&mut store.tasks().write(), task, sort_by_category)
}

/// Apply a draft to the task with the given ID
pub fn store_edit_task(store: &AppStore, id: &TaskId, draft: &TaskDraft) -> Result<(), TaskError> {
    tasks::edit_task(&mut store.tasks().write(), id, draft, sort_by_category)
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, id: &TaskId) -> Option<Task> {
    tasks::delete_task(&mut store.tasks().write(), id)
}

/// Show a toast, replacing the current one, and hide it after the configured duration
pub fn store_notify(store: &AppStore, toast: Toast) {
    let generation = store.toast().write().show(toast);
    let duration = store.config().get_untracked().toast_duration_ms;
    let store = *store;
    Timeout::new(duration, move || {
        store.toast().write().dismiss(generation);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_added_task_joins_all_tasks_not_today() {
        let store = Store::new(AppState::default());
        let mut draft = TaskDraft::default();
        draft.set_text("Stretch");
        draft.set_category(Category::Daily);

        store_add_task(&store, &draft).unwrap();

        assert_eq!(store.tasks().read_untracked().len(), 1);
        assert_eq!(store.tasks().read_untracked()[0].text, "Stretch");
        assert!(store.today().read_untracked().visible().is_empty());
    }

    #[test]
    fn test_remove_task() {
        let store = Store::new(AppState::new(crate::seed::example_tasks()));
        let id = store.tasks().read_untracked()[0].id.clone();

        assert!(store_remove_task(&store, &id).is_some());
        assert!(store_remove_task(&store, &id).is_none());
    }
}
