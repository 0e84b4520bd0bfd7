//! Habit Tracker App
//!
//! Tabbed shell around the today view and the all-tasks view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::TauriApi;
use crate::components::{AllTasksList, TodayTasksList, Toaster};
use crate::config::load_ui_config;
use crate::seed::example_tasks;
use crate::store::{AppState, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Today,
    AllTasks,
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(example_tasks()));
    provide_context(store);

    let (tab, set_tab) = signal(Tab::Today);

    // Load UI config once
    Effect::new(move |_| {
        spawn_local(async move {
            let config = load_ui_config(&TauriApi).await;
            *store.config().write() = config;
        });
    });

    let tab_class = move |t: Tab| if tab.get() == t { "tab-btn active" } else { "tab-btn" };

    view! {
        <div class="app-layout">
            <nav class="tab-bar">
                <button class=move || tab_class(Tab::Today) on:click=move |_| set_tab.set(Tab::Today)>
                    "Today"
                </button>
                <button class=move || tab_class(Tab::AllTasks) on:click=move |_| set_tab.set(Tab::AllTasks)>
                    "All tasks"
                </button>
            </nav>

            <main class="main-content">
                {move || match tab.get() {
                    Tab::Today => view! { <TodayTasksList /> }.into_any(),
                    Tab::AllTasks => view! { <AllTasksList /> }.into_any(),
                }}
            </main>

            <Toaster />
        </div>
    }
}
