//! Add / Edit Task Dialog
//!
//! One form for both creating a task and editing an existing one. The submit
//! button stays disabled while the draft does not validate.

use leptos::prelude::*;

use crate::components::recurrence_inputs::{DailyInputs, MonthlyInputs, WeeklyInputs, XDaysInputs};
use crate::models::{Category, Task, MAX_TASK_TEXT_LEN};
use crate::store::{store_add_task, store_edit_task, use_app_store};
use crate::validation::TaskDraft;

/// Which flow the dialog runs
#[derive(Clone, Debug)]
pub enum DialogMode {
    Add,
    Edit(Task),
}

#[component]
pub fn AddOrEditTaskDialog(open: RwSignal<bool>, mode: DialogMode) -> impl IntoView {
    let store = use_app_store();

    let initial = match &mode {
        DialogMode::Add => TaskDraft::default(),
        DialogMode::Edit(task) => TaskDraft::from_task(task),
    };
    let draft = RwSignal::new(initial.clone());
    // Submit also requires the draft to parse (e.g. an interval of "abc" does not)
    let is_valid = Memo::new(move |_| draft.with(|d| d.is_valid() && d.to_recurrence().is_ok()));

    let is_add = matches!(mode, DialogMode::Add);
    let title = match &mode {
        DialogMode::Add => "Add New Task".to_string(),
        DialogMode::Edit(task) => format!("Edit Task: {}", task.text),
    };
    let edit_id = match &mode {
        DialogMode::Add => None,
        DialogMode::Edit(task) => Some(task.id.clone()),
    };

    // Closing an add dialog throws the input away; an edit dialog reopens with the task's values
    let close = move || {
        open.set(false);
        if is_add {
            draft.update(TaskDraft::reset);
        } else {
            draft.set(initial.clone());
        }
    };
    let close = StoredValue::new(close);

    let submit = move |_: web_sys::MouseEvent| {
        if !is_valid.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let result = match &edit_id {
            None => store_add_task(&store, &current),
            Some(id) => store_edit_task(&store, id, &current),
        };
        match result {
            Ok(()) => {
                open.set(false);
                if is_add {
                    draft.update(TaskDraft::reset);
                }
            }
            Err(e) => log::warn!("task not saved: {}", e),
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close.with_value(|f| f())>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">{title.clone()}</h2>

                    <input
                        type="text"
                        maxlength=MAX_TASK_TEXT_LEN.to_string()
                        placeholder=format!("Enter task name (max {} chars)", MAX_TASK_TEXT_LEN)
                        prop:value=move || draft.with(|d| d.text.clone())
                        on:input=move |ev| {
                            let input = event_target_value(&ev);
                            draft.update(|d| d.set_text(&input));
                        }
                    />

                    <select
                        prop:value=move || draft.with(|d| d.category.map(|c| c.as_str()).unwrap_or_default())
                        on:change=move |ev| {
                            if let Ok(category) = event_target_value(&ev).parse::<Category>() {
                                draft.update(|d| d.set_category(category));
                            }
                        }
                    >
                        <option value="" disabled=true>"Select repetition"</option>
                        {Category::ALL.iter().map(|category| view! {
                            <option value=category.as_str()>{category.label()}</option>
                        }).collect_view()}
                    </select>

                    {move || match draft.with(|d| d.category) {
                        Some(Category::Daily) => view! { <DailyInputs draft=draft /> }.into_any(),
                        Some(Category::Weekly) => view! { <WeeklyInputs draft=draft /> }.into_any(),
                        Some(Category::Monthly) => view! { <MonthlyInputs draft=draft /> }.into_any(),
                        Some(Category::XDays) => view! { <XDaysInputs draft=draft /> }.into_any(),
                        None => ().into_any(),
                    }}

                    <div class="dialog-footer">
                        <button
                            class="primary-btn"
                            disabled=move || !is_valid.get()
                            on:click=submit.clone()
                        >
                            {if is_add { "Add Task" } else { "Save" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
