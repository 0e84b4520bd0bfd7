//! Recurrence Inputs
//!
//! Category-specific inputs of the add/edit dialog. Each writes its value
//! into the shared draft as the raw string the validator reads.

use chrono::Weekday;
use leptos::prelude::*;

use crate::models::MonthDay;
use crate::validation::TaskDraft;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Comma separated weekday list with `day` switched on or off
fn toggle_weekday(current: Option<&str>, day: Weekday) -> Option<String> {
    let mut days: Vec<Weekday> = current
        .unwrap_or_default()
        .split(',')
        .filter_map(|name| name.trim().parse().ok())
        .collect();
    match days.iter().position(|d| *d == day) {
        Some(index) => {
            days.remove(index);
        }
        None => days.push(day),
    }
    days.sort_by_key(|d| d.num_days_from_monday());
    days.dedup();

    let joined = days.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(",");
    (!joined.is_empty()).then_some(joined)
}

fn has_weekday(current: Option<&str>, day: Weekday) -> bool {
    current
        .unwrap_or_default()
        .split(',')
        .any(|name| name.trim().parse::<Weekday>().ok() == Some(day))
}

#[component]
pub fn DailyInputs(draft: RwSignal<TaskDraft>) -> impl IntoView {
    view! {
        <label class="recurrence-field">
            "Times per day"
            <input
                type="number"
                min="1"
                prop:value=move || draft.with(|d| d.times_per_day.to_string())
                on:input=move |ev| {
                    let times = event_target_value(&ev).parse::<u32>().unwrap_or(1).max(1);
                    draft.update(|d| d.times_per_day = times);
                }
            />
        </label>
    }
}

#[component]
pub fn WeeklyInputs(draft: RwSignal<TaskDraft>) -> impl IntoView {
    view! {
        <div class="weekday-selector">
            {WEEKDAYS.iter().map(|&day| {
                let is_selected = move || draft.with(|d| has_weekday(d.repeat_value.as_deref(), day));
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "weekday-btn active" } else { "weekday-btn" }
                        on:click=move |_| draft.update(|d| {
                            d.repeat_value = toggle_weekday(d.repeat_value.as_deref(), day);
                        })
                    >
                        {day.to_string()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn MonthlyInputs(draft: RwSignal<TaskDraft>) -> impl IntoView {
    let is_custom = move || draft.with(|d| d.repeat_value.as_deref() == Some(MonthDay::Custom.as_str()));

    view! {
        <div class="monthly-inputs">
            <select
                prop:value=move || draft.with(|d| d.repeat_value.clone().unwrap_or_default())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| {
                        d.repeat_value = (!value.is_empty()).then_some(value);
                        d.custom_date = None;
                    });
                }
            >
                <option value="" disabled=true>"Select day of month"</option>
                {MonthDay::ALL.iter().map(|day| {
                    let value = day.as_str();
                    view! { <option value=value>{value.replace('-', " ")}</option> }
                }).collect_view()}
            </select>
            <Show when=is_custom>
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.custom_date.clone().unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.custom_date = (!value.is_empty()).then_some(value));
                    }
                />
            </Show>
        </div>
    }
}

#[component]
pub fn XDaysInputs(draft: RwSignal<TaskDraft>) -> impl IntoView {
    view! {
        <label class="recurrence-field">
            "Every"
            <input
                type="number"
                min="1"
                placeholder="x"
                prop:value=move || draft.with(|d| d.repeat_value.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.repeat_value = (!value.is_empty()).then_some(value));
                }
            />
            "days"
        </label>
    }
}
