//! Swipeable Task Row
//!
//! A task row that runs an action when swiped right past the threshold and
//! a second action when tapped.

use leptos::prelude::*;
use leptos_swipe::*;

use crate::models::{Recurrence, Task};
use crate::store::{use_app_store, AppStateStoreFields};

/// A single swipeable task row
///
/// # Arguments
/// * `task` - Task to display
/// * `hint` - Icon revealed behind the row while swiping
/// * `enabled` - Whether the row accepts a swipe right now
/// * `on_swipe` - Runs once per committed swipe
/// * `on_tap` - Runs on a plain click
#[component]
pub fn SwipeableTask(
    task: Task,
    #[prop(into)] hint: String,
    #[prop(into)] enabled: Signal<bool>,
    #[prop(into)] on_swipe: Callback<()>,
    #[prop(optional, into)] on_tap: Option<Callback<()>>,
) -> impl IntoView {
    let store = use_app_store();
    let config = store.config().get_untracked();

    let swipe = create_swipe_signals();
    let on_pointerdown = make_on_pointerdown(swipe, move || enabled.get_untracked());
    let on_pointermove = make_on_pointermove(swipe, config.max_swipe_px);
    let on_pointerup = make_on_pointerup(swipe, config.swipe_threshold_px, move || on_swipe.run(()));
    let on_pointercancel = make_on_pointercancel(swipe);

    // Back to rest once the action the row was waiting on has settled
    Effect::new(move |was_enabled: Option<bool>| {
        let now = enabled.get();
        if rearms(was_enabled, now) {
            reset(&swipe);
        }
        now
    });

    let threshold = config.swipe_threshold_px.max(1);
    let hint_opacity = move || {
        let progress = swipe.offset_read.get() as f32 / threshold as f32;
        format!("opacity: {:.2};", progress.clamp(0.0, 1.0))
    };
    let row_class = move || {
        let mut c = String::from("task-row");
        if swipe.offset_read.get() > 0 { c.push_str(" swiping"); }
        if !enabled.get() { c.push_str(" pending"); }
        c
    };

    let text = task.text.clone();
    let summary = task.recurrence.summary();
    let progress = match task.recurrence {
        Recurrence::Daily { done, target } if target > 1 => Some(format!("{}/{}", done, target)),
        _ => None,
    };

    view! {
        <div
            class=row_class
            on:click=move |_| {
                if swipe.just_swiped_read.get_untracked() || swipe.swiped_read.get_untracked() {
                    return;
                }
                if let Some(cb) = on_tap {
                    cb.run(());
                }
            }
        >
            <div
                class="task-row-content"
                style=move || format!("transform: translateX({}px);", swipe.offset_read.get())
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:pointerup=on_pointerup
                on:pointercancel=on_pointercancel
            >
                <span class="task-text">{text}</span>
                <span class="task-summary">{summary}</span>
                {progress.map(|p| view! { <span class="task-progress">{p}</span> })}
            </div>
            <div class="task-row-hint" style=hint_opacity>{hint}</div>
        </div>
    }
}
