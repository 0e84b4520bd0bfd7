//! UI Components
//!
//! Reusable Leptos components.

mod add_or_edit_task_dialog;
mod add_task_button;
mod all_tasks_list;
mod recurrence_inputs;
mod swipeable_task;
mod toaster;
mod today_tasks_list;

pub use add_or_edit_task_dialog::{AddOrEditTaskDialog, DialogMode};
pub use add_task_button::AddTaskButton;
pub use all_tasks_list::AllTasksList;
pub use swipeable_task::SwipeableTask;
pub use toaster::Toaster;
pub use today_tasks_list::TodayTasksList;
