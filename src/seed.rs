//! Example Tasks
//!
//! Starting data for the all-tasks view, which keeps its list in memory only.

use chrono::{NaiveDate, Weekday};

use crate::models::{Area, MonthDay, Recurrence, Task, TaskId};
use crate::tasks::sort_by_category;

pub fn example_tasks() -> Vec<Task> {
    let mut tasks = vec![
        Task::new(TaskId::new("ex-1"), "Morning run", Recurrence::daily(1)).with_area(Area::Exercise),
        Task::new(TaskId::new("ex-2"), "Drink water", Recurrence::daily(8)).with_area(Area::Nutrition),
        Task::new(TaskId::new("ex-3"), "Lights out 11pm", Recurrence::daily(1)).with_area(Area::Sleep),
        Task::new(
            TaskId::new("ex-4"),
            "Gym",
            Recurrence::Weekly { days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri] },
        )
        .with_area(Area::Exercise),
        Task::new(
            TaskId::new("ex-5"),
            "Meal prep",
            Recurrence::Weekly { days: vec![Weekday::Sun] },
        )
        .with_area(Area::Nutrition),
        Task::new(
            TaskId::new("ex-6"),
            "Weigh in",
            Recurrence::Monthly { day: MonthDay::FirstDay, custom_date: None },
        ),
        Task::new(
            TaskId::new("ex-7"),
            "Checkup",
            Recurrence::Monthly {
                day: MonthDay::Custom,
                custom_date: NaiveDate::from_ymd_opt(2026, 1, 15),
            },
        ),
        Task::new(TaskId::new("ex-8"), "Water plants", Recurrence::XDays { interval: 3 }),
    ];
    sort_by_category(&mut tasks);
    tasks
}
