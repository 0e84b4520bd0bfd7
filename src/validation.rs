//! Task Draft Validation
//!
//! Transient add/edit form state and the predicate that gates submission.

use chrono::{NaiveDate, Weekday};
use thiserror::Error;

use crate::models::{Category, MonthDay, Recurrence, Task, MAX_TASK_TEXT_LEN};

/// Repeat value that asks for an explicit date on monthly tasks
pub const CUSTOM_MONTH_DAY: &str = "custom";

/// Errors turning an accepted draft into a recurrence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("draft is incomplete")]
    Incomplete,
    #[error("unknown weekday: {0}")]
    InvalidWeekday(String),
    #[error("unknown day of month: {0}")]
    InvalidMonthDay(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("interval must be a positive number, got {0}")]
    InvalidInterval(String),
}

/// Form state of the add/edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub category: Option<Category>,
    /// Weekly: comma separated weekday names. Monthly: day token. X-day: interval.
    pub repeat_value: Option<String>,
    /// `YYYY-MM-DD`, only read for monthly tasks with a custom day
    pub custom_date: Option<String>,
    /// Daily target count
    pub times_per_day: u32,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: None,
            repeat_value: None,
            custom_date: None,
            times_per_day: 1,
        }
    }
}

impl TaskDraft {
    /// Prefill from an existing task for edit mode
    pub fn from_task(task: &Task) -> Self {
        let (repeat_value, custom_date, times_per_day) = match &task.recurrence {
            Recurrence::Daily { target, .. } => (None, None, *target),
            Recurrence::Weekly { days } => {
                let names: Vec<String> = days.iter().map(|d| d.to_string()).collect();
                (Some(names.join(",")), None, 1)
            }
            Recurrence::Monthly { day, custom_date } => (
                Some(day.as_str().to_string()),
                custom_date.map(|d| d.format("%Y-%m-%d").to_string()),
                1,
            ),
            Recurrence::XDays { interval } => (Some(interval.to_string()), None, 1),
        };
        Self {
            text: task.text.clone(),
            category: Some(task.category()),
            repeat_value,
            custom_date,
            times_per_day,
        }
    }

    /// Keystroke handler; input longer than the text limit is cut off
    pub fn set_text(&mut self, input: &str) {
        self.text = input.chars().take(MAX_TASK_TEXT_LEN).collect();
    }

    /// Switching category drops the previous category's descriptor
    pub fn set_category(&mut self, category: Category) {
        if self.category != Some(category) {
            self.repeat_value = None;
            self.custom_date = None;
        }
        self.category = Some(category);
    }

    /// Clear every transient field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the form may be submitted
    pub fn is_valid(&self) -> bool {
        if self.text.trim().is_empty() {
            return false;
        }
        let Some(category) = self.category else {
            return false;
        };
        if category == Category::Daily {
            return true;
        }
        let Some(repeat) = is_set(&self.repeat_value) else {
            return false;
        };
        if category == Category::Monthly
            && repeat == CUSTOM_MONTH_DAY
            && is_set(&self.custom_date).is_none()
        {
            return false;
        }
        true
    }

    /// Parse the draft into the recurrence it describes
    pub fn to_recurrence(&self) -> Result<Recurrence, DraftError> {
        if !self.is_valid() {
            return Err(DraftError::Incomplete);
        }
        let category = self.category.ok_or(DraftError::Incomplete)?;
        let repeat = non_empty(&self.repeat_value).unwrap_or_default();

        match category {
            Category::Daily => Ok(Recurrence::daily(self.times_per_day)),
            Category::Weekly => parse_weekdays(repeat).map(|days| Recurrence::Weekly { days }),
            Category::Monthly => {
                let day: MonthDay = repeat
                    .parse()
                    .map_err(|_| DraftError::InvalidMonthDay(repeat.to_string()))?;
                let custom_date = match day {
                    MonthDay::Custom => {
                        let raw = non_empty(&self.custom_date).unwrap_or_default();
                        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                            .map_err(|_| DraftError::InvalidDate(raw.to_string()))?;
                        Some(date)
                    }
                    _ => None,
                };
                Ok(Recurrence::Monthly { day, custom_date })
            }
            Category::XDays => match repeat.parse::<u32>() {
                Ok(interval) if interval > 0 => Ok(Recurrence::XDays { interval }),
                _ => Err(DraftError::InvalidInterval(repeat.to_string())),
            },
        }
    }
}

/// A form value counts as set once it holds any character
fn is_set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Parse `"monday, wed"` into a deduplicated, Monday-first weekday list
fn parse_weekdays(raw: &str) -> Result<Vec<Weekday>, DraftError> {
    let mut days = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let day: Weekday = name
            .parse()
            .map_err(|_| DraftError::InvalidWeekday(name.to_string()))?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    if days.is_empty() {
        return Err(DraftError::Incomplete);
    }
    days.sort_by_key(|d| d.num_days_from_monday());
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str, category: Option<Category>, repeat: Option<&str>, date: Option<&str>) -> TaskDraft {
        TaskDraft {
            text: text.to_string(),
            category,
            repeat_value: repeat.map(str::to_string),
            custom_date: date.map(str::to_string),
            times_per_day: 1,
        }
    }

    #[test]
    fn test_rejects_blank_text_or_missing_category() {
        assert!(!draft("", Some(Category::Daily), None, None).is_valid());
        assert!(!draft("   ", Some(Category::Daily), None, None).is_valid());
        assert!(!draft("Run", None, None, None).is_valid());
    }

    #[test]
    fn test_daily_needs_no_repeat_value() {
        assert!(draft("Run", Some(Category::Daily), None, None).is_valid());
    }

    #[test]
    fn test_weekly_and_xdays_need_repeat_value() {
        for category in [Category::Weekly, Category::XDays] {
            assert!(!draft("Run", Some(category), None, None).is_valid());
            assert!(!draft("Run", Some(category), Some(""), None).is_valid());
            assert!(draft("Run", Some(category), Some("3"), None).is_valid());
        }
    }

    #[test]
    fn test_blank_repeat_value_is_set_but_does_not_parse() {
        let d = draft("Run", Some(Category::XDays), Some(" "), None);
        assert!(d.is_valid());
        assert_eq!(d.to_recurrence(), Err(DraftError::InvalidInterval(String::new())));
    }

    #[test]
    fn test_monthly_custom_needs_date() {
        assert!(!draft("Rent", Some(Category::Monthly), None, None).is_valid());
        assert!(draft("Rent", Some(Category::Monthly), Some("first-day"), None).is_valid());
        assert!(!draft("Rent", Some(Category::Monthly), Some("custom"), None).is_valid());
        assert!(!draft("Rent", Some(Category::Monthly), Some("custom"), Some("")).is_valid());
        assert!(draft("Rent", Some(Category::Monthly), Some("custom"), Some("2026-10-20")).is_valid());
    }

    #[test]
    fn test_predicate_matches_rule_for_all_combinations() {
        let texts = ["", " ", "Run"];
        let categories = [None, Some(Category::Daily), Some(Category::Weekly), Some(Category::Monthly), Some(Category::XDays)];
        let repeats = [None, Some(" "), Some("custom"), Some("mid-month")];
        let dates = [None, Some("2026-01-31")];

        for text in texts {
            for category in categories {
                for repeat in repeats {
                    for date in dates {
                        let d = draft(text, category, repeat, date);
                        let expected = !text.trim().is_empty()
                            && category.is_some()
                            && (category == Some(Category::Daily) || repeat.is_some())
                            && !(category == Some(Category::Monthly) && repeat == Some("custom") && date.is_none());
                        assert_eq!(d.is_valid(), expected, "{:?}", d);
                    }
                }
            }
        }
    }

    #[test]
    fn test_text_is_truncated_to_limit() {
        let mut d = TaskDraft::default();
        d.set_text("a very long task name indeed");
        assert_eq!(d.text.chars().count(), MAX_TASK_TEXT_LEN);
    }

    #[test]
    fn test_switching_category_clears_descriptor() {
        let mut d = draft("Rent", Some(Category::Monthly), Some("custom"), Some("2026-10-20"));
        d.set_category(Category::Weekly);
        assert_eq!(d.repeat_value, None);
        assert_eq!(d.custom_date, None);
        assert!(!d.is_valid());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut d = draft("Rent", Some(Category::Monthly), Some("custom"), Some("2026-10-20"));
        d.reset();
        assert_eq!(d, TaskDraft::default());
    }

    #[test]
    fn test_to_recurrence() {
        assert_eq!(
            draft("Run", Some(Category::Daily), None, None).to_recurrence(),
            Ok(Recurrence::Daily { done: 0, target: 1 })
        );
        assert_eq!(
            draft("Gym", Some(Category::Weekly), Some("friday, Monday,mon"), None).to_recurrence(),
            Ok(Recurrence::Weekly { days: vec![Weekday::Mon, Weekday::Fri] })
        );
        assert_eq!(
            draft("Rent", Some(Category::Monthly), Some("custom"), Some("2026-10-20")).to_recurrence(),
            Ok(Recurrence::Monthly { day: MonthDay::Custom, custom_date: NaiveDate::from_ymd_opt(2026, 10, 20) })
        );
        assert_eq!(
            draft("Plants", Some(Category::XDays), Some("3"), None).to_recurrence(),
            Ok(Recurrence::XDays { interval: 3 })
        );
    }

    #[test]
    fn test_to_recurrence_rejects_unparseable_values() {
        assert_eq!(
            draft("Plants", Some(Category::XDays), Some("0"), None).to_recurrence(),
            Err(DraftError::InvalidInterval("0".to_string()))
        );
        assert_eq!(
            draft("Gym", Some(Category::Weekly), Some("someday"), None).to_recurrence(),
            Err(DraftError::InvalidWeekday("someday".to_string()))
        );
        assert_eq!(
            draft("Rent", Some(Category::Monthly), Some("custom"), Some("soon")).to_recurrence(),
            Err(DraftError::InvalidDate("soon".to_string()))
        );
        assert_eq!(draft("", Some(Category::Daily), None, None).to_recurrence(), Err(DraftError::Incomplete));
    }

    #[test]
    fn test_from_task_round_trips_through_draft() {
        let task = Task::new(
            crate::models::TaskId::new("w"),
            "Gym",
            Recurrence::Weekly { days: vec![Weekday::Tue, Weekday::Sat] },
        );
        let d = TaskDraft::from_task(&task);
        assert_eq!(d.category, Some(Category::Weekly));
        assert_eq!(d.to_recurrence(), Ok(task.recurrence));
    }
}
