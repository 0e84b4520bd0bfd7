//! Frontend Models
//!
//! Task data structures shared by the views and the backend bindings.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Maximum number of characters in a task's display text
pub const MAX_TASK_TEXT_LEN: usize = 15;

// ========================
// Identifiers
// ========================

/// Stable, unique task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier for a locally created task
    pub fn fresh() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ========================
// Category
// ========================

/// Recurrence family of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Daily,
    Weekly,
    Monthly,
    #[serde(rename = "xdays")]
    XDays,
}

impl Category {
    /// Fixed display order of the category buckets
    pub const ALL: [Category; 4] = [
        Category::Daily,
        Category::Weekly,
        Category::Monthly,
        Category::XDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Daily => "daily",
            Category::Weekly => "weekly",
            Category::Monthly => "monthly",
            Category::XDays => "xdays",
        }
    }

    /// Label shown in selectors and on the category grid
    pub fn label(&self) -> &'static str {
        match self {
            Category::Daily => "Daily",
            Category::Weekly => "Weekly",
            Category::Monthly => "Monthly",
            Category::XDays => "Every X days",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Category::Daily),
            "weekly" => Ok(Category::Weekly),
            "monthly" => Ok(Category::Monthly),
            "xdays" => Ok(Category::XDays),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

// ========================
// Recurrence
// ========================

/// Day-of-month token for monthly tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthDay {
    FirstDay,
    MidMonth,
    LastDay,
    /// Explicit date carried alongside the token
    Custom,
}

impl MonthDay {
    pub const ALL: [MonthDay; 4] = [
        MonthDay::FirstDay,
        MonthDay::MidMonth,
        MonthDay::LastDay,
        MonthDay::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MonthDay::FirstDay => "first-day",
            MonthDay::MidMonth => "mid-month",
            MonthDay::LastDay => "last-day",
            MonthDay::Custom => "custom",
        }
    }
}

impl FromStr for MonthDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonthDay::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| format!("unknown day of month: {}", s))
    }
}

/// Category together with its category-specific schedule data.
///
/// Daily tasks carry a completion counter instead of a descriptor; every other
/// variant carries a non-empty descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "frequency", rename_all = "lowercase")]
pub enum Recurrence {
    Daily {
        done: u32,
        target: u32,
    },
    Weekly {
        days: Vec<Weekday>,
    },
    #[serde(rename_all = "camelCase")]
    Monthly {
        day: MonthDay,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        custom_date: Option<NaiveDate>,
    },
    #[serde(rename = "xdays")]
    XDays {
        interval: u32,
    },
}

impl Recurrence {
    /// A fresh daily counter with nothing done yet
    pub fn daily(target: u32) -> Self {
        Recurrence::Daily { done: 0, target: target.max(1) }
    }

    pub fn category(&self) -> Category {
        match self {
            Recurrence::Daily { .. } => Category::Daily,
            Recurrence::Weekly { .. } => Category::Weekly,
            Recurrence::Monthly { .. } => Category::Monthly,
            Recurrence::XDays { .. } => Category::XDays,
        }
    }

    /// Human readable schedule, as shown on list rows
    pub fn summary(&self) -> String {
        match self {
            Recurrence::Daily { target, .. } if *target == 1 => "Everyday once".to_string(),
            Recurrence::Daily { target, .. } => format!("Everyday {} times", target),
            Recurrence::XDays { interval } => format!("Every {} days", interval),
            Recurrence::Weekly { days } => {
                let names: Vec<String> = days.iter().map(|d| d.to_string()).collect();
                format!("Every {}", names.join(", "))
            }
            Recurrence::Monthly { day: MonthDay::Custom, custom_date: Some(date) } => {
                format!("Every {}", date.format("%b %-d"))
            }
            Recurrence::Monthly { day, .. } => format!("Every {}", day.as_str().replace('-', " ")),
        }
    }
}

// ========================
// Area
// ========================

/// Life area of a task; drives the ordering of the today view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Area {
    Exercise,
    Nutrition,
    Sleep,
    /// Any area without a fixed priority
    Unlisted(String),
}

impl Area {
    /// Sort key for the today view; unlisted areas share the last slot
    pub fn priority(&self) -> u8 {
        match self {
            Area::Exercise => 0,
            Area::Nutrition => 1,
            Area::Sleep => 2,
            Area::Unlisted(_) => u8::MAX,
        }
    }
}

impl Default for Area {
    fn default() -> Self {
        Area::Unlisted("general".to_string())
    }
}

impl From<String> for Area {
    fn from(value: String) -> Self {
        match value.as_str() {
            "exercise" => Area::Exercise,
            "nutrition" => Area::Nutrition,
            "sleep" => Area::Sleep,
            _ => Area::Unlisted(value),
        }
    }
}

impl From<Area> for String {
    fn from(area: Area) -> Self {
        match area {
            Area::Exercise => "exercise".to_string(),
            Area::Nutrition => "nutrition".to_string(),
            Area::Sleep => "sleep".to_string(),
            Area::Unlisted(name) => name,
        }
    }
}

// ========================
// Task
// ========================

/// Whether a task record reflects the backend or a pending local change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provenance {
    #[default]
    Confirmed,
    Optimistic,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(rename = "category", default)]
    pub area: Area,
    #[serde(flatten)]
    pub recurrence: Recurrence,
    #[serde(skip)]
    pub provenance: Provenance,
}

impl Task {
    /// Create a confirmed task in the default area
    pub fn new(id: TaskId, text: impl Into<String>, recurrence: Recurrence) -> Self {
        Self {
            id,
            text: text.into(),
            area: Area::default(),
            recurrence,
            provenance: Provenance::Confirmed,
        }
    }

    pub fn with_area(mut self, area: Area) -> Self {
        self.area = area;
        self
    }

    pub fn category(&self) -> Category {
        self.recurrence.category()
    }

    /// Daily tasks are done for today once the counter reaches its target
    pub fn is_done_for_today(&self) -> bool {
        matches!(self.recurrence, Recurrence::Daily { done, target } if done >= target)
    }
}
