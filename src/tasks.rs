//! Task Collection Utilities
//!
//! Add, edit, delete, grouping and ordering over an ordered task list.

use thiserror::Error;

use crate::models::{Category, Recurrence, Task, TaskId};
use crate::validation::{DraftError, TaskDraft};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task {0} not found")]
    NotFound(TaskId),
    #[error("task {0} already exists")]
    Duplicate(TaskId),
    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Default ordering of a task list: by category in bucket order, stable
pub fn sort_by_category(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| category_rank(task.category()));
}

fn category_rank(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or(Category::ALL.len())
}

/// Stable sort by area priority: exercise, nutrition, sleep, then the rest
pub fn sort_by_area_priority(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| task.area.priority());
}

/// Build a new task from an accepted draft
pub fn task_from_draft(draft: &TaskDraft) -> Result<Task, TaskError> {
    let recurrence = draft.to_recurrence()?;
    Ok(Task::new(TaskId::fresh(), draft.text.trim(), recurrence))
}

/// Append a task and re-sort with the given ordering
pub fn add_task(tasks: &mut Vec<Task>, task: Task, order: impl Fn(&mut [Task])) -> Result<(), TaskError> {
    if tasks.iter().any(|t| t.id == task.id) {
        return Err(TaskError::Duplicate(task.id));
    }
    log::debug!("adding task {} ({})", task.id, task.category().as_str());
    tasks.push(task);
    order(tasks.as_mut_slice());
    Ok(())
}

/// Replace the form-editable fields of an existing task.
///
/// Identity, area and (for a task that stays daily) the done counter survive.
pub fn edit_task(
    tasks: &mut Vec<Task>,
    id: &TaskId,
    draft: &TaskDraft,
    order: impl Fn(&mut [Task]),
) -> Result<(), TaskError> {
    let recurrence = draft.to_recurrence()?;
    let task = tasks
        .iter_mut()
        .find(|t| &t.id == id)
        .ok_or_else(|| TaskError::NotFound(id.clone()))?;

    task.text = draft.text.trim().to_string();
    task.recurrence = match (&task.recurrence, recurrence) {
        (Recurrence::Daily { done, .. }, Recurrence::Daily { target, .. }) => Recurrence::Daily {
            done: (*done).min(target),
            target,
        },
        (_, next) => next,
    };
    log::debug!("edited task {}", id);
    order(tasks.as_mut_slice());
    Ok(())
}

/// Remove the task with the given id, keeping the order of the rest
pub fn delete_task(tasks: &mut Vec<Task>, id: &TaskId) -> Option<Task> {
    let index = tasks.iter().position(|t| &t.id == id)?;
    Some(tasks.remove(index))
}

// ========================
// Category buckets
// ========================

/// Tasks partitioned into one bucket per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBuckets {
    pub daily: Vec<Task>,
    pub weekly: Vec<Task>,
    pub monthly: Vec<Task>,
    pub xdays: Vec<Task>,
}

impl CategoryBuckets {
    pub fn get(&self, category: Category) -> &[Task] {
        match category {
            Category::Daily => &self.daily,
            Category::Weekly => &self.weekly,
            Category::Monthly => &self.monthly,
            Category::XDays => &self.xdays,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<Task> {
        match category {
            Category::Daily => &mut self.daily,
            Category::Weekly => &mut self.weekly,
            Category::Monthly => &mut self.monthly,
            Category::XDays => &mut self.xdays,
        }
    }

    /// Non-empty buckets in fixed category order
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[Task])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
            .filter(|(_, tasks)| !tasks.is_empty())
    }
}

pub fn group_by_category(tasks: &[Task]) -> CategoryBuckets {
    let mut buckets = CategoryBuckets::default();
    for task in tasks {
        buckets.get_mut(task.category()).push(task.clone());
    }
    buckets
}

/// An open category detail view closes once its bucket has emptied
pub fn should_close_detail(buckets: &CategoryBuckets, open: Option<Category>) -> bool {
    open.is_some_and(|category| buckets.get(category).is_empty())
}
