//! Today Board
//!
//! Optimistic completion of today's tasks with rollback to the last server
//! snapshot when the backend rejects the change.

use std::collections::HashSet;

use thiserror::Error;

use crate::api::{ApiError, TaskApi};
use crate::models::{Provenance, Recurrence, Task, TaskId};
use crate::tasks::sort_by_area_priority;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("task {0} is not on today's board")]
    NotFound(TaskId),
    #[error("task {0} is already waiting for confirmation")]
    AlreadyPending(TaskId),
}

/// Local effect of an optimistic completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionEffect {
    /// Daily counter advanced, task stays visible
    Incremented { done: u32, target: u32 },
    /// Task left the visible list
    Removed,
}

/// Today's tasks as shown, plus the server state they were derived from
#[derive(Debug, Clone, Default)]
pub struct TodayBoard {
    snapshot: Vec<Task>,
    visible: Vec<Task>,
    pending: HashSet<TaskId>,
    loaded: bool,
}

impl TodayBoard {
    /// Replace the snapshot with a fresh server result and rebuild the visible list.
    ///
    /// Tasks still waiting for confirmation keep their optimistic local state.
    pub fn hydrate(&mut self, tasks: Vec<Task>) {
        self.pending.retain(|id| tasks.iter().any(|t| &t.id == id));
        let mut visible: Vec<Task> = tasks
            .iter()
            .filter(|task| !task.is_done_for_today())
            .filter_map(|task| {
                if self.pending.contains(&task.id) {
                    self.visible.iter().find(|t| t.id == task.id).cloned()
                } else {
                    Some(task.clone())
                }
            })
            .collect();
        sort_by_area_priority(&mut visible);
        self.snapshot = tasks;
        self.visible = visible;
        self.loaded = true;
        log::debug!("today board hydrated with {} tasks", self.visible.len());
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Tasks in display order
    pub fn visible(&self) -> &[Task] {
        &self.visible
    }

    pub fn is_pending(&self, id: &TaskId) -> bool {
        self.pending.contains(id)
    }

    /// Apply the optimistic part of a completion gesture
    pub fn begin(&mut self, id: &TaskId) -> Result<CompletionEffect, CompletionError> {
        if self.pending.contains(id) {
            return Err(CompletionError::AlreadyPending(id.clone()));
        }
        let index = self
            .visible
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| CompletionError::NotFound(id.clone()))?;

        let effect = match self.visible[index].recurrence {
            Recurrence::Daily { done, target } if done + 1 < target => {
                let task = &mut self.visible[index];
                task.recurrence = Recurrence::Daily { done: done + 1, target };
                task.provenance = Provenance::Optimistic;
                CompletionEffect::Incremented { done: done + 1, target }
            }
            _ => {
                self.visible.remove(index);
                CompletionEffect::Removed
            }
        };

        self.pending.insert(id.clone());
        log::debug!("task {} optimistically completed: {:?}", id, effect);
        Ok(effect)
    }

    /// The backend accepted the completion; `refreshed` is the refetched list
    pub fn confirm(&mut self, id: &TaskId, refreshed: Option<Vec<Task>>) {
        self.pending.remove(id);
        match refreshed {
            Some(tasks) => self.hydrate(tasks),
            None => {
                if let Some(task) = self.visible.iter_mut().find(|t| &t.id == id) {
                    task.provenance = Provenance::Confirmed;
                }
            }
        }
    }

    /// The backend rejected the completion; restore the server version of the task
    pub fn rollback(&mut self, id: &TaskId) {
        self.pending.remove(id);
        let Some(original) = self.snapshot.iter().find(|t| &t.id == id).cloned() else {
            log::warn!("no server snapshot for task {}, leaving it removed", id);
            return;
        };
        match self.visible.iter_mut().find(|t| &t.id == id) {
            Some(task) => *task = original,
            None => self.visible.push(original),
        }
        sort_by_area_priority(&mut self.visible);
    }
}

/// Confirm a completion with the backend and fetch the refreshed list.
///
/// Only a failed `finish_task` is an error. Once the finish went through,
/// a failure recomputing the aggregate or refetching is logged and the
/// caller confirms without a refreshed list.
pub async fn finish_and_refresh<A: TaskApi + ?Sized>(
    api: &A,
    id: &TaskId,
) -> Result<Option<Vec<Task>>, ApiError> {
    api.finish_task(id).await?;

    if let Err(e) = api.calculate_today_completion().await {
        log::warn!("recomputing today's completion failed: {}", e);
    }

    match api.get_todays_tasks().await {
        Ok(tasks) => Ok(Some(tasks)),
        Err(e) => {
            log::warn!("refetching today's tasks failed: {}", e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::models::Area;
    use chrono::Weekday;

    fn daily(id: &str, done: u32, target: u32) -> Task {
        Task::new(TaskId::new(id), id, Recurrence::Daily { done, target })
    }

    fn weekly(id: &str) -> Task {
        Task::new(TaskId::new(id), id, Recurrence::Weekly { days: vec![Weekday::Wed] })
    }

    fn board(tasks: Vec<Task>) -> TodayBoard {
        let mut board = TodayBoard::default();
        board.hydrate(tasks);
        board
    }

    fn visible_ids(board: &TodayBoard) -> Vec<&str> {
        board.visible().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_daily_increment_keeps_task_visible() {
        let mut b = board(vec![daily("water", 1, 3)]);
        let effect = b.begin(&TaskId::new("water")).unwrap();

        assert_eq!(effect, CompletionEffect::Incremented { done: 2, target: 3 });
        assert_eq!(b.visible()[0].recurrence, Recurrence::Daily { done: 2, target: 3 });
        assert_eq!(b.visible()[0].provenance, Provenance::Optimistic);
    }

    #[test]
    fn test_daily_reaching_target_is_removed() {
        let mut b = board(vec![daily("water", 2, 3)]);
        let effect = b.begin(&TaskId::new("water")).unwrap();
        assert_eq!(effect, CompletionEffect::Removed);
        assert!(b.visible().is_empty());
    }

    #[test]
    fn test_non_daily_is_removed_immediately() {
        let mut b = board(vec![weekly("gym"), daily("water", 0, 2)]);
        b.begin(&TaskId::new("gym")).unwrap();
        assert_eq!(visible_ids(&b), vec!["water"]);
    }

    #[test]
    fn test_second_gesture_while_pending_is_rejected() {
        let mut b = board(vec![daily("water", 0, 5)]);
        let id = TaskId::new("water");
        b.begin(&id).unwrap();
        assert_eq!(b.begin(&id), Err(CompletionError::AlreadyPending(id.clone())));
        assert_eq!(b.visible()[0].recurrence, Recurrence::Daily { done: 1, target: 5 });

        b.confirm(&id, None);
        assert!(!b.is_pending(&id));
        assert_eq!(b.visible()[0].provenance, Provenance::Confirmed);
        assert!(b.begin(&id).is_ok());
    }

    #[test]
    fn test_unknown_task() {
        let mut b = board(vec![]);
        assert_eq!(
            b.begin(&TaskId::new("x")),
            Err(CompletionError::NotFound(TaskId::new("x")))
        );
    }

    #[test]
    fn test_rollback_restores_server_values() {
        let mut b = board(vec![daily("water", 1, 3), weekly("gym")]);
        let water = TaskId::new("water");
        let gym = TaskId::new("gym");

        b.begin(&water).unwrap();
        b.begin(&gym).unwrap();
        b.rollback(&water);
        b.rollback(&gym);

        let restored = b.visible().iter().find(|t| t.id == water).unwrap();
        assert_eq!(restored.recurrence, Recurrence::Daily { done: 1, target: 3 });
        assert_eq!(restored.provenance, Provenance::Confirmed);
        assert!(b.visible().iter().any(|t| t.id == gym));
        assert_eq!(b.visible().len(), 2);
        assert!(!b.is_pending(&water));
    }

    #[test]
    fn test_rollback_restores_removed_task_in_priority_order() {
        let mut b = board(vec![
            daily("run", 0, 1).with_area(Area::Exercise),
            daily("sleep", 0, 1).with_area(Area::Sleep),
        ]);
        b.begin(&TaskId::new("run")).unwrap();
        assert_eq!(visible_ids(&b), vec!["sleep"]);

        b.rollback(&TaskId::new("run"));
        assert_eq!(visible_ids(&b), vec!["run", "sleep"]);
    }

    #[test]
    fn test_hydrate_hides_daily_tasks_done_for_today() {
        let b = board(vec![daily("water", 3, 3), daily("run", 0, 1)]);
        assert_eq!(visible_ids(&b), vec!["run"]);
    }

    #[test]
    fn test_hydrate_sorts_by_area_priority() {
        let b = board(vec![
            daily("s", 0, 1).with_area(Area::Sleep),
            daily("e", 0, 1).with_area(Area::Exercise),
            daily("u", 0, 1),
            daily("n", 0, 1).with_area(Area::Nutrition),
        ]);
        assert_eq!(visible_ids(&b), vec!["e", "n", "s", "u"]);
    }

    #[test]
    fn test_confirm_with_refresh_replaces_snapshot() {
        let mut b = board(vec![daily("water", 1, 3)]);
        let id = TaskId::new("water");
        b.begin(&id).unwrap();
        b.confirm(&id, Some(vec![daily("water", 2, 3)]));

        // A later failure restores the refreshed server version
        b.begin(&id).unwrap();
        b.rollback(&id);
        assert_eq!(b.visible()[0].recurrence, Recurrence::Daily { done: 2, target: 3 });
    }

    #[test]
    fn test_refresh_keeps_other_pending_tasks_optimistic() {
        let mut b = board(vec![daily("water", 0, 3), weekly("gym"), weekly("read")]);
        let water = TaskId::new("water");
        let gym = TaskId::new("gym");
        b.begin(&water).unwrap();
        b.begin(&gym).unwrap();

        // gym confirmed first; the refetch does not yet reflect water
        b.confirm(&gym, Some(vec![daily("water", 0, 3), weekly("read")]));

        assert_eq!(visible_ids(&b), vec!["water", "read"]);
        assert_eq!(b.visible()[0].recurrence, Recurrence::Daily { done: 1, target: 3 });
        assert!(b.is_pending(&water));
    }

    #[tokio::test]
    async fn test_finish_and_refresh_returns_refetched_tasks() {
        let api = FakeApi::new(vec![daily("water", 1, 3)]);
        let refreshed = finish_and_refresh(&api, &TaskId::new("water")).await.unwrap();

        assert_eq!(refreshed, Some(vec![daily("water", 2, 3)]));
        assert_eq!(api.finished(), vec![TaskId::new("water")]);
        assert_eq!(api.completion_recalculations(), 1);
    }

    #[tokio::test]
    async fn test_finish_failure_is_an_error() {
        let api = FakeApi::new(vec![daily("water", 1, 3)]).failing_finish();
        let result = finish_and_refresh(&api, &TaskId::new("water")).await;

        assert!(matches!(result, Err(ApiError::Backend(_))));
        assert_eq!(api.completion_recalculations(), 0);
    }

    #[tokio::test]
    async fn test_failed_refetch_still_confirms() {
        let api = FakeApi::new(vec![weekly("gym")]).failing_refetch();
        let result = finish_and_refresh(&api, &TaskId::new("gym")).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_full_round_trip_with_rollback() {
        let api = FakeApi::new(vec![daily("water", 1, 3)]).failing_finish();
        let mut b = board(api.get_todays_tasks().await.unwrap());
        let id = TaskId::new("water");

        b.begin(&id).unwrap();
        match finish_and_refresh(&api, &id).await {
            Ok(refreshed) => b.confirm(&id, refreshed),
            Err(_) => b.rollback(&id),
        }
        assert_eq!(b.visible()[0].recurrence, Recurrence::Daily { done: 1, target: 3 });
    }
}
