//! In-memory `TaskApi` for tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{ApiError, TaskApi};
use crate::config::UiConfig;
use crate::models::{Recurrence, Task, TaskId};

/// Server double: finishing a daily task advances its counter, any other
/// task is dropped from today's list.
#[derive(Default)]
pub struct FakeApi {
    tasks: RefCell<Vec<Task>>,
    finished: RefCell<Vec<TaskId>>,
    recalculations: Cell<usize>,
    fail_finish: bool,
    fail_refetch: Cell<bool>,
    config: Option<UiConfig>,
    fail_config: bool,
}

impl FakeApi {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks: RefCell::new(tasks), ..Default::default() }
    }

    pub fn failing_finish(mut self) -> Self {
        self.fail_finish = true;
        self
    }

    /// Every refetch after the first finish fails
    pub fn failing_refetch(self) -> Self {
        self.fail_refetch.set(true);
        self
    }

    /// Serve `config` from `get_ui_config` instead of the defaults
    pub fn with_config(mut self, config: UiConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn failing_config(mut self) -> Self {
        self.fail_config = true;
        self
    }

    pub fn finished(&self) -> Vec<TaskId> {
        self.finished.borrow().clone()
    }

    pub fn completion_recalculations(&self) -> usize {
        self.recalculations.get()
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn get_todays_tasks(&self) -> Result<Vec<Task>, ApiError> {
        if self.fail_refetch.get() && !self.finished.borrow().is_empty() {
            return Err(ApiError::Backend("refetch unavailable".to_string()));
        }
        Ok(self.tasks.borrow().clone())
    }

    async fn finish_task(&self, id: &TaskId) -> Result<(), ApiError> {
        if self.fail_finish {
            return Err(ApiError::Backend("finish rejected".to_string()));
        }
        let mut tasks = self.tasks.borrow_mut();
        let index = tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| ApiError::Backend(format!("unknown task {}", id)))?;
        match tasks[index].recurrence {
            Recurrence::Daily { done, target } if done + 1 < target => {
                tasks[index].recurrence = Recurrence::Daily { done: done + 1, target };
            }
            _ => {
                tasks.remove(index);
            }
        }
        self.finished.borrow_mut().push(id.clone());
        Ok(())
    }

    async fn calculate_today_completion(&self) -> Result<(), ApiError> {
        self.recalculations.set(self.recalculations.get() + 1);
        Ok(())
    }

    async fn get_ui_config(&self) -> Result<UiConfig, ApiError> {
        if self.fail_config {
            return Err(ApiError::Backend("get_ui_config not registered".to_string()));
        }
        Ok(self.config.unwrap_or_default())
    }
}
