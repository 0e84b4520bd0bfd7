//! Backend API
//!
//! The remote procedures the views depend on, behind a trait so the
//! completion workflow can run against the Tauri bridge or an in-memory fake.

mod tauri;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::UiConfig;
use crate::models::{Task, TaskId};

pub use self::tauri::TauriApi;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Remote procedures used by the task views
#[async_trait(?Send)]
pub trait TaskApi {
    /// Today's open tasks, in server order
    async fn get_todays_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// Record one completion of a task
    async fn finish_task(&self, id: &TaskId) -> Result<(), ApiError>;

    /// Recompute today's completion statistics on the server
    async fn calculate_today_completion(&self) -> Result<(), ApiError>;

    /// UI tuning values
    async fn get_ui_config(&self) -> Result<UiConfig, ApiError>;
}
