//! Tauri Command Bindings
//!
//! `TaskApi` over `window.__TAURI__.core.invoke`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{ApiError, TaskApi};
use crate::config::UiConfig;
use crate::models::{Task, TaskId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TaskIdArgs<'a> {
    #[serde(rename = "taskId")]
    task_id: &'a str,
}

// ========================
// Helpers
// ========================

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, ApiError> {
    let result = invoke(cmd, args).await.map_err(|e| {
        let message = describe(e);
        log::error!("[API] {} failed: {}", cmd, message);
        ApiError::Backend(message)
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn to_args<A: Serialize>(args: &A) -> Result<JsValue, ApiError> {
    serde_wasm_bindgen::to_value(args).map_err(|e| ApiError::Serialization(e.to_string()))
}

// ========================
// Commands
// ========================

/// Backend reached through the Tauri IPC bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriApi;

#[async_trait(?Send)]
impl TaskApi for TauriApi {
    async fn get_todays_tasks(&self) -> Result<Vec<Task>, ApiError> {
        call("get_todays_tasks", JsValue::NULL).await
    }

    async fn finish_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let args = to_args(&TaskIdArgs { task_id: id.as_str() })?;
        let _: Option<()> = call("finish_task", args).await?;
        Ok(())
    }

    async fn calculate_today_completion(&self) -> Result<(), ApiError> {
        let _: Option<()> = call("calculate_today_completion", JsValue::NULL).await?;
        Ok(())
    }

    async fn get_ui_config(&self) -> Result<UiConfig, ApiError> {
        call("get_ui_config", JsValue::NULL).await
    }
}
