//! UI Configuration
//!
//! Tuning values served by the backend. Every field has a default so a
//! partial or missing config still yields a usable UI.

use serde::{Deserialize, Serialize};

use crate::api::TaskApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Horizontal distance (px) past which a swipe commits
    pub swipe_threshold_px: i32,
    /// Farthest a row can be dragged (px)
    pub max_swipe_px: i32,
    /// How long a toast stays up
    pub toast_duration_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 200,
            max_swipe_px: 250,
            toast_duration_ms: 2000,
        }
    }
}

impl UiConfig {
    /// Keep the threshold reachable inside the drag range
    fn normalized(mut self) -> Self {
        self.max_swipe_px = self.max_swipe_px.max(1);
        self.swipe_threshold_px = self.swipe_threshold_px.clamp(1, self.max_swipe_px);
        self
    }
}

/// Fetch the config, falling back to defaults when the backend has none
pub async fn load_ui_config<A: TaskApi + ?Sized>(api: &A) -> UiConfig {
    match api.get_ui_config().await {
        Ok(config) => config.normalized(),
        Err(e) => {
            log::info!("using default UI config: {}", e);
            UiConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: UiConfig = serde_json::from_str(r#"{"toastDurationMs": 5000}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.swipe_threshold_px, 200);
        assert_eq!(config.max_swipe_px, 250);
    }

    #[test]
    fn test_threshold_is_clamped_to_drag_range() {
        let config = UiConfig { swipe_threshold_px: 400, max_swipe_px: 250, toast_duration_ms: 10 }.normalized();
        assert_eq!(config.swipe_threshold_px, 250);
    }

    #[tokio::test]
    async fn test_load_from_api() {
        let served = UiConfig { swipe_threshold_px: 120, max_swipe_px: 180, toast_duration_ms: 3000 };
        let api = FakeApi::new(vec![]).with_config(served);
        assert_eq!(load_ui_config(&api).await, served);
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_to_defaults() {
        let api = FakeApi::new(vec![]).failing_config();
        assert_eq!(load_ui_config(&api).await, UiConfig::default());
    }

    #[tokio::test]
    async fn test_served_config_is_normalized() {
        let served = UiConfig { swipe_threshold_px: 900, max_swipe_px: 0, toast_duration_ms: 1500 };
        let api = FakeApi::new(vec![]).with_config(served);

        let config = load_ui_config(&api).await;
        assert_eq!(config.max_swipe_px, 1);
        assert_eq!(config.swipe_threshold_px, 1);
        assert_eq!(config.toast_duration_ms, 1500);
    }
}
