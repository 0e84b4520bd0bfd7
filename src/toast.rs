//! Toast Notifications
//!
//! Single-slot notification channel: a new toast replaces the current one.

/// Message shown after a task was confirmed as finished
pub const FINISHED_MESSAGE: &str = "Hooray! Well done!";
pub const FINISHED_ICON: &str = "🎉👏";
/// Message shown after the backend rejected a completion
pub const FINISH_FAILED_MESSAGE: &str = "Failed to complete task. Please try again.";
/// Message shown after a task was deleted from the all-tasks view
pub const DELETED_MESSAGE: &str = "Task deleted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub icon: Option<&'static str>,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into(), icon: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into(), icon: None }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Icon shown when none was given
    pub fn display_icon(&self) -> &'static str {
        self.icon.unwrap_or(match self.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        })
    }
}

/// The one toast that may be visible at a time.
///
/// Each `show` bumps a generation counter; a dismiss carrying an older
/// generation is ignored so a stale timer cannot hide a newer toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Toast>,
    generation: u64,
}

impl ToastSlot {
    /// Show a toast, replacing whatever is visible; returns its generation
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.generation += 1;
        log::debug!("toast #{}: {}", self.generation, toast.message);
        self.current = Some(toast);
        self.generation
    }

    /// Hide the toast if it is still the one shown at `generation`
    pub fn dismiss(&mut self, generation: u64) {
        if generation == self.generation {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
