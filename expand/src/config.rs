//! Binder configuration.

use crate::event::{EventKind, DYNAMIC_RESIZE_EVENT};

/// Per-binder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Name used to tag this binder's log lines.
    pub label: String,

    /// Name of the custom remeasure signal.
    /// Every binder and dispatcher in an application must agree on it.
    pub dynamic_resize_event: String,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            label: "expand".to_string(),
            dynamic_resize_event: DYNAMIC_RESIZE_EVENT.to_string(),
        }
    }
}

impl ExpandConfig {
    /// Create a config with the given log label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Listen for a differently named remeasure signal.
    pub fn dynamic_resize_event(mut self, name: impl Into<String>) -> Self {
        self.dynamic_resize_event = name.into();
        self
    }

    /// Channel of the remeasure signal. Naming it `"resize"` folds it into
    /// the native viewport channel.
    pub fn dynamic_resize_kind(&self) -> EventKind {
        EventKind::from(self.dynamic_resize_event.as_str())
    }
}
