// ABOUTME: Notification request and category data models

use serde::{Deserialize, Serialize};

/// A single notification request. Immutable once submitted; the renderer
/// consumes it and does not retain it beyond the call that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRequest {
    /// Main title of the notification. Required but not validated; an empty
    /// title renders an empty label.
    pub title: String,
    /// Optional body text. Absent renders as an empty message element.
    pub message: Option<String>,
    /// Time to live in milliseconds. `None` or `0` means the notification
    /// persists until manually closed.
    pub stay: Option<u64>,
    /// Additional styling class token carried on the rendered node.
    pub custom_class: Option<String>,
}

impl AlertRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            stay: None,
            custom_class: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_stay(mut self, stay_ms: u64) -> Self {
        self.stay = Some(stay_ms);
        self
    }

    pub fn with_custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }
}

/// Notification category. Fixed set; each maps to a theme icon and a status
/// class modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Error,
    Success,
    Notify,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Error => "error",
            AlertStatus::Success => "success",
            AlertStatus::Notify => "notify",
        }
    }

    /// The status modifier class attached to the rendered node.
    pub fn container_class(&self) -> String {
        format!("alert-container__{}", self.as_str())
    }
}
