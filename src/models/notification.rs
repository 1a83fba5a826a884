//! Notification entity model
//!
//! Messages surfaced on the dashboard: registration confirmations,
//! overdue alerts, and informational notices.

use serde::{Deserialize, Serialize};

/// Kind of notification surfaced to a caregiver or practitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// An upcoming dose reminder
    Reminder,
    /// An overdue-dose alert
    Alert,
    /// An informational notice
    Info,
}

/// A message surfaced on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier
    pub id: u32,
    /// Human-readable message
    pub message: String,
    /// Notification kind
    pub kind: NotificationKind,
    /// Whether the notification needs immediate attention
    pub urgent: bool,
}

impl Notification {
    /// Create a notification
    #[must_use]
    pub fn new(id: u32, message: impl Into<String>, kind: NotificationKind, urgent: bool) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            urgent,
        }
    }
}
