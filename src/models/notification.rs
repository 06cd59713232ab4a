//! Transient user notifications (toasts).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A banner shown once to the user and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(title: String, description: Option<String>) -> Self {
        Self {
            title,
            description,
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: String, description: Option<String>) -> Self {
        Self {
            title,
            description,
            variant: NotificationVariant::Destructive,
        }
    }
}
