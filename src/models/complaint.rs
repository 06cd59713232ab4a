//! Complaint ticket and attachment models.

use serde::{Deserialize, Serialize};

/// Metadata of a file picked for upload. File contents are never held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Attachment {
    /// Size in megabytes with two decimals, e.g. `1.50 MB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Submitted,
}

/// A complaint as constructed at submission time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Department display name.
    pub department: String,
    /// Attachment file names.
    pub attachments: Vec<String>,
    pub status: TicketStatus,
    pub created_at: String,
}
