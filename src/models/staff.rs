//! Staff dashboard models.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    InProgress,
    Resolved,
}

/// A complaint assigned to a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedComplaint {
    pub id: &'static str,
    pub title: &'static str,
    pub citizen: &'static str,
    pub priority: Priority,
    pub status: AssignmentStatus,
    pub assigned_at: &'static str,
    pub location: &'static str,
}

/// Headline numbers on the staff dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffStats {
    pub total_assigned: u32,
    pub pending: u32,
    pub in_progress: u32,
    pub resolved_today: u32,
}
