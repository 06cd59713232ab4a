//! Department model.

use serde::Serialize;

/// A municipal department as shown on a department card.
///
/// Name and description are already localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: &'static str,
    pub name: String,
    pub description: String,
    pub icon: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_count: Option<u32>,
}
