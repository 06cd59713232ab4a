//! Location models.

use serde::{Deserialize, Serialize};

/// A chosen state and district, by display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub state: String,
    pub district: String,
}

/// One selectable entry of the state or district list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationOption {
    pub id: &'static str,
    pub name: &'static str,
}
