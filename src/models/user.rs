//! Logged-in user model.

use serde::{Deserialize, Serialize};

/// The two mutually exclusive roles recognised at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum User {
    Citizen { name: String },
    Staff { name: String, department: String },
}

impl User {
    pub fn name(&self) -> &str {
        match self {
            User::Citizen { name } => name,
            User::Staff { name, .. } => name,
        }
    }

    /// Role tag as used in message keys (`auth.citizen`, `auth.staff`).
    pub fn role(&self) -> &'static str {
        match self {
            User::Citizen { .. } => "citizen",
            User::Staff { .. } => "staff",
        }
    }
}
