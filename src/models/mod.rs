//! Data models for the grievance portal.
//!
//! Field names serialize in camelCase to match the portal's JSON contract.

mod complaint;
mod department;
mod location;
mod notification;
mod staff;
mod user;

pub use complaint::*;
pub use department::*;
pub use location::*;
pub use notification::*;
pub use staff::*;
pub use user::*;
