//! Static reference data: departments, locations and the staff worklist.
//!
//! Nothing here is user-mutable; it stands in for lookups a real backend
//! would serve.

mod assignments;
mod departments;
mod locations;

pub use assignments::*;
pub use departments::*;
pub use locations::*;
