//! Planting compatibility and recommendation engine
//!
//! Shared between the API server and the browser module. Every function here
//! is pure: the plant catalog and alert tables are loaded once and never
//! mutated, so callers may share them freely across threads.

pub mod calendar;
pub mod catalog;
pub mod compatibility;
pub mod error;
pub mod models;
pub mod pests;
pub mod types;
pub mod validation;
pub mod weather;
pub mod zones;

pub use calendar::*;
pub use catalog::*;
pub use compatibility::*;
pub use error::*;
pub use models::*;
pub use pests::*;
pub use types::*;
pub use validation::*;
pub use weather::*;
pub use zones::*;
