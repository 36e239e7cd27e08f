//! HTTP handlers for the Garden Planner API

pub mod calendar;
pub mod health;
pub mod pest;
pub mod plant;
pub mod recommendation;
pub mod weather;
pub mod zone;

pub use calendar::*;
pub use health::*;
pub use pest::*;
pub use plant::*;
pub use recommendation::*;
pub use weather::*;
pub use zone::*;

use chrono::{Local, NaiveDate};

/// Server-local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
