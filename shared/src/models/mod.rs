//! Domain models for the planting engine

mod compatibility;
mod pest;
mod plant;
mod season;
mod task;
mod zone;

pub use compatibility::*;
pub use pest::*;
pub use plant::*;
pub use season::*;
pub use task::*;
pub use zone::*;
