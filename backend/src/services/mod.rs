//! Business logic services for the Garden Planner API

pub mod calendar;
pub mod pest;
pub mod plant;
pub mod recommendation;
pub mod weather;
pub mod zone;

pub use calendar::CalendarService;
pub use pest::PestService;
pub use plant::PlantService;
pub use recommendation::RecommendationService;
pub use weather::WeatherService;
pub use zone::ZoneService;
