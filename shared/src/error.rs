//! Errors raised while loading the static catalog and alert tables

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Duplicate plant id: {0}")]
    DuplicateId(String),

    #[error("Plant {0} has no planting season")]
    NoPlantingSeason(String),

    #[error("Plant {id}: {message}")]
    InvalidPlant { id: String, message: &'static str },

    #[error("Pest alert in band {band}: {message}")]
    InvalidPestAlert { band: String, message: &'static str },
}
