use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read station file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse station JSON")]
    JsonParse(#[from] serde_json::Error),

    #[error("Station #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("Station '{name}' has invalid coordinates: {reason}")]
    InvalidCoordinates { name: String, reason: String },

    #[error("Station '{name}' at ({latitude}, {longitude}) appears more than once")]
    DuplicateStation {
        name: String,
        latitude: f64,
        longitude: f64,
    },
}
