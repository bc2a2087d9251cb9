use crate::config::GeoBounds;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number greater than 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },

    #[error("Default limit {default_limit} exceeds the maximum limit {max_limit}")]
    DefaultAboveMax {
        default_limit: usize,
        max_limit: usize,
    },

    #[error("{field} must be at most {max} decimals, got {value}")]
    PrecisionTooHigh {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Regional bounds {0:?} are not an ordered range inside the globe")]
    InvalidBounds(GeoBounds),

    #[error("Failed to parse config JSON")]
    JsonParse(#[from] serde_json::Error),
}
