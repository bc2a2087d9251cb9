mod compat;
mod config;
mod dataset;
mod error;
mod geo;
mod stations;
mod types;
mod utils;
mod validation;

pub use compat::NearestRequest;
pub use config::error::ConfigError;
pub use config::*;
pub use error::LocatorError;

pub use stations::locate_station::StationLocator;

pub use types::search_params::SearchParams;
pub use types::station::{SearchResult, StationRecord};
pub use types::statistics::{AxisRange, DatasetStatistics};

pub use dataset::error::DatasetError;
pub use dataset::station_dataset::StationDataset;

pub use geo::bounding_box::bounding_box_candidates;
pub use geo::distance::{approximate_distance, calculate_distance, to_degrees, to_radians};
pub use geo::error::CalculationError;
pub use geo::spatial_index::SpatialIndex;

pub use validation::report::{Field, ValidationReport, Violation, ViolationKind};
pub use validation::sanitize::sanitize_search_params;
pub use validation::validators::{
    validate_area, validate_coordinates, validate_limit, validate_name, validate_radius,
};
