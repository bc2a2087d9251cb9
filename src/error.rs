use crate::config::error::ConfigError;
use crate::dataset::error::DatasetError;
use crate::geo::error::CalculationError;
use crate::validation::report::{ValidationReport, ViolationKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(ValidationReport),

    #[error("Coordinates outside the service region: {0}")]
    OutOfBounds(ValidationReport),

    #[error("Invalid limit: {0}")]
    InvalidLimit(ValidationReport),

    #[error("Invalid radius: {0}")]
    InvalidRadius(ValidationReport),

    #[error("Invalid area: {0}")]
    InvalidArea(ValidationReport),

    #[error("Invalid name: {0}")]
    InvalidName(ValidationReport),

    #[error("Distance calculation failed")]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl LocatorError {
    /// The accumulated violations, for validation failures.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            LocatorError::InvalidCoordinates(r)
            | LocatorError::OutOfBounds(r)
            | LocatorError::InvalidLimit(r)
            | LocatorError::InvalidRadius(r)
            | LocatorError::InvalidArea(r)
            | LocatorError::InvalidName(r) => Some(r),
            LocatorError::Calculation(_) | LocatorError::Dataset(_) | LocatorError::Config(_) => {
                None
            }
        }
    }

    /// Coordinates that are malformed or outside the globe are invalid; valid
    /// coordinates that only miss the service region are out of bounds.
    pub(crate) fn from_coordinate_report(report: ValidationReport) -> Self {
        if report.has_kind(ViolationKind::Type) || report.has_kind(ViolationKind::Range) {
            LocatorError::InvalidCoordinates(report)
        } else {
            LocatorError::OutOfBounds(report)
        }
    }
}

/// Turns a report into `Ok(())` or the error built by `wrap`.
pub(crate) fn ensure_valid(
    report: ValidationReport,
    wrap: fn(ValidationReport) -> LocatorError,
) -> Result<(), LocatorError> {
    if report.is_valid() {
        Ok(())
    } else {
        Err(wrap(report))
    }
}
