use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("Cannot convert {value} {unit}: value is not a finite number")]
    NonFiniteAngle { value: f64, unit: &'static str },

    #[error(
        "Distance between ({lat1}, {lon1}) and ({lat2}, {lon2}) is not a finite number"
    )]
    NonFiniteDistance {
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    },
}
