//! Defines the records held by the station dataset and the per-query results
//! produced from them.

use serde::{Deserialize, Serialize};

/// A single police station in the dataset.
///
/// Records are created when the dataset is loaded and never mutated afterwards.
/// On the wire a record is `{name, lat, lng, area}`; `latitude`/`longitude`
/// are accepted as aliases when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Display name, e.g. "Kandy Police Station".
    pub name: String,
    /// Latitude in decimal degrees (positive for North).
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East).
    #[serde(rename = "lng", alias = "longitude")]
    pub longitude: f64,
    /// Free-text district or locality label.
    pub area: String,
}

impl StationRecord {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        area: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            area: area.into(),
        }
    }
}

/// A [`StationRecord`] together with its distance from the query point.
///
/// Built fresh for every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(flatten)]
    pub station: StationRecord,
    /// Great-circle distance in kilometres, rounded to the configured precision.
    pub distance_km: f64,
}
