//! Loading and integrity checking of the read-only station table.

use crate::dataset::error::DatasetError;
use crate::types::station::StationRecord;
use crate::validation::validators::validate_coordinates;
use log::info;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

const BUNDLED_STATIONS_JSON: &str = include_str!("../../data/police_stations.json");

/// An immutable, ordered table of stations.
///
/// Order matters: search results with equal distances keep the order in which
/// stations appear here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationDataset {
    stations: Vec<StationRecord>,
}

impl StationDataset {
    /// Wraps records as-is, without integrity checks.
    ///
    /// Intended for synthetic datasets and tests. Use the `from_json_*`
    /// loaders for data from outside the program.
    pub fn from_records(stations: Vec<StationRecord>) -> Self {
        Self { stations }
    }

    /// Parses and checks a JSON array of `{name, lat, lng, area}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let stations: Vec<StationRecord> = serde_json::from_str(json)?;
        Self::checked(stations)
    }

    pub fn from_json_reader(reader: impl Read) -> Result<Self, DatasetError> {
        let stations: Vec<StationRecord> = serde_json::from_reader(reader)?;
        Self::checked(stations)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, DatasetError> {
        let bytes =
            std::fs::read(path).map_err(|e| DatasetError::Read(path.to_path_buf(), e))?;
        let stations: Vec<StationRecord> = serde_json::from_slice(&bytes)?;
        Self::checked(stations)
    }

    /// The police stations shipped with the crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use police_locator::StationDataset;
    ///
    /// let dataset = StationDataset::bundled().unwrap();
    /// assert!(!dataset.is_empty());
    /// assert!(dataset.iter().any(|s| s.name == "Kandy Police Station"));
    /// ```
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED_STATIONS_JSON)
    }

    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StationRecord> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    fn checked(stations: Vec<StationRecord>) -> Result<Self, DatasetError> {
        let start = std::time::Instant::now();
        let mut seen: HashSet<(String, u64, u64)> = HashSet::with_capacity(stations.len());

        for (index, station) in stations.iter().enumerate() {
            if station.name.trim().is_empty() {
                return Err(DatasetError::EmptyName { index });
            }

            let report = validate_coordinates(station.latitude, station.longitude, None);
            if !report.is_valid() {
                return Err(DatasetError::InvalidCoordinates {
                    name: station.name.clone(),
                    reason: report.to_string(),
                });
            }

            let key = (
                station.name.clone(),
                station.latitude.to_bits(),
                station.longitude.to_bits(),
            );
            if !seen.insert(key) {
                return Err(DatasetError::DuplicateStation {
                    name: station.name.clone(),
                    latitude: station.latitude,
                    longitude: station.longitude,
                });
            }
        }

        info!(
            "Loaded {} stations in {:?}",
            stations.len(),
            start.elapsed()
        );
        Ok(Self { stations })
    }
}

impl<'a> IntoIterator for &'a StationDataset {
    type Item = &'a StationRecord;
    type IntoIter = std::slice::Iter<'a, StationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}
