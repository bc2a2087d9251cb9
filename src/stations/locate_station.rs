//! The search service: nearest-N, within-radius and textual lookups over a
//! station dataset.

use crate::compat::NearestRequest;
use crate::config::GeoConfig;
use crate::dataset::station_dataset::StationDataset;
use crate::error::{ensure_valid, LocatorError};
use crate::geo::distance::calculate_distance;
use crate::geo::spatial_index::SpatialIndex;
use crate::types::search_params::SearchParams;
use crate::types::station::{SearchResult, StationRecord};
use crate::types::statistics::{AxisRange, DatasetStatistics};
use crate::utils::fold_text;
use crate::validation::report::Field;
use crate::validation::sanitize::sanitize_search_params;
use crate::validation::validators::{
    missing, validate_area, validate_coordinate_params, validate_limit, validate_name,
    validate_radius,
};
use chrono::Utc;
use log::{debug, warn};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Answers station queries against one immutable dataset.
///
/// The locator owns its dataset, a spatial index over it, and the policy
/// config. It holds no mutable state, so a shared reference can serve any
/// number of threads at once.
///
/// # Examples
///
/// ```
/// use police_locator::{GeoConfig, SearchParams, StationDataset, StationLocator};
///
/// let locator = StationLocator::new(StationDataset::bundled()?, GeoConfig::default())?;
///
/// let nearest = locator.find_nearest_stations(SearchParams::nearest(6.9271, 79.8612, Some(3.0)))?;
/// assert_eq!(nearest.len(), 3);
/// assert_eq!(nearest[0].distance_km, 0.0);
///
/// let around_kandy = locator.stations_within_radius(SearchParams::within_radius(7.2906, 80.6337, 10.0))?;
/// assert!(around_kandy.iter().all(|r| r.distance_km <= 10.0));
/// # Ok::<(), police_locator::LocatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StationLocator {
    dataset: StationDataset,
    index: SpatialIndex,
    config: GeoConfig,
}

impl StationLocator {
    /// Indexes `dataset` for searching under `config`.
    ///
    /// # Errors
    ///
    /// [`LocatorError::Config`] if `config` fails [`GeoConfig::validate`].
    pub fn new(dataset: StationDataset, config: GeoConfig) -> Result<Self, LocatorError> {
        config.validate()?;
        let index = SpatialIndex::new(dataset.stations());
        Ok(Self {
            dataset,
            index,
            config,
        })
    }

    /// A locator over [`StationDataset::bundled`] with the default config.
    pub fn with_bundled_dataset() -> Result<Self, LocatorError> {
        Self::new(StationDataset::bundled()?, GeoConfig::default())
    }

    pub fn dataset(&self) -> &StationDataset {
        &self.dataset
    }

    pub fn config(&self) -> &GeoConfig {
        &self.config
    }

    /// Up to `limit` stations closest to the query point, closest first.
    ///
    /// Accepts a [`SearchParams`] or, for older callers, a positional
    /// `(lat, lng)` / `(lat, lng, limit)` tuple. A missing limit means
    /// `config.default_limit`.
    ///
    /// Only stations inside the default bounding box around the point are
    /// considered, unless none of them can be measured (the box is empty or
    /// holds only bad records), in which case every station is.
    ///
    /// # Errors
    ///
    /// * [`LocatorError::InvalidCoordinates`] for missing, non-finite or
    ///   off-globe coordinates.
    /// * [`LocatorError::OutOfBounds`] for coordinates outside the regional bounds.
    /// * [`LocatorError::InvalidLimit`] if the sanitized limit is below 1 or above
    ///   `config.max_limit`.
    pub fn find_nearest_stations(
        &self,
        request: impl Into<NearestRequest>,
    ) -> Result<Vec<SearchResult>, LocatorError> {
        let params = self.sanitize(request.into().into_params());
        let (lat, lng) = self.validated_location(&params)?;

        let limit = params.limit.unwrap_or(self.config.default_limit as f64);
        ensure_valid(
            validate_limit(limit, self.config.max_limit),
            LocatorError::InvalidLimit,
        )?;
        let limit = limit as usize;

        let candidates = self
            .index
            .candidates(lat, lng, self.config.bounding_box_threshold_deg);
        let mut results = self.measure_with_fallback(lat, lng, &candidates);
        sort_by_distance(&mut results);
        results.truncate(limit);

        debug!(
            "Nearest query ({}, {}) limit {}: {} candidates, {} results",
            lat,
            lng,
            limit,
            candidates.len(),
            results.len()
        );
        Ok(results)
    }

    /// Every station within `radius_km` of the query point, closest first.
    ///
    /// An empty list is a normal answer when nothing is in range.
    ///
    /// # Errors
    ///
    /// Coordinate errors as for [`StationLocator::find_nearest_stations`], and
    /// [`LocatorError::InvalidRadius`] when the radius is missing, not positive,
    /// or above `config.max_radius_km` after sanitizing.
    pub fn stations_within_radius(
        &self,
        params: SearchParams,
    ) -> Result<Vec<SearchResult>, LocatorError> {
        let params = self.sanitize(params);
        let (lat, lng) = self.validated_location(&params)?;

        let radius_km = match params.radius_km {
            Some(radius_km) => radius_km,
            None => return Err(LocatorError::InvalidRadius(missing(Field::Radius))),
        };
        ensure_valid(
            validate_radius(radius_km, self.config.max_radius_km),
            LocatorError::InvalidRadius,
        )?;

        let candidates = self.index.candidates_in_box(
            lat,
            lng,
            self.config.radius_threshold_deg(radius_km),
            self.config.radius_longitude_threshold_deg(radius_km, lat),
        );
        let mut results = self.measure_with_fallback(lat, lng, &candidates);
        results.retain(|r| r.distance_km <= radius_km);
        sort_by_distance(&mut results);

        debug!(
            "Radius query ({}, {}) {} km: {} candidates, {} results",
            lat,
            lng,
            radius_km,
            candidates.len(),
            results.len()
        );
        Ok(results)
    }

    /// Stations whose area or name contains `area`, ignoring case, in dataset order.
    pub fn stations_by_area(&self, area: &str) -> Result<Vec<&StationRecord>, LocatorError> {
        ensure_valid(
            validate_area(area, self.config.max_text_length),
            LocatorError::InvalidArea,
        )?;
        let needle = fold_text(area);
        Ok(self
            .dataset
            .iter()
            .filter(|s| fold_text(&s.area).contains(&needle) || fold_text(&s.name).contains(&needle))
            .collect())
    }

    /// Area search driven by [`SearchParams::area`], sanitized like the other
    /// queries before the rules of [`StationLocator::stations_by_area`] apply.
    ///
    /// # Errors
    ///
    /// [`LocatorError::InvalidArea`] if `area` is missing, blank or too long.
    pub fn find_by_area(&self, params: SearchParams) -> Result<Vec<&StationRecord>, LocatorError> {
        match self.sanitize(params).area {
            Some(area) => self.stations_by_area(&area),
            None => Err(LocatorError::InvalidArea(missing(Field::Area))),
        }
    }

    /// Looks a station up by name: exact match first, then case-insensitive.
    ///
    /// `Ok(None)` means no station has that name.
    ///
    /// # Examples
    ///
    /// ```
    /// use police_locator::StationLocator;
    ///
    /// let locator = StationLocator::with_bundled_dataset()?;
    /// let exact = locator.station_by_name("Kandy Police Station")?;
    /// let folded = locator.station_by_name("kandy police station")?;
    /// assert!(exact.is_some());
    /// assert_eq!(exact, folded);
    /// assert!(locator.station_by_name("Atlantis Police Station")?.is_none());
    /// # Ok::<(), police_locator::LocatorError>(())
    /// ```
    pub fn station_by_name(&self, name: &str) -> Result<Option<&StationRecord>, LocatorError> {
        ensure_valid(
            validate_name(name, self.config.max_text_length),
            LocatorError::InvalidName,
        )?;
        let name = name.trim();
        let exact = self.dataset.iter().find(|s| s.name == name);
        Ok(exact.or_else(|| {
            let folded = fold_text(name);
            self.dataset.iter().find(|s| fold_text(&s.name) == folded)
        }))
    }

    /// Unique area labels, sorted.
    pub fn all_areas(&self) -> Vec<&str> {
        self.dataset
            .iter()
            .map(|s| s.area.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn dataset_statistics(&self) -> DatasetStatistics {
        DatasetStatistics {
            total_stations: self.dataset.len(),
            unique_areas: self.all_areas().len(),
            latitude: AxisRange::from_values(self.dataset.iter().map(|s| s.latitude)),
            longitude: AxisRange::from_values(self.dataset.iter().map(|s| s.longitude)),
            generated_at: Utc::now(),
        }
    }

    /// Runs independent nearest-station queries in parallel.
    ///
    /// Results line up with `requests`; one failing query does not affect the others.
    pub fn find_nearest_batch(
        &self,
        requests: &[NearestRequest],
    ) -> Vec<Result<Vec<SearchResult>, LocatorError>> {
        requests
            .par_iter()
            .map(|request| self.find_nearest_stations(request.clone()))
            .collect()
    }

    fn sanitize(&self, params: SearchParams) -> SearchParams {
        sanitize_search_params(params, self.config.coordinate_precision)
    }

    fn validated_location(&self, params: &SearchParams) -> Result<(f64, f64), LocatorError> {
        let report =
            validate_coordinate_params(params.lat, params.lng, Some(&self.config.regional_bounds));
        match (params.lat, params.lng) {
            (Some(lat), Some(lng)) if report.is_valid() => Ok((lat, lng)),
            _ => Err(LocatorError::from_coordinate_report(report)),
        }
    }

    /// [`StationLocator::measure`] over the candidates, or over the whole
    /// dataset when not one candidate could be measured.
    fn measure_with_fallback(&self, lat: f64, lng: f64, candidates: &[usize]) -> Vec<SearchResult> {
        let results = self.measure(lat, lng, candidates);
        if !results.is_empty() || candidates.len() >= self.dataset.len() {
            return results;
        }
        debug!(
            "No measurable station among {} candidates near ({}, {}); measuring all {}",
            candidates.len(),
            lat,
            lng,
            self.dataset.len()
        );
        let everything: Vec<usize> = (0..self.dataset.len()).collect();
        self.measure(lat, lng, &everything)
    }

    /// Distances from the query point to each candidate, in candidate order.
    /// Stations whose distance cannot be computed are logged and dropped.
    fn measure(&self, lat: f64, lng: f64, candidates: &[usize]) -> Vec<SearchResult> {
        let stations = self.dataset.stations();
        candidates
            .iter()
            .filter_map(|&i| {
                let station = &stations[i];
                match calculate_distance(&self.config, lat, lng, station.latitude, station.longitude)
                {
                    Ok(distance_km) => Some(SearchResult {
                        station: station.clone(),
                        distance_km,
                    }),
                    Err(e) => {
                        warn!("Skipping station '{}': {}", station.name, e);
                        None
                    }
                }
            })
            .collect()
    }
}

/// Stable: equal distances keep dataset order.
fn sort_by_distance(results: &mut [SearchResult]) {
    results.sort_by_key(|r| OrderedFloat(r.distance_km));
}
