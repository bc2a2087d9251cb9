//! Policy constants for the search engine.
//!
//! Every tunable number the engine relies on lives in [`GeoConfig`]. A config is
//! built once (usually via [`GeoConfig::default`] or [`GeoConfig::builder`]) and
//! handed to [`crate::StationLocator::new`]; nothing reads ambient state.

pub(crate) mod error;

use crate::config::error::ConfigError;
use bon::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_BOUNDING_BOX_THRESHOLD_DEG: f64 = 0.5;
pub const DEFAULT_KM_PER_DEGREE: f64 = 111.32;
pub const DEFAULT_RADIUS_THRESHOLD_MARGIN: f64 = 1.5;
pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_MAX_LIMIT: usize = 50;
pub const DEFAULT_MAX_RADIUS_KM: f64 = 1000.0;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 100;
/// 4 decimals is roughly 11 m of resolution.
pub const DEFAULT_COORDINATE_PRECISION: u32 = 4;
pub const DEFAULT_DISTANCE_PRECISION: u32 = 4;
/// Beyond 15 decimals an `f64` has no digits left to round.
pub const MAX_PRECISION: u32 = 15;
const FULL_LONGITUDE_SPAN_DEG: f64 = 360.0;

/// An axis-aligned rectangle in latitude/longitude space (inclusive on all edges).
///
/// # Examples
///
/// ```
/// use police_locator::GeoBounds;
///
/// assert!(GeoBounds::GLOBAL.contains(89.9, -179.9));
/// assert!(GeoBounds::SRI_LANKA.contains(6.9271, 79.8612));
/// assert!(!GeoBounds::SRI_LANKA.contains(51.5074, -0.1278));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    /// The full valid range of geographic coordinates.
    pub const GLOBAL: GeoBounds = GeoBounds {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lng: -180.0,
        max_lng: 180.0,
    };

    /// Service region used for strict validation of the bundled dataset.
    pub const SRI_LANKA: GeoBounds = GeoBounds {
        min_lat: 5.9,
        max_lat: 9.9,
        min_lng: 79.5,
        max_lng: 81.9,
    };

    pub fn contains_latitude(&self, lat: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat
    }

    pub fn contains_longitude(&self, lng: f64) -> bool {
        lng >= self.min_lng && lng <= self.max_lng
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        self.contains_latitude(lat) && self.contains_longitude(lng)
    }

    /// Finite, ordered on both axes, and inside [`GeoBounds::GLOBAL`].
    pub fn is_well_formed(&self) -> bool {
        self.min_lat <= self.max_lat
            && self.min_lng <= self.max_lng
            && GeoBounds::GLOBAL.contains(self.min_lat, self.min_lng)
            && GeoBounds::GLOBAL.contains(self.max_lat, self.max_lng)
    }
}

/// Immutable policy configuration shared by every component of the engine.
///
/// Missing fields fall back to the `DEFAULT_*` constants, both when using the
/// builder and when deserializing. The builder does not check values;
/// [`GeoConfig::validate`] does, and [`GeoConfig::from_json_str`] and
/// [`crate::StationLocator::new`] call it.
///
/// # Examples
///
/// ```
/// use police_locator::{GeoConfig, GeoBounds};
///
/// let config = GeoConfig::builder()
///     .max_limit(20)
///     .regional_bounds(GeoBounds::GLOBAL)
///     .build();
/// assert_eq!(config.max_limit, 20);
/// assert_eq!(config.default_limit, 5);
/// assert_eq!(config.earth_radius_km, 6371.0);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeoConfig {
    /// Mean Earth radius used by the Haversine and equirectangular formulas.
    #[builder(default = DEFAULT_EARTH_RADIUS_KM)]
    pub earth_radius_km: f64,
    /// Half-width of the bounding box used to prefilter nearest-N queries.
    #[builder(default = DEFAULT_BOUNDING_BOX_THRESHOLD_DEG)]
    pub bounding_box_threshold_deg: f64,
    /// Kilometres per degree, used to turn a search radius into a box half-width.
    #[builder(default = DEFAULT_KM_PER_DEGREE)]
    pub km_per_degree: f64,
    /// Safety factor applied on top of the radius-derived box half-width.
    #[builder(default = DEFAULT_RADIUS_THRESHOLD_MARGIN)]
    pub radius_threshold_margin: f64,
    #[builder(default = DEFAULT_LIMIT)]
    pub default_limit: usize,
    #[builder(default = DEFAULT_MAX_LIMIT)]
    pub max_limit: usize,
    #[builder(default = DEFAULT_MAX_RADIUS_KM)]
    pub max_radius_km: f64,
    /// Maximum length (in characters) of area and name queries.
    #[builder(default = DEFAULT_MAX_TEXT_LENGTH)]
    pub max_text_length: usize,
    /// Decimal places kept when sanitizing query coordinates.
    #[builder(default = DEFAULT_COORDINATE_PRECISION)]
    pub coordinate_precision: u32,
    /// Decimal places kept in computed distances.
    #[builder(default = DEFAULT_DISTANCE_PRECISION)]
    pub distance_precision: u32,
    /// Bounds enforced by strict coordinate validation.
    #[builder(default = GeoBounds::SRI_LANKA)]
    pub regional_bounds: GeoBounds,
}

impl Default for GeoConfig {
    fn default() -> Self {
        GeoConfig::builder().build()
    }
}

impl GeoConfig {
    /// Parses and validates a JSON config document. Fields that are absent
    /// keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would make distances or thresholds meaningless.
    /// Reports the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("earthRadiusKm", self.earth_radius_km),
            ("boundingBoxThresholdDeg", self.bounding_box_threshold_deg),
            ("kmPerDegree", self.km_per_degree),
            ("radiusThresholdMargin", self.radius_threshold_margin),
            ("maxRadiusKm", self.max_radius_km),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("defaultLimit", self.default_limit),
            ("maxLimit", self.max_limit),
            ("maxTextLength", self.max_text_length),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroCount { field });
            }
        }
        if self.default_limit > self.max_limit {
            return Err(ConfigError::DefaultAboveMax {
                default_limit: self.default_limit,
                max_limit: self.max_limit,
            });
        }
        for (field, value) in [
            ("coordinatePrecision", self.coordinate_precision),
            ("distancePrecision", self.distance_precision),
        ] {
            if value > MAX_PRECISION {
                return Err(ConfigError::PrecisionTooHigh {
                    field,
                    value,
                    max: MAX_PRECISION,
                });
            }
        }
        if !self.regional_bounds.is_well_formed() {
            return Err(ConfigError::InvalidBounds(self.regional_bounds));
        }
        Ok(())
    }

    /// Latitude half-width (degrees) of the box for a radius search of `radius_km`.
    ///
    /// Never smaller than the default nearest-N threshold.
    pub fn radius_threshold_deg(&self, radius_km: f64) -> f64 {
        let scaled = radius_km / self.km_per_degree * self.radius_threshold_margin;
        scaled.max(self.bounding_box_threshold_deg)
    }

    /// Longitude half-width (degrees) of the box for a radius search of
    /// `radius_km` centered at `center_lat`.
    ///
    /// A degree of longitude shrinks with the cosine of the latitude, so the
    /// latitude half-width is divided by the cosine at the box edge nearest a
    /// pole. Boxes that get that close to a pole span every longitude.
    pub fn radius_longitude_threshold_deg(&self, radius_km: f64, center_lat: f64) -> f64 {
        let lat_half_width = self.radius_threshold_deg(radius_km);
        let edge_lat = (center_lat.abs() + lat_half_width).min(90.0);
        let cos = edge_lat.to_radians().cos();
        if cos <= lat_half_width / FULL_LONGITUDE_SPAN_DEG {
            FULL_LONGITUDE_SPAN_DEG
        } else {
            lat_half_width / cos
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = GeoConfig::default();
        assert_eq!(config.earth_radius_km, DEFAULT_EARTH_RADIUS_KM);
        assert_eq!(config.bounding_box_threshold_deg, 0.5);
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.max_limit, 50);
        assert_eq!(config.max_radius_km, 1000.0);
        assert_eq!(config.regional_bounds, GeoBounds::SRI_LANKA);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GeoConfig::from_json_str(r#"{"maxLimit": 10, "earthRadiusKm": 6378.1}"#)
            .expect("valid config json");
        assert_eq!(config.max_limit, 10);
        assert_eq!(config.earth_radius_km, 6378.1);
        assert_eq!(config.default_limit, DEFAULT_LIMIT);
        assert_eq!(config.regional_bounds, GeoBounds::SRI_LANKA);
    }

    #[test]
    fn regional_bounds_from_json() {
        let config = GeoConfig::from_json_str(
            r#"{"regionalBounds": {"minLat": 50.0, "maxLat": 54.0, "minLng": 3.0, "maxLng": 8.0}}"#,
        )
        .expect("valid config json");
        assert!(config.regional_bounds.contains(52.37, 4.89));
        assert!(!config.regional_bounds.contains(6.9271, 79.8612));
    }

    #[test]
    fn radius_threshold_scales_with_margin() {
        let config = GeoConfig::default();
        let threshold = config.radius_threshold_deg(111.32);
        assert!((threshold - 1.5).abs() < 1e-12);
        // Small radii never shrink the box below the nearest-N threshold.
        assert_eq!(config.radius_threshold_deg(1.0), 0.5);
    }

    #[test]
    fn longitude_threshold_widens_with_latitude() {
        let config = GeoConfig::default();
        let lat_half_width = config.radius_threshold_deg(100.0);
        let equator = config.radius_longitude_threshold_deg(100.0, 0.0);
        assert!(equator >= lat_half_width && equator < lat_half_width * 1.01);

        // At 60° the box must reach a station 1.75° of longitude (about 97 km) away.
        let north = config.radius_longitude_threshold_deg(100.0, 60.0);
        assert!(north > 1.75 * 1.5, "got {north}");
        assert!(north >= 2.0 * lat_half_width);

        assert_eq!(config.radius_longitude_threshold_deg(100.0, -89.5), 360.0);
        assert_eq!(config.radius_longitude_threshold_deg(10.0, 90.0), 360.0);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(GeoConfig::default().validate().is_ok());
        assert!(GeoConfig::builder()
            .regional_bounds(GeoBounds::GLOBAL)
            .build()
            .validate()
            .is_ok());
    }

    #[test]
    fn validate_rejects_unusable_values() {
        let cases = [
            GeoConfig::builder().earth_radius_km(-6371.0).build(),
            GeoConfig::builder().earth_radius_km(f64::NAN).build(),
            GeoConfig::builder().bounding_box_threshold_deg(f64::NAN).build(),
            GeoConfig::builder().km_per_degree(0.0).build(),
            GeoConfig::builder().max_radius_km(f64::INFINITY).build(),
            GeoConfig::builder().max_limit(0).build(),
            GeoConfig::builder().default_limit(0).build(),
            GeoConfig::builder().default_limit(10).max_limit(5).build(),
            GeoConfig::builder().distance_precision(400).build(),
            GeoConfig::builder().coordinate_precision(u32::MAX).build(),
            GeoConfig::builder()
                .regional_bounds(GeoBounds {
                    min_lat: 10.0,
                    max_lat: 5.0,
                    min_lng: 79.5,
                    max_lng: 81.9,
                })
                .build(),
        ];
        for config in cases {
            assert!(config.validate().is_err(), "accepted {config:?}");
        }
    }

    #[test]
    fn validate_names_the_field() {
        let err = GeoConfig::builder().max_limit(0).build().validate().unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCount { field: "maxLimit" }));

        let err = GeoConfig::builder()
            .distance_precision(400)
            .build()
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "distancePrecision must be at most 15 decimals, got 400");
    }

    #[test]
    fn json_with_bad_values_is_rejected() {
        assert!(matches!(
            GeoConfig::from_json_str(r#"{"distancePrecision": 400}"#),
            Err(ConfigError::PrecisionTooHigh { .. })
        ));
        assert!(matches!(
            GeoConfig::from_json_str(r#"{"earthRadiusKm": -1.0}"#),
            Err(ConfigError::NotPositive { field: "earthRadiusKm", .. })
        ));
        assert!(matches!(
            GeoConfig::from_json_str("{not json"),
            Err(ConfigError::JsonParse(_))
        ));
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = GeoBounds::SRI_LANKA;
        assert!(b.contains(5.9, 79.5));
        assert!(b.contains(9.9, 81.9));
        assert!(!b.contains(5.89, 80.0));
        assert!(!b.contains(7.0, 81.91));
    }
}
