use bon::Builder;
use serde::{Deserialize, Serialize};

/// Loosely-typed search parameters as they arrive from a caller.
///
/// Every field is optional so that one shape covers nearest-N (`lat`, `lng`,
/// `limit`), radius (`lat`, `lng`, `radius_km`) and area (`area`) queries.
/// Numeric fields are `f64` on purpose: callers may pass fractional or negative
/// limits, which [`crate::sanitize_search_params`] normalizes before validation.
///
/// # Examples
///
/// ```
/// use police_locator::SearchParams;
///
/// let params = SearchParams::builder()
///     .lat(6.9271)
///     .lng(79.8612)
///     .limit(3.0)
///     .build();
/// assert_eq!(params.limit, Some(3.0));
/// assert!(params.radius_km.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub limit: Option<f64>,
    pub radius_km: Option<f64>,
    #[builder(into)]
    pub area: Option<String>,
}

impl SearchParams {
    /// Shorthand for a nearest-N query.
    pub fn nearest(lat: f64, lng: f64, limit: Option<f64>) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            limit,
            ..Default::default()
        }
    }

    /// Shorthand for a radius query.
    pub fn within_radius(lat: f64, lng: f64, radius_km: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            radius_km: Some(radius_km),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let params: SearchParams =
            serde_json::from_str(r#"{"lat": 6.9271, "lng": 79.8612, "radiusKm": 5}"#).unwrap();
        assert_eq!(params, SearchParams::within_radius(6.9271, 79.8612, 5.0));
    }

    #[test]
    fn builder_accepts_str_area() {
        let params = SearchParams::builder().area("Kandy").build();
        assert_eq!(params.area.as_deref(), Some("Kandy"));
        assert!(params.lat.is_none());
    }
}
