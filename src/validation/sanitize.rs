use crate::types::search_params::SearchParams;
use crate::utils::round_to;

/// Normalizes raw search parameters. Runs before validation.
///
/// * `lat`/`lng` are rounded to `coordinate_precision` decimals.
/// * `limit` is floored and made absolute, so `-3` becomes `3`.
/// * `radius_km` is made absolute; fractional radii are kept.
/// * `area` is trimmed.
///
/// Non-finite numbers pass through untouched and are rejected by validation.
///
/// # Examples
///
/// ```
/// use police_locator::{sanitize_search_params, SearchParams};
///
/// let raw = SearchParams::builder()
///     .lat(6.927_149)
///     .lng(79.861_201)
///     .limit(-3.0)
///     .area("  Kandy ")
///     .build();
/// let clean = sanitize_search_params(raw, 4);
/// assert_eq!(clean.lat, Some(6.9271));
/// assert_eq!(clean.limit, Some(3.0));
/// assert_eq!(clean.area.as_deref(), Some("Kandy"));
/// ```
pub fn sanitize_search_params(params: SearchParams, coordinate_precision: u32) -> SearchParams {
    let round = |v: f64| {
        if v.is_finite() {
            round_to(v, coordinate_precision)
        } else {
            v
        }
    };
    SearchParams {
        lat: params.lat.map(round),
        lng: params.lng.map(round),
        limit: params.limit.map(floor_abs),
        radius_km: params.radius_km.map(f64::abs),
        area: params.area.map(|a| a.trim().to_string()),
    }
}

fn floor_abs(value: f64) -> f64 {
    value.floor().abs()
}
