//! Great-circle and flat-plane distance calculations.
//!
//! [`calculate_distance`] is the accurate path (Haversine, validated inputs,
//! rounded output). [`approximate_distance`] is the cheap equirectangular
//! projection meant for coarse filtering in hot loops.

use crate::config::GeoConfig;
use crate::error::{ensure_valid, LocatorError};
use crate::geo::error::CalculationError;
use crate::utils::round_to;
use crate::validation::report::ValidationReport;
use crate::validation::validators::validate_coordinates;

pub fn to_radians(degrees: f64) -> Result<f64, CalculationError> {
    if !degrees.is_finite() {
        return Err(CalculationError::NonFiniteAngle {
            value: degrees,
            unit: "degrees",
        });
    }
    Ok(degrees.to_radians())
}

pub fn to_degrees(radians: f64) -> Result<f64, CalculationError> {
    if !radians.is_finite() {
        return Err(CalculationError::NonFiniteAngle {
            value: radians,
            unit: "radians",
        });
    }
    Ok(radians.to_degrees())
}

/// Haversine distance in kilometres between two points, rounded to
/// `config.distance_precision` decimals.
///
/// Both endpoints are checked against the global coordinate range first; the
/// regional bounds are not applied here.
///
/// # Errors
///
/// * [`LocatorError::InvalidCoordinates`] if either endpoint is not finite or
///   outside the globe. The report lists every bad value of both points.
/// * [`LocatorError::Calculation`] if the formula yields a non-finite result.
///
/// # Examples
///
/// ```
/// use police_locator::{calculate_distance, GeoConfig};
///
/// let config = GeoConfig::default();
/// // Colombo to Kandy
/// let km = calculate_distance(&config, 6.9271, 79.8612, 7.2906, 80.6337).unwrap();
/// assert!((km - 94.0).abs() < 5.0);
/// ```
pub fn calculate_distance(
    config: &GeoConfig,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> Result<f64, LocatorError> {
    let mut report = ValidationReport::new();
    report.merge(validate_coordinates(lat1, lon1, None));
    report.merge(validate_coordinates(lat2, lon2, None));
    ensure_valid(report, LocatorError::InvalidCoordinates)?;

    let phi1 = to_radians(lat1)?;
    let phi2 = to_radians(lat2)?;
    let d_phi = to_radians(lat2 - lat1)?;
    let d_lambda = to_radians(lon2 - lon1)?;

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance = round_to(config.earth_radius_km * c, config.distance_precision);

    if !distance.is_finite() {
        return Err(CalculationError::NonFiniteDistance {
            lat1,
            lon1,
            lat2,
            lon2,
        }
        .into());
    }
    Ok(distance)
}

/// Equirectangular approximation of the distance in kilometres.
///
/// No validation and no rounding. Good to within a few percent at city and
/// regional scale; error grows with distance and latitude.
#[inline]
pub fn approximate_distance(config: &GeoConfig, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let x = (lon2 - lon1).to_radians() * ((phi1 + phi2) / 2.0).cos();
    let y = phi2 - phi1;
    config.earth_radius_km * (x * x + y * y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use haversine::{distance as reference_distance, Location, Units};
    use proptest::prelude::*;
    use std::f64::consts::PI;

    const COLOMBO: (f64, f64) = (6.9271, 79.8612);
    const KANDY: (f64, f64) = (7.2906, 80.6337);

    fn km(a: (f64, f64), b: (f64, f64)) -> f64 {
        calculate_distance(&GeoConfig::default(), a.0, a.1, b.0, b.1).unwrap()
    }

    #[test]
    fn colombo_to_kandy_is_about_94_km() {
        let d = km(COLOMBO, KANDY);
        assert!((d - 94.0).abs() <= 5.0, "got {d}");
    }

    #[test]
    fn matches_reference_crate() {
        let ours = km(COLOMBO, KANDY);
        let theirs = reference_distance(
            Location {
                latitude: COLOMBO.0,
                longitude: COLOMBO.1,
            },
            Location {
                latitude: KANDY.0,
                longitude: KANDY.1,
            },
            Units::Kilometers,
        );
        assert!((ours - theirs).abs() < 1e-3, "ours {ours}, reference {theirs}");
    }

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(km(COLOMBO, COLOMBO), 0.0);
    }

    #[test]
    fn pole_to_pole_is_half_circumference() {
        let d = km((90.0, 0.0), (-90.0, 0.0));
        assert!((d - PI * 6371.0).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn antipodal_equator_points_are_finite() {
        let d = km((0.0, 0.0), (0.0, 180.0));
        assert!((d - PI * 6371.0).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn result_is_rounded_to_precision() {
        let d = km(COLOMBO, KANDY);
        assert_eq!(d, round_to(d, 4));
        let coarse = GeoConfig::builder().distance_precision(0).build();
        let whole = calculate_distance(&coarse, COLOMBO.0, COLOMBO.1, KANDY.0, KANDY.1).unwrap();
        assert_eq!(whole, whole.trunc());
    }

    #[test]
    fn non_finite_result_is_a_calculation_error() {
        let broken = GeoConfig::builder().earth_radius_km(f64::INFINITY).build();
        let err = calculate_distance(&broken, COLOMBO.0, COLOMBO.1, KANDY.0, KANDY.1).unwrap_err();
        assert!(matches!(
            err,
            LocatorError::Calculation(CalculationError::NonFiniteDistance { .. })
        ));

        let nan = GeoConfig::builder().earth_radius_km(f64::NAN).build();
        assert!(calculate_distance(&nan, COLOMBO.0, COLOMBO.1, KANDY.0, KANDY.1).is_err());
    }

    #[test]
    fn oversized_precision_still_yields_a_distance() {
        let fine = GeoConfig::builder().distance_precision(400).build();
        let d = calculate_distance(&fine, COLOMBO.0, COLOMBO.1, KANDY.0, KANDY.1).unwrap();
        assert!(d.is_finite());
        assert!((d - km(COLOMBO, KANDY)).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn earth_radius_is_configurable() {
        let double = GeoConfig::builder().earth_radius_km(2.0 * 6371.0).build();
        let d = calculate_distance(&double, COLOMBO.0, COLOMBO.1, KANDY.0, KANDY.1).unwrap();
        assert!((d - 2.0 * km(COLOMBO, KANDY)).abs() < 1e-3);
    }

    #[test]
    fn invalid_endpoints_are_rejected_with_all_violations() {
        let err = calculate_distance(&GeoConfig::default(), 91.0, 0.0, 0.0, f64::NAN).unwrap_err();
        match err {
            LocatorError::InvalidCoordinates(report) => assert_eq!(report.violations().len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn regional_bounds_do_not_apply() {
        // London to Paris, far outside the default service region.
        let d = calculate_distance(&GeoConfig::default(), 51.5074, -0.1278, 48.8566, 2.3522)
            .unwrap();
        assert!((d - 344.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn angle_conversions() {
        assert!((to_radians(180.0).unwrap() - PI).abs() < 1e-12);
        assert!((to_degrees(PI).unwrap() - 180.0).abs() < 1e-12);
        assert!(matches!(
            to_radians(f64::NAN),
            Err(CalculationError::NonFiniteAngle { unit: "degrees", .. })
        ));
        assert!(to_degrees(f64::INFINITY).is_err());
    }

    #[test]
    fn approximation_is_close_at_regional_scale() {
        let config = GeoConfig::default();
        let exact = km(COLOMBO, KANDY);
        let approx = approximate_distance(&config, COLOMBO.0, COLOMBO.1, KANDY.0, KANDY.1);
        assert!((approx - exact).abs() / exact < 0.2, "approx {approx}, exact {exact}");
    }

    fn coordinate() -> impl Strategy<Value = (f64, f64)> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
            prop_assert_eq!(km(a, b), km(b, a));
        }

        #[test]
        fn distance_to_self_is_zero(a in coordinate()) {
            prop_assert!(km(a, a).abs() < 1e-9);
        }

        #[test]
        fn triangle_inequality_holds(a in coordinate(), b in coordinate(), c in coordinate()) {
            // Rounding to 4 decimals on each leg allows a small slack.
            prop_assert!(km(a, c) <= km(a, b) + km(b, c) + 1e-3);
        }

        #[test]
        fn distance_is_bounded_by_half_circumference(a in coordinate(), b in coordinate()) {
            let d = km(a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= PI * 6371.0 + 1e-3);
        }
    }
}
