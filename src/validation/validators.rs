//! Pure input checks. Each validator inspects every rule and returns a
//! [`ValidationReport`] listing all violations, never just the first.

use crate::config::GeoBounds;
use crate::validation::report::{Field, ValidationReport, ViolationKind};

fn label(field: Field) -> &'static str {
    match field {
        Field::Latitude => "Latitude",
        Field::Longitude => "Longitude",
        Field::Limit => "Limit",
        Field::Radius => "Radius",
        Field::Area => "Area",
        Field::Name => "Name",
    }
}

fn check_axis(
    report: &mut ValidationReport,
    field: Field,
    value: f64,
    (global_min, global_max): (f64, f64),
    regional: Option<(f64, f64)>,
) {
    if !value.is_finite() {
        report.push(
            field,
            ViolationKind::Type,
            format!("{} must be a finite number, got {}", label(field), value),
        );
        return;
    }
    if value < global_min || value > global_max {
        report.push(
            field,
            ViolationKind::Range,
            format!(
                "{} must be between {} and {} degrees, got {}",
                label(field),
                global_min,
                global_max,
                value
            ),
        );
    }
    if let Some((min, max)) = regional {
        if value < min || value > max {
            report.push(
                field,
                ViolationKind::Region,
                format!(
                    "{} {} is outside the service region ({} to {})",
                    label(field),
                    value,
                    min,
                    max
                ),
            );
        }
    }
}

/// Checks a coordinate pair against the global range and, when `regional` is
/// given, against those stricter bounds as well.
///
/// # Examples
///
/// ```
/// use police_locator::{validate_coordinates, GeoBounds};
///
/// let report = validate_coordinates(100.0, 79.86, None);
/// assert!(!report.is_valid());
/// assert!(report.errors()[0].contains("Latitude must be between -90 and 90"));
///
/// let strict = validate_coordinates(51.5, -0.12, Some(&GeoBounds::SRI_LANKA));
/// assert_eq!(strict.violations().len(), 2);
/// ```
pub fn validate_coordinates(lat: f64, lng: f64, regional: Option<&GeoBounds>) -> ValidationReport {
    let mut report = ValidationReport::new();
    let global = GeoBounds::GLOBAL;
    check_axis(
        &mut report,
        Field::Latitude,
        lat,
        (global.min_lat, global.max_lat),
        regional.map(|b| (b.min_lat, b.max_lat)),
    );
    check_axis(
        &mut report,
        Field::Longitude,
        lng,
        (global.min_lng, global.max_lng),
        regional.map(|b| (b.min_lng, b.max_lng)),
    );
    report
}

/// Like [`validate_coordinates`], but a missing value is reported as a type
/// violation instead of being impossible to express.
pub(crate) fn validate_coordinate_params(
    lat: Option<f64>,
    lng: Option<f64>,
    regional: Option<&GeoBounds>,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    for (field, value) in [(Field::Latitude, lat), (Field::Longitude, lng)] {
        if value.is_none() {
            report.merge(missing(field));
        }
    }
    let present = validate_coordinates(
        lat.unwrap_or(0.0),
        lng.unwrap_or(0.0),
        regional,
    );
    for violation in present.violations() {
        let supplied = match violation.field {
            Field::Latitude => lat.is_some(),
            _ => lng.is_some(),
        };
        if supplied {
            report.push(violation.field, violation.kind, violation.message.clone());
        }
    }
    report
}

/// A report with a single "is required" type violation for `field`.
pub(crate) fn missing(field: Field) -> ValidationReport {
    let expected = match field {
        Field::Area | Field::Name => "a string",
        _ => "a number",
    };
    let mut report = ValidationReport::new();
    report.push(
        field,
        ViolationKind::Type,
        format!("{} is required and must be {}", label(field), expected),
    );
    report
}

/// Checks that `limit` is a number in `1..=max_limit`.
pub fn validate_limit(limit: f64, max_limit: usize) -> ValidationReport {
    let mut report = ValidationReport::new();
    if limit.is_nan() {
        report.push(Field::Limit, ViolationKind::Type, "Limit must be a number, got NaN");
        return report;
    }
    if limit < 1.0 {
        report.push(
            Field::Limit,
            ViolationKind::Range,
            format!("Limit must be at least 1, got {}", limit),
        );
    }
    if limit > max_limit as f64 {
        report.push(
            Field::Limit,
            ViolationKind::Range,
            format!("Limit must not exceed {}, got {}", max_limit, limit),
        );
    }
    report
}

/// Checks that `radius_km` is a number in `(0, max_radius_km]`.
pub fn validate_radius(radius_km: f64, max_radius_km: f64) -> ValidationReport {
    let mut report = ValidationReport::new();
    if radius_km.is_nan() {
        report.push(Field::Radius, ViolationKind::Type, "Radius must be a number, got NaN");
        return report;
    }
    if radius_km <= 0.0 {
        report.push(
            Field::Radius,
            ViolationKind::Range,
            format!("Radius must be greater than 0 km, got {}", radius_km),
        );
    }
    if radius_km > max_radius_km {
        report.push(
            Field::Radius,
            ViolationKind::Range,
            format!("Radius must not exceed {} km, got {}", max_radius_km, radius_km),
        );
    }
    report
}

fn validate_text(field: Field, value: &str, max_length: usize) -> ValidationReport {
    let mut report = ValidationReport::new();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        report.push(
            field,
            ViolationKind::Domain,
            format!("{} must not be empty", label(field)),
        );
    }
    let length = trimmed.chars().count();
    if length > max_length {
        report.push(
            field,
            ViolationKind::Domain,
            format!(
                "{} must be at most {} characters, got {}",
                label(field),
                max_length,
                length
            ),
        );
    }
    report
}

/// Checks that an area query is non-empty after trimming and not too long.
pub fn validate_area(area: &str, max_length: usize) -> ValidationReport {
    validate_text(Field::Area, area, max_length)
}

/// Same rules as [`validate_area`], reported against the name field.
pub fn validate_name(name: &str, max_length: usize) -> ValidationReport {
    validate_text(Field::Name, name, max_length)
}
