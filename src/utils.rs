/// Rounds `value` to `decimals` decimal places, half away from zero.
///
/// A precision too fine for `f64` to scale leaves the value as it is.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let Ok(exponent) = i32::try_from(decimals) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Lowercases for case-insensitive comparisons of names and areas.
pub fn fold_text(value: &str) -> String {
    value.trim().to_lowercase()
}
