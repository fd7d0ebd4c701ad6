//! Distance formulas: kilometers, miles, meters
//!
//! The km/mi factor and the mi/m factor are independent constants and are
//! not mutually consistent (1 / 0.621371 km is 1609.344... m, not 1609.34 m).
//! Both are kept as-is so results stay reproducible.

use metron_core::ConvertError;

/// Valid distance unit codes
pub const UNITS: [&str; 3] = ["km", "mi", "m"];

const DOMAIN: &str = "distance";

const MILES_PER_KILOMETER: f64 = 0.621371;
const METERS_PER_MILE: f64 = 1609.34;
const METERS_PER_KILOMETER: f64 = 1000.0;

/// Convert `value` from one distance unit to another.
///
/// Same-unit requests return `value` untouched.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    if from == to && UNITS.contains(&from) {
        return Ok(value);
    }

    let result = match (from, to) {
        ("km", "mi") => value * MILES_PER_KILOMETER,
        ("km", "m") => value * METERS_PER_KILOMETER,
        ("mi", "km") => value / MILES_PER_KILOMETER,
        ("mi", "m") => value * METERS_PER_MILE,
        ("m", "km") => value / METERS_PER_KILOMETER,
        ("m", "mi") => value / METERS_PER_MILE,
        _ => return Err(ConvertError::unsupported(DOMAIN, from, to)),
    };
    Ok(result)
}
