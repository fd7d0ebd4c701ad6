//! Weight formulas: grams, ounces, pounds

use metron_core::ConvertError;

/// Valid weight unit codes
pub const UNITS: [&str; 3] = ["g", "oz", "lb"];

const DOMAIN: &str = "weight";

const GRAMS_PER_OUNCE: f64 = 28.3495;
const GRAMS_PER_POUND: f64 = 453.592;
const OUNCES_PER_POUND: f64 = 16.0;

/// Convert `value` from one weight unit to another.
///
/// Same-unit requests return `value` untouched.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    if from == to && UNITS.contains(&from) {
        return Ok(value);
    }

    let result = match (from, to) {
        ("g", "oz") => value / GRAMS_PER_OUNCE,
        ("g", "lb") => value / GRAMS_PER_POUND,
        ("oz", "g") => value * GRAMS_PER_OUNCE,
        ("oz", "lb") => value / OUNCES_PER_POUND,
        ("lb", "g") => value * GRAMS_PER_POUND,
        ("lb", "oz") => value * OUNCES_PER_POUND,
        _ => return Err(ConvertError::unsupported(DOMAIN, from, to)),
    };
    Ok(result)
}
