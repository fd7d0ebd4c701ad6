//! Temperature formulas: Celsius, Fahrenheit, Kelvin
//!
//! Affine conversions, applied directly per ordered pair.

use metron_core::ConvertError;

/// Valid temperature unit codes
pub const UNITS: [&str; 3] = ["C", "F", "K"];

const DOMAIN: &str = "temperature";

/// Offset between the Celsius and Kelvin scales
const KELVIN_OFFSET: f64 = 273.15;

/// Freezing point of water on the Fahrenheit scale
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Convert `value` from one temperature unit to another.
///
/// Same-unit requests return `value` untouched.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    if from == to && UNITS.contains(&from) {
        return Ok(value);
    }

    let result = match (from, to) {
        ("C", "F") => value * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        ("C", "K") => value + KELVIN_OFFSET,
        ("F", "C") => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        ("F", "K") => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + KELVIN_OFFSET,
        ("K", "C") => value - KELVIN_OFFSET,
        ("K", "F") => (value - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        _ => return Err(ConvertError::unsupported(DOMAIN, from, to)),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius() {
        assert_eq!(convert(100.0, "C", "F").unwrap(), 212.0);
        assert_eq!(convert(0.0, "C", "K").unwrap(), 273.15);
    }

    #[test]
    fn test_fahrenheit() {
        assert_eq!(convert(32.0, "F", "C").unwrap(), 0.0);
        assert_eq!(convert(32.0, "F", "K").unwrap(), 273.15);
    }

    #[test]
    fn test_kelvin() {
        assert_eq!(convert(0.0, "K", "C").unwrap(), -273.15);
        assert_eq!(convert(273.15, "K", "F").unwrap(), 32.0);
    }

    #[test]
    fn test_crossing_point() {
        assert_eq!(convert(-40.0, "C", "F").unwrap(), -40.0);
        assert_eq!(convert(-40.0, "F", "C").unwrap(), -40.0);
    }

    #[test]
    fn test_identity_is_exact() {
        let value = 0.1 + 0.2;
        for unit in UNITS {
            assert_eq!(convert(value, unit, unit).unwrap().to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_unknown_pair() {
        let err = convert(1.0, "R", "C").unwrap_err();
        assert_eq!(err, ConvertError::unsupported("temperature", "R", "C"));
        assert!(convert(1.0, "R", "R").is_err());
    }
}
