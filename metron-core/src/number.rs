//! Fixed-point rounding and number display
//!
//! Results are plain `f64`. Rounding goes through the decimal representation
//! so that `453.592` at two digits is exactly the double nearest to `453.59`.

/// Largest number of fractional digits honored by `round_to_precision`
pub const MAX_PRECISION: u32 = 100;

/// 10^22 is the largest power of ten an f64 holds exactly
const MAX_EXACT_POW10: u32 = 22;

/// Scaled values at or above 2^52 have no fractional bits left
const MAX_FRACTIONAL_MAGNITUDE: f64 = 4_503_599_627_370_496.0;

/// Round `value` to `digits` decimal places.
///
/// Non-halfway values round to the nearest representable decimal, the same
/// as formatting with `digits` places and parsing back. Values that lie
/// exactly halfway round away from zero (`0.125` -> `0.13`).
/// Non-finite values pass through untouched.
pub fn round_to_precision(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let digits = digits.min(MAX_PRECISION);

    if let Some(rounded) = round_exact_half(value, digits) {
        return rounded;
    }

    format!("{:.*}", digits as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Handles the exact-tie case, which `{:.N}` would round to even.
///
/// `value * factor` must be exact for the tie to be real: a product that
/// only rounds onto `k.5` (0.015 is stored just below it) is not a tie.
fn round_exact_half(value: f64, digits: u32) -> Option<f64> {
    if digits > MAX_EXACT_POW10 {
        return None;
    }
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;

    if scaled.abs() >= MAX_FRACTIONAL_MAGNITUDE || scaled.fract().abs() != 0.5 {
        return None;
    }
    if value.mul_add(factor, -scaled) != 0.0 {
        return None;
    }
    Some(scaled.round() / factor)
}

/// Render a number for display.
///
/// Integral values carry no fractional part, magnitudes from 1e-6 up to 1e21
/// use plain positional notation and everything else uses exponent form
/// with an explicit sign (`1e+21`, `1.5e-7`). Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
