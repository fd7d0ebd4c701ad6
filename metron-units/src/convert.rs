//! Conversion dispatcher
//!
//! Validates the request, fills in default temperature units, runs the
//! domain's formula and rounds the result to the configured precision.

use metron_core::{format_number, round_to_precision, Config, ConvertError, InputValue};
use tracing::debug;

use crate::compare::{self, Comparison, Measurement};
use crate::ConversionDomain;

/// Converts values using one immutable configuration
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Convert `value` within `domain`. See [`convert`].
    pub fn convert(
        &self,
        domain: &str,
        value: impl Into<InputValue>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<f64, ConvertError> {
        convert(&self.config, domain, value, from, to)
    }

    /// Order two distances. See [`compare::compare`].
    pub fn compare(
        &self,
        first: Measurement,
        second: Measurement,
    ) -> Result<Comparison, ConvertError> {
        compare::compare(&self.config, first, second)
    }
}

/// Convert `value` from `from` to `to` within `domain`.
///
/// Checks run in a fixed order: value, then domain, then `from`, then `to`.
/// Temperature conversions take omitted (or empty) units from
/// `config.temperature`; other domains require both units. A value whose
/// result overflows `f64` is rejected as `InvalidValue`.
pub fn convert(
    config: &Config,
    domain: &str,
    value: impl Into<InputValue>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<f64, ConvertError> {
    let value = value.into().coerce()?;
    let domain: ConversionDomain = domain.parse()?;

    let (from, to) = resolve_units(domain, config, from, to);
    let from = validate_unit(domain, from)?;
    let to = validate_unit(domain, to)?;

    let raw = domain.formula(value, from, to)?;
    if !raw.is_finite() {
        return Err(ConvertError::invalid_value(format_number(value)));
    }
    let result = round_to_precision(raw, config.precision);

    debug!(%domain, value, from, to, raw, result, precision = config.precision, "converted");
    Ok(result)
}

fn resolve_units<'a>(
    domain: ConversionDomain,
    config: &'a Config,
    from: Option<&'a str>,
    to: Option<&'a str>,
) -> (Option<&'a str>, Option<&'a str>) {
    if !domain.has_default_units() {
        return (from, to);
    }

    let defaults = &config.temperature;
    (
        from.filter(|u| !u.is_empty()).or(Some(defaults.default_from.as_str())),
        to.filter(|u| !u.is_empty()).or(Some(defaults.default_to.as_str())),
    )
}

fn validate_unit(domain: ConversionDomain, unit: Option<&str>) -> Result<&str, ConvertError> {
    match unit {
        Some(code) if domain.is_valid_unit(code) => Ok(code),
        other => Err(ConvertError::unknown_unit(domain.name(), domain.units(), other)),
    }
}
