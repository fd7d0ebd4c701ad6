//! Distance comparison
//!
//! Both measurements are converted to meters through the regular dispatcher
//! (so they are rounded to the configured precision) and then compared
//! exactly, with no tolerance.

use std::cmp::Ordering;
use std::fmt;

use metron_core::{Config, ConvertError, InputValue};

use crate::convert::convert;
use crate::ConversionDomain;

/// Unit both sides are normalized to
pub const BASE_UNIT: &str = "m";

/// A value paired with its unit code, as supplied by the user
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub value: InputValue,
    pub unit: String,
}

impl Measurement {
    pub fn new(value: impl Into<InputValue>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }

    fn to_base(&self, config: &Config) -> Result<f64, ConvertError> {
        convert(
            config,
            ConversionDomain::Distance.name(),
            self.value.clone(),
            Some(self.unit.as_str()),
            Some(BASE_UNIT),
        )
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Ordering of the first measurement relative to the second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Greater,
    Less,
    Equal,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Greater => ">",
            Relation::Less => "<",
            Relation::Equal => "=",
        }
    }
}

impl From<Ordering> for Relation {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Relation::Greater,
            Ordering::Less => Relation::Less,
            Ordering::Equal => Relation::Equal,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Outcome of comparing two distances.
///
/// Displays as `<value1> <unit1> <relation> <value2> <unit2>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub first: Measurement,
    pub relation: Relation,
    pub second: Measurement,
    /// Both sides in meters, after rounding
    pub first_in_base: f64,
    pub second_in_base: f64,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.relation, self.second)
    }
}

/// Compare two distance measurements.
pub fn compare(
    config: &Config,
    first: Measurement,
    second: Measurement,
) -> Result<Comparison, ConvertError> {
    let first_in_base = first.to_base(config)?;
    let second_in_base = second.to_base(config)?;

    // both sides are finite, so partial_cmp always answers
    let relation = first_in_base
        .partial_cmp(&second_in_base)
        .map_or(Relation::Equal, Relation::from);

    Ok(Comparison {
        first,
        relation,
        second,
        first_in_base,
        second_in_base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(
        v1: impl Into<InputValue>,
        u1: &str,
        v2: impl Into<InputValue>,
        u2: &str,
    ) -> Result<Comparison, ConvertError> {
        compare(&Config::default(), Measurement::new(v1, u1), Measurement::new(v2, u2))
    }

    #[test]
    fn test_greater() {
        let result = cmp(1, "km", 500, "m").unwrap();
        assert_eq!(result.relation, Relation::Greater);
        assert_eq!(result.to_string(), "1 km > 500 m");
    }

    #[test]
    fn test_less() {
        let result = cmp(1, "mi", 2, "km").unwrap();
        assert_eq!(result.relation, Relation::Less);
        assert_eq!(result.first_in_base, 1609.34);
        assert_eq!(result.second_in_base, 2000.0);
    }

    #[test]
    fn test_equal() {
        let result = cmp(1, "km", 1000, "m").unwrap();
        assert_eq!(result.relation, Relation::Equal);
        assert_eq!(result.to_string(), "1 km = 1000 m");
    }

    #[test]
    fn test_equality_is_after_rounding() {
        // 1000.004 m rounds to 1000 m at two digits
        let result = cmp("1000.004", "m", 1, "km").unwrap();
        assert_eq!(result.relation, Relation::Equal);

        let config = Config::default().with_precision(3);
        let result = compare(
            &config,
            Measurement::new("1000.004", "m"),
            Measurement::new(1, "km"),
        )
        .unwrap();
        assert_eq!(result.relation, Relation::Greater);
    }

    #[test]
    fn test_echoes_values_as_given() {
        let result = cmp("1e3", "m", "0.5", "km").unwrap();
        assert_eq!(result.to_string(), "1e3 m > 0.5 km");
    }

    #[test]
    fn test_invalid_value() {
        let err = cmp("abc", "km", 1, "m").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidValue(_)));
    }

    #[test]
    fn test_non_distance_unit() {
        let err = cmp(1, "km", 1, "lb").unwrap_err();
        assert_eq!(err.to_string(), "Unknown distance unit: lb");
    }

    #[test]
    fn test_relation_symbols() {
        assert_eq!(Relation::Greater.to_string(), ">");
        assert_eq!(Relation::Less.to_string(), "<");
        assert_eq!(Relation::Equal.to_string(), "=");
    }
}
