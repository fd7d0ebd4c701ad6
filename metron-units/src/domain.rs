//! Conversion domains
//!
//! Each domain owns a closed set of unit codes and one formula module.
//! Unit codes are never shared between domains, so a conversion can only
//! ever happen inside a single domain.

use std::fmt;
use std::str::FromStr;

use metron_core::ConvertError;

use crate::{distance, temperature, weight};

/// The kinds of quantity that can be converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionDomain {
    Temperature,
    Distance,
    Weight,
}

impl ConversionDomain {
    /// Every supported domain
    pub const ALL: [ConversionDomain; 3] = [
        ConversionDomain::Temperature,
        ConversionDomain::Distance,
        ConversionDomain::Weight,
    ];

    /// Name used on the command line and in messages
    pub fn name(self) -> &'static str {
        match self {
            ConversionDomain::Temperature => "temperature",
            ConversionDomain::Distance => "distance",
            ConversionDomain::Weight => "weight",
        }
    }

    /// Valid unit codes for this domain
    pub fn units(self) -> &'static [&'static str] {
        match self {
            ConversionDomain::Temperature => &temperature::UNITS,
            ConversionDomain::Distance => &distance::UNITS,
            ConversionDomain::Weight => &weight::UNITS,
        }
    }

    pub fn is_valid_unit(self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    /// Whether omitted units are filled in from configuration
    pub fn has_default_units(self) -> bool {
        matches!(self, ConversionDomain::Temperature)
    }

    /// Apply this domain's formula without rounding or input validation
    pub fn formula(self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        match self {
            ConversionDomain::Temperature => temperature::convert(value, from, to),
            ConversionDomain::Distance => distance::convert(value, from, to),
            ConversionDomain::Weight => weight::convert(value, from, to),
        }
    }
}

impl FromStr for ConversionDomain {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConversionDomain::ALL
            .into_iter()
            .find(|domain| domain.name() == s)
            .ok_or_else(|| ConvertError::unknown_type(s))
    }
}

impl fmt::Display for ConversionDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
