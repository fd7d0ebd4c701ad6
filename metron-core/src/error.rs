//! Structured conversion errors
//!
//! Every failure is raised to the immediate caller. The core never prints
//! or exits; front ends decide how to present an error.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNSUPPORTED_CONVERSION: &str = "UNSUPPORTED_CONVERSION";
}

/// Placeholder reported when a required unit was not supplied at all.
pub const MISSING_UNIT: &str = "<none>";

/// Errors raised while validating or performing a conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Value missing, blank, not numeric, or not finite
    #[error("Invalid value '{0}': must be a valid numeric value")]
    InvalidValue(String),

    /// Conversion domain is not one of the supported ones
    #[error("Unknown type {0}")]
    UnknownType(String),

    /// Unit code does not belong to the domain's unit set
    #[error("Unknown {domain} unit: {unit}")]
    UnknownUnit {
        domain: &'static str,
        unit: String,
        /// Codes the domain accepts
        valid: &'static [&'static str],
    },

    /// A formula module was asked for a pair it does not handle.
    /// Only reachable when the dispatcher is bypassed.
    #[error("Unsupported {domain} conversion: {from} to {to}")]
    UnsupportedConversion {
        domain: &'static str,
        from: String,
        to: String,
    },
}

impl ConvertError {
    pub fn invalid_value(input: impl Into<String>) -> Self {
        Self::InvalidValue(input.into())
    }

    pub fn unknown_type(domain: impl Into<String>) -> Self {
        Self::UnknownType(domain.into())
    }

    /// Unknown unit; `None` means the unit was omitted.
    pub fn unknown_unit(
        domain: &'static str,
        valid: &'static [&'static str],
        unit: Option<&str>,
    ) -> Self {
        Self::UnknownUnit {
            domain,
            unit: unit.unwrap_or(MISSING_UNIT).to_string(),
            valid,
        }
    }

    pub fn unsupported(domain: &'static str, from: &str, to: &str) -> Self {
        Self::UnsupportedConversion {
            domain,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue(_) => codes::INVALID_VALUE,
            Self::UnknownType(_) => codes::UNKNOWN_TYPE,
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Self::UnsupportedConversion { .. } => codes::UNSUPPORTED_CONVERSION,
        }
    }

    /// True when the error signals a contract mismatch inside the library
    /// rather than bad user input.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::UnsupportedConversion { .. })
    }

    /// Hint for fixing the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidValue(_) => {
                Some("Use a decimal or scientific-notation number, e.g. 12.5 or 1e3".to_string())
            }
            Self::UnknownType(_) => Some("Use one of: temperature, distance, weight".to_string()),
            Self::UnknownUnit { valid, .. } if valid.is_empty() => None,
            Self::UnknownUnit { valid, .. } => Some(format!("Use one of: {}", valid.join(", "))),
            Self::UnsupportedConversion { .. } => {
                Some("This is a bug, please report it".to_string())
            }
        }
    }
}
