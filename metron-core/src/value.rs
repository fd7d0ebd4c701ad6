//! Loosely typed conversion input
//!
//! Front ends hand over whatever the user typed. `InputValue` keeps that
//! shape until the dispatcher coerces it to a finite `f64`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;
use crate::number::format_number;

/// Decimal or scientific-notation literal: "12", "-3.5", ".5", "5.", "1e2", "+2.5E-3"
static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$")
        .expect("numeric literal pattern is valid")
});

/// A value supplied for conversion, before numeric coercion
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputValue {
    /// No value given
    #[default]
    Missing,
    /// Already numeric
    Number(f64),
    /// Text to be parsed as a number
    Text(String),
}

impl InputValue {
    /// Coerce to a finite number.
    ///
    /// Missing values, blank text, text that is not a decimal or scientific
    /// literal and anything non-finite are rejected with `InvalidValue`.
    pub fn coerce(&self) -> Result<f64, ConvertError> {
        let number = match self {
            InputValue::Missing => return Err(ConvertError::invalid_value("")),
            InputValue::Number(n) => *n,
            InputValue::Text(text) => parse_numeric_text(text)?,
        };

        if !number.is_finite() {
            return Err(ConvertError::invalid_value(self.to_string()));
        }
        Ok(number)
    }
}

fn parse_numeric_text(text: &str) -> Result<f64, ConvertError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !NUMERIC_LITERAL.is_match(trimmed) {
        return Err(ConvertError::invalid_value(text));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ConvertError::invalid_value(text))
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Missing => Ok(()),
            InputValue::Number(n) => write!(f, "{}", format_number(*n)),
            InputValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

impl From<f32> for InputValue {
    fn from(n: f32) -> Self {
        InputValue::Number(f64::from(n))
    }
}

impl From<i32> for InputValue {
    fn from(n: i32) -> Self {
        InputValue::Number(f64::from(n))
    }
}

impl From<u32> for InputValue {
    fn from(n: u32) -> Self {
        InputValue::Number(f64::from(n))
    }
}

impl From<i64> for InputValue {
    fn from(n: i64) -> Self {
        InputValue::Number(n as f64)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Text(s)
    }
}

impl<T: Into<InputValue>> From<Option<T>> for InputValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(InputValue::Missing, Into::into)
    }
}
