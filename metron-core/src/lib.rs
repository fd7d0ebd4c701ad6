//! Metron Core - Fundamental types
//!
//! This crate provides the core types used throughout Metron:
//! - `ConvertError`: Structured conversion errors with machine-readable codes
//! - `InputValue`: Loosely typed user input, coerced to a finite number
//! - `Config`: Immutable precision and default-unit configuration
//! - Fixed-point rounding and number display helpers

mod config;
mod error;
mod number;
mod value;

pub use config::{Config, ConfigError, TemperatureDefaults, DEFAULT_PRECISION};
pub use error::{codes, ConvertError, MISSING_UNIT};
pub use number::{format_number, round_to_precision, MAX_PRECISION};
pub use value::InputValue;
