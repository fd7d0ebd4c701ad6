//! Metron Units - Temperature, Distance and Weight Conversion
//!
//! Converts numeric values inside one of three closed unit sets and rounds
//! the result to the configured precision.
//!
//! Domains:
//! - Temperature (C, F, K)
//! - Distance (km, mi, m)
//! - Weight (g, oz, lb)
//!
//! ```
//! use metron_core::Config;
//! use metron_units::{Converter, Measurement};
//!
//! let converter = Converter::new(Config::default());
//! assert_eq!(converter.convert("weight", 1, Some("lb"), Some("g")).unwrap(), 453.59);
//!
//! let line = converter
//!     .compare(Measurement::new(1, "km"), Measurement::new(500, "m"))
//!     .unwrap();
//! assert_eq!(line.to_string(), "1 km > 500 m");
//! ```

mod compare;
mod convert;
mod domain;

pub mod distance;
pub mod temperature;
pub mod weight;

pub use compare::{compare, Comparison, Measurement, Relation, BASE_UNIT};
pub use convert::{convert, Converter};
pub use domain::ConversionDomain;
