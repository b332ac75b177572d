//! Core AQI engine for AQICalc
//!
//! Converts raw pollutant concentrations into the EPA Air Quality Index
//! using the official piecewise-linear breakpoint tables.
//!
//! Key constraints:
//! - Pure functions over static tables, no shared mutable state
//! - No heap allocation, works without `std`
//! - Every boundary matches the AirNow reference calculator
//!
//! ```
//! use aqicalc_core::{compute_aqi, classify, Pollutant, Computation, Category};
//!
//! // 35.9 µg/m³ of PM2.5 over 24 hours
//! match compute_aqi(Pollutant::Pm25, 35.9) {
//!     Ok(Computation::Index(aqi)) => {
//!         assert_eq!(aqi, 102);
//!         assert_eq!(classify(aqi as f64), Ok(Category::UnhealthyForSensitiveGroups));
//!     }
//!     Ok(other) => panic!("unexpected sentinel: {:?}", other),
//!     Err(e) => panic!("bad input: {:?}", e),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod category;
pub mod constants;
pub mod errors;
pub mod index;
pub mod interpolate;
pub mod pollutant;
pub mod tables;

// Public API
pub use category::{classify, Category};
pub use errors::{InputError, InputResult};
pub use index::{compute_aqi, Computation};
pub use pollutant::Pollutant;

/// Crate version, from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
