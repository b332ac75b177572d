//! AQI Scale Constants
//!
//! The AQI is a unitless scale from 0 to 500, divided into six health
//! categories. The category boundaries are fixed by the EPA and shared by
//! every pollutant; only the concentration breakpoints differ per pollutant
//! (see [`crate::tables`]).
//!
//! Source: EPA Technical Assistance Document for the Reporting of Daily
//! Air Quality (airnow.gov).

/// Lowest value on the AQI scale.
pub const AQI_MIN: u16 = 0;

/// Highest value on the AQI scale.
///
/// Concentrations that would interpolate above this are "Beyond the AQI"
/// and get hazardous-category guidance instead of a number.
pub const AQI_MAX: u16 = 500;

/// Upper bound of the "Good" category (inclusive).
pub const GOOD_MAX: f64 = 50.0;

/// Upper bound of the "Moderate" category (inclusive).
pub const MODERATE_MAX: f64 = 100.0;

/// Upper bound of the "Unhealthy for Sensitive Groups" category (inclusive).
pub const UNHEALTHY_SENSITIVE_MAX: f64 = 150.0;

/// Upper bound of the "Unhealthy" category (inclusive).
pub const UNHEALTHY_MAX: f64 = 200.0;

/// Upper bound of the "Very Unhealthy" category (inclusive).
pub const VERY_UNHEALTHY_MAX: f64 = 300.0;

/// Upper bound of the "Hazardous" category (inclusive).
///
/// Same value as [`AQI_MAX`]; anything above it is out of range for the
/// classifier.
pub const HAZARDOUS_MAX: f64 = 500.0;
