//! Pollutant Index Calculation
//!
//! ## Overview
//!
//! [`compute_aqi`] is the entry point consumers call with a pollutant kind
//! and a raw concentration. It rejects malformed input, truncates the
//! reading to the pollutant's published resolution, walks the breakpoint
//! table in order, and interpolates or reports a sentinel outcome.
//!
//! ## Outcomes
//!
//! A well-formed reading always produces a [`Computation`]:
//!
//! - `Index(n)` - a numeric AQI, 0 to 500.
//! - `AlternatePeriod(p)` - this concentration is only rated under a
//!   different averaging period; `p` names the table to use instead
//!   (SO2 1-hour vs 24-hour, ozone 8-hour vs 1-hour).
//! - `BeyondIndex` - above the 500 ceiling of the particulate tables;
//!   hazardous-category guidance applies.
//! - `OutOfRange` - beyond every defined row; the AQI simply is not defined
//!   there.
//!
//! Sentinels are ordinary values, not errors: a UI typically keys an
//! advisory dialog off them. Only NaN/infinite or negative input is an
//! error (see [`crate::errors`]).
//!
//! ## Determinism
//!
//! Tables are `static` and never mutated; repeated calls with the same
//! input return the same result, and calls from multiple threads need no
//! coordination.

use crate::{
    errors::{InputError, InputResult},
    interpolate,
    pollutant::Pollutant,
    tables::{Overflow, RowOutcome},
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Result of one AQI computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Computation {
    /// Numeric AQI on the 0-500 scale
    Index(u16),
    /// Concentration exceeds every defined breakpoint row
    OutOfRange,
    /// Only rated under a different averaging period; use this table
    AlternatePeriod(Pollutant),
    /// Above the 500 ceiling; follow hazardous-category recommendations
    BeyondIndex,
}

impl Computation {
    /// The numeric AQI, if this outcome produced one
    pub const fn index(&self) -> Option<u16> {
        match self {
            Computation::Index(aqi) => Some(*aqi),
            _ => None,
        }
    }
}

/// Compute the AQI for a raw concentration reading.
///
/// The reading is truncated to the pollutant's published resolution before
/// lookup, so e.g. PM2.5 `12.09` rates the same as `12.0`. Ozone and NO2
/// readings are expected in whole ppb (`54` → `0.054` ppm).
///
/// # Errors
///
/// NaN, infinite, or negative readings are rejected. They usually indicate
/// a failed parse upstream and must not be conflated with out-of-range
/// concentrations.
pub fn compute_aqi(pollutant: Pollutant, concentration: f64) -> InputResult<Computation> {
    if !concentration.is_finite() {
        return Err(InputError::NotFinite);
    }
    if concentration < 0.0 {
        return Err(InputError::Negative { value: concentration });
    }

    let table = pollutant.table();
    let conc = table.resolution.truncate(concentration);

    for table_row in table.rows {
        if table_row.contains(conc) {
            return Ok(match table_row.outcome {
                RowOutcome::Scale(ref bp) => Computation::Index(interpolate::linear(bp, conc)),
                RowOutcome::AlternatePeriod(other) => Computation::AlternatePeriod(other),
            });
        }
    }

    log_warn!(
        "{} concentration {} exceeds the breakpoint table",
        pollutant.name(),
        conc
    );
    Ok(match table.overflow {
        Overflow::OutOfRange => Computation::OutOfRange,
        Overflow::BeyondIndex => Computation::BeyondIndex,
    })
}
