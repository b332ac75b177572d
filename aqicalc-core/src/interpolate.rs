//! Linear breakpoint interpolation
//!
//! The one piece of arithmetic in the AQI definition: map a concentration
//! within a breakpoint segment onto the segment's AQI sub-range.

use crate::tables::BreakpointRow;

/// Interpolate a truncated concentration within a breakpoint segment.
///
/// Implements the EPA formula
///
/// ```text
/// AQI = round((c - conc_low) / (conc_high - conc_low)
///             * (aqi_high - aqi_low) + aqi_low)
/// ```
///
/// with round-half-away-from-zero, which on the non-negative AQI domain
/// matches the reference calculator's rounding.
///
/// The caller guarantees `concentration` lies within the row's segment and
/// the row is non-degenerate (`conc_low < conc_high`); a degenerate row is
/// a bug in the tables, not a runtime condition.
pub fn linear(row: &BreakpointRow, concentration: f64) -> u16 {
    debug_assert!(row.conc_low < row.conc_high);
    debug_assert!(row.aqi_low < row.aqi_high);

    let span = (concentration - row.conc_low) / (row.conc_high - row.conc_low);
    let aqi = span * f64::from(row.aqi_high - row.aqi_low) + f64::from(row.aqi_low);
    libm::round(aqi) as u16
}
