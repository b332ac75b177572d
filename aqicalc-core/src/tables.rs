//! EPA Breakpoint Tables for AQI Calculation
//!
//! ## Background
//!
//! The EPA maps a pollutant concentration to the AQI with a piecewise-linear
//! function. Each pollutant has an ordered list of breakpoint rows; a row
//! pairs a concentration sub-range with an AQI sub-range:
//!
//! ```text
//! AQI = (conc - conc_low) / (conc_high - conc_low)
//!       * (aqi_high - aqi_low) + aqi_low,   rounded to the nearest integer
//! ```
//!
//! Reference values can be checked against the AirNow calculator at
//! <https://www.airnow.gov/aqi/aqi-calculator-concentration/>.
//!
//! ## Truncation
//!
//! Before lookup, the raw reading is truncated to the resolution at which
//! the EPA publishes each table: one decimal for PM2.5 and CO, whole numbers
//! for PM10 and SO2, three decimals for ozone and NO2. Ozone and NO2 inputs
//! arrive in ppb-like whole units and are floored *before* dividing by 1000,
//! so raw `54` becomes `0.054` ppm.
//!
//! All arithmetic is `f64`. The published boundaries are decimal fractions
//! (12.1, 0.055, ...) that only resolve exactly in double precision; in
//! `f32`, `9.4 * 10.0` already floors to 93 and shifts a category boundary.
//!
//! ## Sentinel rows
//!
//! Not every row maps to a number:
//!
//! - SO2 above 304 ppb is only rated on the 24-hour table, and SO2 up to
//!   304 ppb only on the 1-hour table; each table's "wrong" range refers
//!   the caller to the other one.
//! - 8-hour ozone does not define AQI values of 301 or more, and 1-hour
//!   ozone does not define values of 100 or less; again each range refers
//!   to the other averaging period.
//! - PM2.5 above 500.4 µg/m³ and PM10 above 604 µg/m³ are "Beyond the AQI":
//!   no number is defined, hazardous-category guidance applies.
//!
//! ## Boundary quirks preserved from the published tables
//!
//! Rows are matched in order, first hit wins. Two SO2 boundaries overlap in
//! the source tables and are kept verbatim rather than "fixed":
//!
//! - SO2 1-hour: the scale row is closed at 304 and the alternate-period
//!   row also starts at 304; because the scale row is listed first, 304
//!   interpolates to AQI 200.
//! - SO2 24-hour: the 201-300 row matches from 304 but interpolates from a
//!   `conc_low` of 305. Since the row before it claims everything up to and
//!   including 304, the mismatch is unreachable.
//!
//! This is why a [`TableRow`] stores its *match* range separately from the
//! interpolation bounds in its [`BreakpointRow`].

use crate::pollutant::Pollutant;

/// One linear segment: a concentration sub-range and the AQI sub-range it
/// maps onto.
///
/// Invariants (checked by tests, assumed by [`crate::interpolate::linear`]):
/// `conc_low < conc_high` and `aqi_low < aqi_high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointRow {
    /// Concentration at the low end of the segment
    pub conc_low: f64,
    /// Concentration at the high end of the segment
    pub conc_high: f64,
    /// AQI value at `conc_low`
    pub aqi_low: u16,
    /// AQI value at `conc_high`
    pub aqi_high: u16,
}

/// Resolution a raw reading is truncated to before table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// One decimal place: floor(10 * raw) / 10 (PM2.5, CO)
    Tenth,
    /// Whole numbers: floor(raw) (PM10, SO2)
    Whole,
    /// Three decimal places, input in whole ppb: floor(raw) / 1000
    /// (ozone, NO2)
    Thousandth,
}

impl Resolution {
    /// Truncate a raw reading to this resolution
    pub fn truncate(&self, raw: f64) -> f64 {
        match self {
            Resolution::Tenth => libm::floor(10.0 * raw) / 10.0,
            Resolution::Whole => libm::floor(raw),
            Resolution::Thousandth => libm::floor(raw) / 1000.0,
        }
    }
}

/// What a table row produces when its range matches
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOutcome {
    /// Interpolate linearly within the segment
    Scale(BreakpointRow),
    /// No AQI defined here; consult this pollutant's table instead
    AlternatePeriod(Pollutant),
}

/// One row of a breakpoint table: a match range and its outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// Low end of the match range (inclusive)
    pub low: f64,
    /// High end of the match range
    pub high: f64,
    /// Whether `high` itself matches (closed vs half-open range)
    pub includes_high: bool,
    /// Outcome when the truncated concentration falls in the range
    pub outcome: RowOutcome,
}

impl TableRow {
    const fn scale(low: f64, high: f64, row: BreakpointRow) -> Self {
        Self { low, high, includes_high: false, outcome: RowOutcome::Scale(row) }
    }

    const fn scale_closed(low: f64, high: f64, row: BreakpointRow) -> Self {
        Self { low, high, includes_high: true, outcome: RowOutcome::Scale(row) }
    }

    const fn alternate(low: f64, high: f64, includes_high: bool, other: Pollutant) -> Self {
        Self { low, high, includes_high, outcome: RowOutcome::AlternatePeriod(other) }
    }

    /// Check whether a truncated concentration falls in this row's range
    pub fn contains(&self, conc: f64) -> bool {
        if self.includes_high {
            conc >= self.low && conc <= self.high
        } else {
            conc >= self.low && conc < self.high
        }
    }
}

/// Outcome for a concentration beyond every row of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// The pollutant defines nothing above its ceiling
    OutOfRange,
    /// Above the AQI scale itself; hazardous-category guidance applies
    BeyondIndex,
}

/// A complete per-pollutant breakpoint table
///
/// Process-wide constant, never mutated; lookups are pure and safe to run
/// concurrently.
#[derive(Debug)]
pub struct BreakpointTable {
    /// Truncation applied to raw input before matching
    pub resolution: Resolution,
    /// Rows in evaluation order; first match wins
    pub rows: &'static [TableRow],
    /// Outcome when no row matches
    pub overflow: Overflow,
}

const fn row(conc_low: f64, conc_high: f64, aqi_low: u16, aqi_high: u16) -> BreakpointRow {
    BreakpointRow { conc_low, conc_high, aqi_low, aqi_high }
}

/// PM2.5, 24-hour average, µg/m³, 0.1 resolution
pub const PM25: BreakpointTable = BreakpointTable {
    resolution: Resolution::Tenth,
    rows: &[
        TableRow::scale(0.0, 12.1, row(0.0, 12.0, 0, 50)),
        TableRow::scale(12.1, 35.5, row(12.1, 35.4, 51, 100)),
        TableRow::scale(35.5, 55.5, row(35.5, 55.4, 101, 150)),
        TableRow::scale(55.5, 150.5, row(55.5, 150.4, 151, 200)),
        TableRow::scale(150.5, 250.5, row(150.5, 250.4, 201, 300)),
        TableRow::scale(250.5, 350.5, row(250.5, 350.4, 301, 400)),
        TableRow::scale(350.5, 500.5, row(350.5, 500.4, 401, 500)),
    ],
    overflow: Overflow::BeyondIndex,
};

/// PM10, 24-hour average, µg/m³, whole-number resolution
pub const PM10: BreakpointTable = BreakpointTable {
    resolution: Resolution::Whole,
    rows: &[
        TableRow::scale(0.0, 55.0, row(0.0, 54.0, 0, 50)),
        TableRow::scale(55.0, 155.0, row(55.0, 154.0, 51, 100)),
        TableRow::scale(155.0, 255.0, row(155.0, 254.0, 101, 150)),
        TableRow::scale(255.0, 355.0, row(255.0, 354.0, 151, 200)),
        TableRow::scale(355.0, 425.0, row(355.0, 424.0, 201, 300)),
        TableRow::scale(425.0, 505.0, row(425.0, 504.0, 301, 400)),
        TableRow::scale(505.0, 605.0, row(505.0, 604.0, 401, 500)),
    ],
    overflow: Overflow::BeyondIndex,
};

/// CO, 8-hour average, ppm, 0.1 resolution
pub const CO: BreakpointTable = BreakpointTable {
    resolution: Resolution::Tenth,
    rows: &[
        TableRow::scale(0.0, 4.5, row(0.0, 4.4, 0, 50)),
        TableRow::scale(4.5, 9.5, row(4.5, 9.4, 51, 100)),
        TableRow::scale(9.5, 12.5, row(9.5, 12.4, 101, 150)),
        TableRow::scale(12.5, 15.5, row(12.5, 15.4, 151, 200)),
        TableRow::scale(15.5, 30.5, row(15.5, 30.4, 201, 300)),
        TableRow::scale(30.5, 40.5, row(30.5, 40.4, 301, 400)),
        TableRow::scale(40.5, 50.5, row(40.5, 50.4, 401, 500)),
    ],
    overflow: Overflow::OutOfRange,
};

/// SO2, 1-hour average, ppb, whole-number resolution
///
/// Defines AQI values up to 200 only; 304-604 ppb refers to the 24-hour
/// table. The scale row closed at 304 is listed first, so 304 itself
/// interpolates to 200 (see module docs).
pub const SO2_1HR: BreakpointTable = BreakpointTable {
    resolution: Resolution::Whole,
    rows: &[
        TableRow::scale(0.0, 36.0, row(0.0, 35.0, 0, 50)),
        TableRow::scale(36.0, 76.0, row(36.0, 75.0, 51, 100)),
        TableRow::scale(76.0, 186.0, row(76.0, 185.0, 101, 150)),
        TableRow::scale_closed(186.0, 304.0, row(186.0, 304.0, 151, 200)),
        TableRow::alternate(304.0, 604.0, true, Pollutant::So2TwentyFourHour),
    ],
    overflow: Overflow::OutOfRange,
};

/// SO2, 24-hour average, ppb, whole-number resolution
///
/// Defines AQI values of 201 and up only; everything at or below 304 ppb
/// refers to the 1-hour table. The 201-300 row interpolates from 305 even
/// though its match range starts at 304 (see module docs).
pub const SO2_24HR: BreakpointTable = BreakpointTable {
    resolution: Resolution::Whole,
    rows: &[
        TableRow::alternate(0.0, 304.0, true, Pollutant::So2OneHour),
        TableRow::scale(304.0, 605.0, row(305.0, 604.0, 201, 300)),
        TableRow::scale(605.0, 805.0, row(605.0, 804.0, 301, 400)),
        TableRow::scale_closed(805.0, 1004.0, row(805.0, 1004.0, 401, 500)),
    ],
    overflow: Overflow::OutOfRange,
};

/// Ozone, 8-hour average, ppm, 0.001 resolution (input in whole ppb)
///
/// Does not define AQI values of 301 or more; 0.201-0.604 ppm refers to the
/// 1-hour table.
pub const OZONE_8HR: BreakpointTable = BreakpointTable {
    resolution: Resolution::Thousandth,
    rows: &[
        TableRow::scale(0.0, 0.055, row(0.0, 0.054, 0, 50)),
        TableRow::scale(0.055, 0.071, row(0.055, 0.070, 51, 100)),
        TableRow::scale(0.071, 0.086, row(0.071, 0.085, 101, 150)),
        TableRow::scale(0.086, 0.106, row(0.086, 0.105, 151, 200)),
        TableRow::scale(0.106, 0.201, row(0.106, 0.200, 201, 300)),
        TableRow::alternate(0.201, 0.605, false, Pollutant::OzoneOneHour),
    ],
    overflow: Overflow::OutOfRange,
};

/// Ozone, 1-hour average, ppm, 0.001 resolution (input in whole ppb)
///
/// Does not define AQI values of 100 or less; everything up to 0.124 ppm
/// refers to the 8-hour table.
pub const OZONE_1HR: BreakpointTable = BreakpointTable {
    resolution: Resolution::Thousandth,
    rows: &[
        TableRow::alternate(0.0, 0.124, true, Pollutant::OzoneEightHour),
        TableRow::scale(0.125, 0.165, row(0.125, 0.164, 101, 150)),
        TableRow::scale(0.165, 0.205, row(0.165, 0.204, 151, 200)),
        TableRow::scale(0.205, 0.405, row(0.205, 0.404, 201, 300)),
        TableRow::scale(0.405, 0.505, row(0.405, 0.504, 301, 400)),
        TableRow::scale(0.505, 0.605, row(0.505, 0.604, 401, 500)),
    ],
    overflow: Overflow::OutOfRange,
};

/// NO2, 1-hour average, ppm, 0.001 resolution (input in whole ppb)
pub const NO2: BreakpointTable = BreakpointTable {
    resolution: Resolution::Thousandth,
    rows: &[
        TableRow::scale(0.0, 0.054, row(0.0, 0.053, 0, 50)),
        TableRow::scale(0.054, 0.101, row(0.054, 0.100, 51, 100)),
        TableRow::scale(0.101, 0.361, row(0.101, 0.360, 101, 150)),
        TableRow::scale(0.361, 0.650, row(0.361, 0.649, 151, 200)),
        TableRow::scale(0.650, 1.250, row(0.650, 1.249, 201, 300)),
        TableRow::scale(1.250, 1.650, row(1.250, 1.649, 301, 400)),
        TableRow::scale_closed(1.650, 2.049, row(1.650, 2.049, 401, 500)),
    ],
    overflow: Overflow::OutOfRange,
};
