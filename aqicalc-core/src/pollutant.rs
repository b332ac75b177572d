//! Pollutant kinds covered by the AQI
//!
//! The EPA defines AQI breakpoints for a fixed set of criteria pollutants;
//! two of them (SO2 and ozone) have separate tables per averaging period.
//! The set is closed - there is no dynamic registration.

use crate::tables::{self, BreakpointTable};

/// Pollutant and averaging period, one variant per breakpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pollutant {
    /// Fine particulate matter, 24-hour average (µg/m³)
    Pm25,
    /// Coarse particulate matter, 24-hour average (µg/m³)
    Pm10,
    /// Carbon monoxide, 8-hour average (ppm)
    Co,
    /// Sulfur dioxide, 1-hour average (ppb)
    So2OneHour,
    /// Sulfur dioxide, 24-hour average (ppb)
    So2TwentyFourHour,
    /// Ozone, 8-hour average (ppm)
    OzoneEightHour,
    /// Ozone, 1-hour average (ppm)
    OzoneOneHour,
    /// Nitrogen dioxide, 1-hour average (ppm)
    No2,
}

impl Pollutant {
    /// Every supported pollutant, in the order the tables are documented
    pub const ALL: [Pollutant; 8] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
        Pollutant::So2OneHour,
        Pollutant::So2TwentyFourHour,
        Pollutant::OzoneEightHour,
        Pollutant::OzoneOneHour,
        Pollutant::No2,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::So2OneHour => "SO2 (1-hour)",
            Pollutant::So2TwentyFourHour => "SO2 (24-hour)",
            Pollutant::OzoneEightHour => "Ozone (8-hour)",
            Pollutant::OzoneOneHour => "Ozone (1-hour)",
            Pollutant::No2 => "NO2",
        }
    }

    /// The breakpoint table for this pollutant and averaging period
    pub const fn table(&self) -> &'static BreakpointTable {
        match self {
            Pollutant::Pm25 => &tables::PM25,
            Pollutant::Pm10 => &tables::PM10,
            Pollutant::Co => &tables::CO,
            Pollutant::So2OneHour => &tables::SO2_1HR,
            Pollutant::So2TwentyFourHour => &tables::SO2_24HR,
            Pollutant::OzoneEightHour => &tables::OZONE_8HR,
            Pollutant::OzoneOneHour => &tables::OZONE_1HR,
            Pollutant::No2 => &tables::NO2,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pollutant {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name());
    }
}
