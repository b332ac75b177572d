//! AQI health categories
//!
//! Six bands shared by every pollutant, plus an out-of-range marker for
//! values above the scale. Band boundaries live in [`crate::constants`].

use core::fmt;

use crate::constants::{
    GOOD_MAX, HAZARDOUS_MAX, MODERATE_MAX, UNHEALTHY_MAX, UNHEALTHY_SENSITIVE_MAX,
    VERY_UNHEALTHY_MAX,
};
use crate::errors::{InputError, InputResult};

/// Health category for an AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// AQI 0-50
    Good,
    /// AQI 51-100
    Moderate,
    /// AQI 101-150
    UnhealthyForSensitiveGroups,
    /// AQI 151-200
    Unhealthy,
    /// AQI 201-300
    VeryUnhealthy,
    /// AQI 301-500
    Hazardous,
    /// Above 500 - the scale does not go there
    OutOfRange,
}

impl Category {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Category::Unhealthy => "Unhealthy",
            Category::VeryUnhealthy => "Very Unhealthy",
            Category::Hazardous => "Hazardous",
            Category::OutOfRange => "Out of Range",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Category {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name());
    }
}

/// Classify an AQI value into its health category.
///
/// Takes `f64` because callers often hold a freshly parsed number rather
/// than a computed index; a non-finite input is a parse failure and is
/// reported as an error, not mapped to [`Category::OutOfRange`].
pub fn classify(aqi: f64) -> InputResult<Category> {
    if !aqi.is_finite() {
        return Err(InputError::NotFinite);
    }

    Ok(if aqi <= GOOD_MAX {
        Category::Good
    } else if aqi <= MODERATE_MAX {
        Category::Moderate
    } else if aqi <= UNHEALTHY_SENSITIVE_MAX {
        Category::UnhealthyForSensitiveGroups
    } else if aqi <= UNHEALTHY_MAX {
        Category::Unhealthy
    } else if aqi <= VERY_UNHEALTHY_MAX {
        Category::VeryUnhealthy
    } else if aqi <= HAZARDOUS_MAX {
        Category::Hazardous
    } else {
        Category::OutOfRange
    })
}
