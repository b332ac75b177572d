//! Error Types for Concentration Input Validation
//!
//! ## Design Philosophy
//!
//! The error type follows the same rules as the rest of the crate:
//!
//! 1. **Small Size**: variants carry at most one `f64` so errors stay cheap
//!    to return from hot paths.
//!
//! 2. **No Heap Allocation**: all error data is inline - no String. This
//!    keeps the crate usable without an allocator.
//!
//! 3. **Copy Semantics**: errors implement Copy for efficient return from
//!    functions without move semantics complications.
//!
//! ## Error Taxonomy
//!
//! Only malformed *input* is an error:
//!
//! - `NotFinite`: the concentration is NaN or infinite, typically the
//!   residue of a failed upstream parse. The reference implementation let
//!   NaN propagate into the tables and silently miscalculated; here it is
//!   surfaced to the caller.
//! - `Negative`: concentrations are physical quantities and cannot be
//!   negative.
//!
//! Everything else the engine can report - out-of-table values, readings
//! that need a different averaging period, values beyond the 500 ceiling -
//! is an *expected outcome*, communicated through [`Computation`] variants,
//! never through this type.
//!
//! [`Computation`]: crate::index::Computation

use thiserror_no_std::Error;

/// Result type for input validation
pub type InputResult<T> = Result<T, InputError>;

/// Input errors - kept small, Copy, and heap-free
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InputError {
    /// Concentration is NaN or infinite (usually a failed upstream parse)
    #[error("concentration is not a finite number")]
    NotFinite,

    /// Concentration is negative, which no pollutant reading can be
    #[error("concentration {value} is negative")]
    Negative {
        /// The offending input value
        value: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotFinite => defmt::write!(fmt, "not a finite number"),
            Self::Negative { value } => defmt::write!(fmt, "negative concentration {}", value),
        }
    }
}
