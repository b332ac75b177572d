//! Property tests for the AQI engine
//!
//! The tables are small enough to pin every boundary by hand (see
//! `boundaries.rs`); these properties cover the space in between.

use aqicalc_core::{classify, compute_aqi, Category, Computation, Pollutant};
use proptest::prelude::*;

fn pollutants() -> impl Strategy<Value = Pollutant> {
    prop::sample::select(Pollutant::ALL.to_vec())
}

proptest! {
    #[test]
    fn numeric_results_stay_on_the_scale(
        pollutant in pollutants(),
        conc in 0.0f64..3000.0,
    ) {
        if let Ok(Computation::Index(aqi)) = compute_aqi(pollutant, conc) {
            prop_assert!(aqi <= 500);
            // Every computed index has a real category
            prop_assert_ne!(classify(aqi as f64), Ok(Category::OutOfRange));
        }
    }

    #[test]
    fn aqi_is_monotone_in_concentration(
        pollutant in pollutants(),
        a in 0.0f64..3000.0,
        b in 0.0f64..3000.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if let (Ok(Computation::Index(x)), Ok(Computation::Index(y))) =
            (compute_aqi(pollutant, lo), compute_aqi(pollutant, hi))
        {
            prop_assert!(x <= y, "{:?}: {} -> {} but {} -> {}", pollutant, lo, x, hi, y);
        }
    }

    #[test]
    fn computation_is_idempotent(
        pollutant in pollutants(),
        conc in 0.0f64..3000.0,
    ) {
        prop_assert_eq!(compute_aqi(pollutant, conc), compute_aqi(pollutant, conc));
    }

}

/// Each scale row's endpoints interpolate to exactly its AQI bounds.
///
/// Feeds the interpolator directly: table inputs are raw readings, and the
/// ozone/NO2 tables store already-scaled ppm bounds.
#[test]
fn segment_endpoints_round_trip() {
    use aqicalc_core::interpolate::linear;
    use aqicalc_core::tables::RowOutcome;

    for pollutant in Pollutant::ALL {
        for table_row in pollutant.table().rows {
            if let RowOutcome::Scale(bp) = table_row.outcome {
                assert_eq!(linear(&bp, bp.conc_low), bp.aqi_low, "{:?}", pollutant);
                assert_eq!(linear(&bp, bp.conc_high), bp.aqi_high, "{:?}", pollutant);
            }
        }
    }
}
