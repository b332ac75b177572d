//! Boundary pinning against the EPA reference tables
//!
//! Every shared boundary between two breakpoint rows, every preserved quirk
//! of the published SO2 tables, and the classifier band edges. Expected
//! values follow the AirNow concentration calculator.

use aqicalc_core::{classify, compute_aqi, Category, Computation, InputError, Pollutant};

fn index(pollutant: Pollutant, conc: f64) -> u16 {
    match compute_aqi(pollutant, conc) {
        Ok(Computation::Index(aqi)) => aqi,
        other => panic!("{:?} at {}: expected an index, got {:?}", pollutant, conc, other),
    }
}

#[test]
fn pm25_boundaries() {
    assert_eq!(index(Pollutant::Pm25, 0.0), 0);
    assert_eq!(index(Pollutant::Pm25, 12.0), 50);
    assert_eq!(index(Pollutant::Pm25, 12.1), 51);
    assert_eq!(index(Pollutant::Pm25, 35.4), 100);
    assert_eq!(index(Pollutant::Pm25, 35.5), 101);
    assert_eq!(index(Pollutant::Pm25, 150.4), 200);
    assert_eq!(index(Pollutant::Pm25, 150.5), 201);
    assert_eq!(index(Pollutant::Pm25, 500.4), 500);
    assert_eq!(compute_aqi(Pollutant::Pm25, 500.5), Ok(Computation::BeyondIndex));
}

#[test]
fn pm10_boundaries() {
    assert_eq!(index(Pollutant::Pm10, 54.0), 50);
    assert_eq!(index(Pollutant::Pm10, 55.0), 51);
    assert_eq!(index(Pollutant::Pm10, 154.0), 100);
    assert_eq!(index(Pollutant::Pm10, 155.0), 101);
    assert_eq!(index(Pollutant::Pm10, 604.0), 500);
    assert_eq!(compute_aqi(Pollutant::Pm10, 605.0), Ok(Computation::BeyondIndex));
}

#[test]
fn co_boundaries() {
    assert_eq!(index(Pollutant::Co, 4.4), 50);
    assert_eq!(index(Pollutant::Co, 4.5), 51);
    assert_eq!(index(Pollutant::Co, 9.4), 100);
    assert_eq!(index(Pollutant::Co, 9.5), 101);
    assert_eq!(index(Pollutant::Co, 50.4), 500);
    assert_eq!(compute_aqi(Pollutant::Co, 50.5), Ok(Computation::OutOfRange));
}

#[test]
fn so2_one_hour_preserves_the_304_overlap() {
    assert_eq!(index(Pollutant::So2OneHour, 35.0), 50);
    assert_eq!(index(Pollutant::So2OneHour, 36.0), 51);
    assert_eq!(index(Pollutant::So2OneHour, 185.0), 150);
    // The 151-200 row spans [186, 304] closed and is evaluated before the
    // overlapping alternate-period row, so both ends interpolate
    assert_eq!(index(Pollutant::So2OneHour, 186.0), 151);
    assert_eq!(index(Pollutant::So2OneHour, 304.0), 200);
    // 305 and everything up to 604 defers to the 24-hour table
    assert_eq!(
        compute_aqi(Pollutant::So2OneHour, 305.0),
        Ok(Computation::AlternatePeriod(Pollutant::So2TwentyFourHour))
    );
    assert_eq!(
        compute_aqi(Pollutant::So2OneHour, 604.0),
        Ok(Computation::AlternatePeriod(Pollutant::So2TwentyFourHour))
    );
    assert_eq!(compute_aqi(Pollutant::So2OneHour, 605.0), Ok(Computation::OutOfRange));
}

#[test]
fn so2_twenty_four_hour_lower_rows_defer_to_one_hour() {
    assert_eq!(
        compute_aqi(Pollutant::So2TwentyFourHour, 0.0),
        Ok(Computation::AlternatePeriod(Pollutant::So2OneHour))
    );
    assert_eq!(
        compute_aqi(Pollutant::So2TwentyFourHour, 304.0),
        Ok(Computation::AlternatePeriod(Pollutant::So2OneHour))
    );
    // First reachable value of the 201-300 row; it interpolates from 305
    assert_eq!(index(Pollutant::So2TwentyFourHour, 305.0), 201);
    assert_eq!(index(Pollutant::So2TwentyFourHour, 604.0), 300);
    assert_eq!(index(Pollutant::So2TwentyFourHour, 605.0), 301);
    assert_eq!(index(Pollutant::So2TwentyFourHour, 804.0), 400);
    assert_eq!(index(Pollutant::So2TwentyFourHour, 805.0), 401);
    assert_eq!(index(Pollutant::So2TwentyFourHour, 1004.0), 500);
    assert_eq!(
        compute_aqi(Pollutant::So2TwentyFourHour, 1005.0),
        Ok(Computation::OutOfRange)
    );
}

#[test]
fn ozone_eight_hour_boundaries() {
    // Raw input is whole ppb; 54 scales to 0.054 ppm
    assert_eq!(index(Pollutant::OzoneEightHour, 54.0), 50);
    assert_eq!(index(Pollutant::OzoneEightHour, 55.0), 51);
    assert_eq!(index(Pollutant::OzoneEightHour, 70.0), 100);
    assert_eq!(index(Pollutant::OzoneEightHour, 71.0), 101);
    assert_eq!(index(Pollutant::OzoneEightHour, 200.0), 300);
    assert_eq!(
        compute_aqi(Pollutant::OzoneEightHour, 201.0),
        Ok(Computation::AlternatePeriod(Pollutant::OzoneOneHour))
    );
    assert_eq!(
        compute_aqi(Pollutant::OzoneEightHour, 604.0),
        Ok(Computation::AlternatePeriod(Pollutant::OzoneOneHour))
    );
    assert_eq!(
        compute_aqi(Pollutant::OzoneEightHour, 605.0),
        Ok(Computation::OutOfRange)
    );
}

#[test]
fn ozone_one_hour_boundaries() {
    assert_eq!(
        compute_aqi(Pollutant::OzoneOneHour, 124.0),
        Ok(Computation::AlternatePeriod(Pollutant::OzoneEightHour))
    );
    assert_eq!(index(Pollutant::OzoneOneHour, 125.0), 101);
    assert_eq!(index(Pollutant::OzoneOneHour, 164.0), 150);
    assert_eq!(index(Pollutant::OzoneOneHour, 165.0), 151);
    assert_eq!(index(Pollutant::OzoneOneHour, 504.0), 400);
    assert_eq!(index(Pollutant::OzoneOneHour, 604.0), 500);
    assert_eq!(compute_aqi(Pollutant::OzoneOneHour, 605.0), Ok(Computation::OutOfRange));
}

#[test]
fn no2_boundaries() {
    // Raw input is whole ppb; 2049 scales to 2.049 ppm
    assert_eq!(index(Pollutant::No2, 53.0), 50);
    assert_eq!(index(Pollutant::No2, 54.0), 51);
    assert_eq!(index(Pollutant::No2, 100.0), 100);
    assert_eq!(index(Pollutant::No2, 101.0), 101);
    assert_eq!(index(Pollutant::No2, 2049.0), 500);
    assert_eq!(compute_aqi(Pollutant::No2, 2050.0), Ok(Computation::OutOfRange));
}

#[test]
fn classifier_band_edges() {
    assert_eq!(classify(50.0), Ok(Category::Good));
    assert_eq!(classify(51.0), Ok(Category::Moderate));
    assert_eq!(classify(500.0), Ok(Category::Hazardous));
    assert_eq!(classify(501.0), Ok(Category::OutOfRange));
}

#[test]
fn bad_input_never_reaches_the_tables() {
    for pollutant in Pollutant::ALL {
        assert_eq!(compute_aqi(pollutant, f64::NAN), Err(InputError::NotFinite));
        assert_eq!(
            compute_aqi(pollutant, -0.1),
            Err(InputError::Negative { value: -0.1 })
        );
    }
    assert_eq!(classify(f64::NAN), Err(InputError::NotFinite));
}
