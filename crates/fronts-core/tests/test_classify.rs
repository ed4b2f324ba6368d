mod common;

use chrono::{TimeZone, Utc};
use fronts_core::classify::{classify_fronts, is_front};
use fronts_core::consts::FRONT_THRESHOLD;
use fronts_core::crs::Crs;
use ndarray::array;

use common::{assert_cells_eq, index_raster};

#[test]
fn test_threshold_is_strict() {
    assert!(!is_front(FRONT_THRESHOLD));
    assert!(is_front(0.2001));
    assert!(!is_front(0.0));
    assert!(!is_front(f64::NAN));
}

#[test]
fn test_classify_values() {
    let magnitude = index_raster(array![[0.2, 0.2001, f64::NAN, 1.0, 0.0]]);
    let fronts = classify_fronts(&magnitude);

    assert_cells_eq(
        fronts.values(),
        &array![[f64::NAN, 1.0, f64::NAN, 1.0, f64::NAN]],
    );
    assert_eq!(fronts.count_valid(), 2);
}

#[test]
fn test_classify_keeps_grid() {
    let time = Utc.with_ymd_and_hms(2022, 6, 15, 0, 0, 0).unwrap();
    let magnitude = index_raster(array![[0.5, 0.1], [0.3, 0.25]]).with_time(time);
    let fronts = classify_fronts(&magnitude);

    assert_eq!(fronts.lat(), magnitude.lat());
    assert_eq!(fronts.lon(), magnitude.lon());
    assert_eq!(fronts.crs(), Some(Crs::Wgs84));
    assert_eq!(fronts.time(), Some(time));
}

#[test]
fn test_classify_is_idempotent_on_output() {
    let magnitude = index_raster(array![[0.5, 0.1, f64::NAN]]);
    let once = classify_fronts(&magnitude);
    let twice = classify_fronts(&once);
    assert_cells_eq(once.values(), twice.values());
}
