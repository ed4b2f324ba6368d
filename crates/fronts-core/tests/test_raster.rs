mod common;

use chrono::{TimeZone, Utc};
use fronts_core::crs::Crs;
use fronts_core::error::FrontsError;
use fronts_core::raster::GriddedRaster;
use ndarray::{array, Array1, Array2};

use common::{axis, numbered_raster};

#[test]
fn test_shape_must_match_axes() {
    let result = GriddedRaster::new(Array2::zeros((3, 4)), axis(0.0, 1.0, 3), axis(0.0, 1.0, 5));
    assert!(matches!(
        result,
        Err(FrontsError::ShapeMismatch {
            rows: 3,
            cols: 4,
            lat_len: 3,
            lon_len: 5
        })
    ));
}

#[test]
fn test_empty_axis_rejected() {
    let result = GriddedRaster::new(Array2::zeros((0, 2)), Array1::zeros(0), axis(0.0, 1.0, 2));
    assert!(matches!(result, Err(FrontsError::EmptyAxis("lat"))));
}

#[test]
fn test_non_monotonic_axis_rejected() {
    let result = GriddedRaster::new(
        Array2::zeros((3, 2)),
        array![0.0, 1.0, 1.0],
        axis(0.0, 1.0, 2),
    );
    assert!(matches!(
        result,
        Err(FrontsError::NonMonotonicAxis {
            axis: "lat",
            index: 2
        })
    ));

    let result = GriddedRaster::new(
        Array2::zeros((2, 3)),
        axis(0.0, 1.0, 2),
        array![0.0, f64::NAN, 2.0],
    );
    assert!(matches!(
        result,
        Err(FrontsError::NonMonotonicAxis { axis: "lon", .. })
    ));
}

#[test]
fn test_decreasing_axis_accepted() {
    // Many SST products store latitude north to south.
    let raster =
        GriddedRaster::new(Array2::zeros((3, 2)), array![2.0, 1.0, 0.0], axis(0.0, 1.0, 2))
            .unwrap();
    assert_eq!(raster.extent(), (0.0, 0.0, 1.0, 2.0));
}

#[test]
fn test_single_cell_raster() {
    let raster = GriddedRaster::new(Array2::zeros((1, 1)), array![45.0], array![5.0]).unwrap();
    assert_eq!(raster.dim(), (1, 1));
}

#[test]
fn test_missing_crs_is_reported() {
    let raster = GriddedRaster::new(Array2::zeros((2, 2)), axis(0.0, 1.0, 2), axis(0.0, 1.0, 2))
        .unwrap();
    assert!(raster.crs().is_none());
    assert!(matches!(raster.require_crs(), Err(FrontsError::MissingCrs)));
    assert_eq!(raster.with_crs(Crs::Wgs84).require_crs().unwrap(), Crs::Wgs84);
}

#[test]
fn test_with_values_keeps_metadata() {
    let time = Utc.with_ymd_and_hms(2022, 6, 15, 0, 0, 0).unwrap();
    let raster = numbered_raster().with_time(time);
    let doubled = raster.with_values(raster.values() * 2.0).unwrap();

    assert_eq!(doubled.lat(), raster.lat());
    assert_eq!(doubled.lon(), raster.lon());
    assert_eq!(doubled.crs(), Some(Crs::Wgs84));
    assert_eq!(doubled.time(), Some(time));
    assert_eq!(doubled.values()[[2, 3]], 46.0);
    // The source is untouched.
    assert_eq!(raster.values()[[2, 3]], 23.0);
}

#[test]
fn test_with_values_rejects_wrong_shape() {
    let raster = numbered_raster();
    assert!(matches!(
        raster.with_values(Array2::zeros((4, 5))),
        Err(FrontsError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_crop_slices_axes_and_values() {
    let cropped = numbered_raster().crop(1..3, 2..5);
    assert_eq!(cropped.dim(), (2, 3));
    assert_eq!(cropped.lat().to_vec(), vec![1.0, 2.0]);
    assert_eq!(cropped.lon().to_vec(), vec![2.0, 3.0, 4.0]);
    assert_eq!(cropped.values()[[0, 0]], 12.0);
    assert_eq!(cropped.values()[[1, 2]], 24.0);
}

#[test]
fn test_count_valid_ignores_nodata() {
    let raster = numbered_raster().map_values(|v| if v > 30.0 { f64::NAN } else { v });
    // Values 31..34 and 40..44 are removed.
    assert_eq!(raster.count_valid(), 25 - 9);
    assert!(!raster.is_all_nodata());
    assert!(raster.map_values(|_| f64::NAN).is_all_nodata());
}
