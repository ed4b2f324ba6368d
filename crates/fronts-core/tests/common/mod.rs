#![allow(dead_code)]

use fronts_core::crs::Crs;
use fronts_core::geometry::{MaskSet, Polygon};
use fronts_core::raster::GriddedRaster;
use ndarray::{Array1, Array2};

/// Evenly spaced axis `start, start + step, ...` with `n` values.
pub fn axis(start: f64, step: f64, n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |i| start + step * i as f64)
}

/// WGS84 raster with integer lat/lon axes starting at 0.
pub fn index_raster(values: Array2<f64>) -> GriddedRaster {
    let (h, w) = values.dim();
    GriddedRaster::new(values, axis(0.0, 1.0, h), axis(0.0, 1.0, w))
        .expect("valid raster")
        .with_crs(Crs::Wgs84)
}

/// 5x5 raster with cell value `row * 10 + col`.
pub fn numbered_raster() -> GriddedRaster {
    index_raster(Array2::from_shape_fn((5, 5), |(r, c)| (r * 10 + c) as f64))
}

/// 5x5 grid: columns 0-1 hold `left`, columns 2-4 hold `right`.
pub fn step_values(left: f64, right: f64) -> Array2<f64> {
    Array2::from_shape_fn((5, 5), |(_, c)| if c < 2 { left } else { right })
}

/// 5x5 WGS84 raster at 0.1 degree spacing around (5.0E, 45.0N).
pub fn sea_raster(values: Array2<f64>) -> GriddedRaster {
    GriddedRaster::new(values, axis(44.8, 0.1, 5), axis(4.8, 0.1, 5))
        .expect("valid raster")
        .with_crs(Crs::Wgs84)
}

/// AOI rectangle 4..6 E, 44..46 N.
pub fn aoi() -> MaskSet {
    MaskSet::from_polygon(
        Polygon::rectangle(4.0, 44.0, 6.0, 46.0).expect("valid polygon"),
        Crs::Wgs84,
    )
}

pub fn rect_mask(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> MaskSet {
    MaskSet::from_polygon(
        Polygon::rectangle(min_x, min_y, max_x, max_y).expect("valid polygon"),
        Crs::Wgs84,
    )
}

/// Cell-by-cell equality treating NaN == NaN.
pub fn assert_cells_eq(a: &Array2<f64>, b: &Array2<f64>) {
    assert_eq!(a.dim(), b.dim(), "shape differs");
    for ((idx, x), y) in a.indexed_iter().zip(b.iter()) {
        assert!(
            (x.is_nan() && y.is_nan()) || x == y,
            "cell {idx:?}: {x} != {y}"
        );
    }
}

/// Column indices flagged as fronts in every row, or panics if rows differ.
pub fn front_columns(fronts: &Array2<f64>) -> Vec<usize> {
    let first: Vec<usize> = (0..fronts.ncols())
        .filter(|&c| fronts[[0, c]] == 1.0)
        .collect();
    for r in 1..fronts.nrows() {
        let row: Vec<usize> = (0..fronts.ncols())
            .filter(|&c| fronts[[r, c]] == 1.0)
            .collect();
        assert_eq!(row, first, "row {r} flags different columns");
    }
    first
}
