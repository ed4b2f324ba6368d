use std::ops::Range;

use chrono::{DateTime, Utc};
use ndarray::{s, Array1, Array2};

use crate::crs::Crs;
use crate::error::{FrontsError, Result};

/// A 2-D grid of values indexed `[lat, lon]`.
///
/// Axis invariants are checked once at construction; every pipeline stage
/// returns a new raster instead of mutating its input.
#[derive(Clone, Debug)]
pub struct GriddedRaster {
    values: Array2<f64>,
    lat: Array1<f64>,
    lon: Array1<f64>,
    crs: Option<Crs>,
    time: Option<DateTime<Utc>>,
}

impl GriddedRaster {
    /// Build a raster from values and its latitude/longitude axes.
    ///
    /// Fails if the shape is not `(lat.len(), lon.len())` or an axis is
    /// empty or not strictly monotonic.
    pub fn new(values: Array2<f64>, lat: Array1<f64>, lon: Array1<f64>) -> Result<Self> {
        validate_axis("lat", &lat)?;
        validate_axis("lon", &lon)?;
        check_shape(&values, lat.len(), lon.len())?;

        Ok(Self {
            values,
            lat,
            lon,
            crs: None,
            time: None,
        })
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn into_values(self) -> Array2<f64> {
        self.values
    }

    pub fn lat(&self) -> &Array1<f64> {
        &self.lat
    }

    pub fn lon(&self) -> &Array1<f64> {
        &self.lon
    }

    pub fn crs(&self) -> Option<Crs> {
        self.crs
    }

    /// The raster CRS, or `MissingCrs` when the raster was never tagged.
    pub fn require_crs(&self) -> Result<Crs> {
        self.crs.ok_or(FrontsError::MissingCrs)
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    pub fn dim(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// A new raster with the same axes, CRS and time but different values.
    pub fn with_values(&self, values: Array2<f64>) -> Result<Self> {
        check_shape(&values, self.lat.len(), self.lon.len())?;
        Ok(Self {
            values,
            lat: self.lat.clone(),
            lon: self.lon.clone(),
            crs: self.crs,
            time: self.time,
        })
    }

    /// Apply `f` to every cell, keeping axes and metadata.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            values: self.values.mapv(f),
            lat: self.lat.clone(),
            lon: self.lon.clone(),
            crs: self.crs,
            time: self.time,
        }
    }

    /// Crop to the given row (lat) and column (lon) index ranges.
    ///
    /// Ranges must be non-empty and within bounds.
    pub fn crop(&self, rows: Range<usize>, cols: Range<usize>) -> Self {
        Self {
            values: self.values.slice(s![rows.clone(), cols.clone()]).to_owned(),
            lat: self.lat.slice(s![rows]).to_owned(),
            lon: self.lon.slice(s![cols]).to_owned(),
            crs: self.crs,
            time: self.time,
        }
    }

    /// Number of cells holding data (not the no-data sentinel).
    pub fn count_valid(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }

    pub fn is_all_nodata(&self) -> bool {
        self.values.iter().all(|v| v.is_nan())
    }

    /// (lon_min, lat_min, lon_max, lat_max) of the cell centres.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        let (lon_a, lon_b) = (self.lon[0], self.lon[self.lon.len() - 1]);
        let (lat_a, lat_b) = (self.lat[0], self.lat[self.lat.len() - 1]);
        (
            lon_a.min(lon_b),
            lat_a.min(lat_b),
            lon_a.max(lon_b),
            lat_a.max(lat_b),
        )
    }
}

fn check_shape(values: &Array2<f64>, lat_len: usize, lon_len: usize) -> Result<()> {
    let (rows, cols) = values.dim();
    if rows != lat_len || cols != lon_len {
        return Err(FrontsError::ShapeMismatch {
            rows,
            cols,
            lat_len,
            lon_len,
        });
    }
    Ok(())
}

/// Check an axis is non-empty, finite and strictly increasing or decreasing.
fn validate_axis(name: &'static str, axis: &Array1<f64>) -> Result<()> {
    if axis.is_empty() {
        return Err(FrontsError::EmptyAxis(name));
    }
    if let Some(index) = axis.iter().position(|v| !v.is_finite()) {
        return Err(FrontsError::NonMonotonicAxis { axis: name, index });
    }
    if axis.len() < 2 {
        return Ok(());
    }

    let increasing = axis[1] > axis[0];
    for i in 1..axis.len() {
        let ok = if increasing {
            axis[i] > axis[i - 1]
        } else {
            axis[i] < axis[i - 1]
        };
        if !ok {
            return Err(FrontsError::NonMonotonicAxis { axis: name, index: i });
        }
    }
    Ok(())
}
