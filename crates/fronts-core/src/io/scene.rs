//! JSON scene files: an SST grid plus the AOI and coastline buffer it is
//! analysed against.
//!
//! ```json
//! {
//!   "sst": {
//!     "lat": [45.0, 45.1], "lon": [5.0, 5.1],
//!     "values": [[288.1, null], [288.3, 288.4]],
//!     "crs": "EPSG:4326", "time": "2022-06-15T00:00:00Z", "unit": "Kelvin"
//!   },
//!   "aoi": { "crs": "EPSG:4326", "polygons": [{ "exterior": [[4, 44], [6, 44], [6, 46]] }] },
//!   "coast_buffer": { "crs": "EPSG:4326", "polygons": [] }
//! }
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::NODATA;
use crate::crs::Crs;
use crate::error::{FrontsError, Result};
use crate::geometry::MaskSet;
use crate::input::SstUnit;
use crate::raster::GriddedRaster;

/// Everything one front detection run needs.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Source grid, as stored (not yet unit-converted or clipped).
    pub sst: GriddedRaster,
    pub unit: SstUnit,
    pub aoi: MaskSet,
    pub coast_buffer: MaskSet,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SceneFile {
    pub sst: RasterFile,
    pub aoi: MaskSet,
    pub coast_buffer: MaskSet,
}

/// On-disk raster: rows follow `lat`, columns follow `lon`, `null` is no-data.
#[derive(Debug, Serialize, Deserialize)]
pub struct RasterFile {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub values: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub crs: Option<Crs>,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub unit: SstUnit,
}

impl RasterFile {
    pub fn into_raster(self) -> Result<(GriddedRaster, SstUnit)> {
        let rows = self.values.len();
        let cols = self.lon.len();
        let shape_error = |found_cols: usize| FrontsError::ShapeMismatch {
            rows,
            cols: found_cols,
            lat_len: self.lat.len(),
            lon_len: cols,
        };

        let mut flat = Vec::with_capacity(rows * cols);
        for row in &self.values {
            if row.len() != cols {
                return Err(shape_error(row.len()));
            }
            flat.extend(row.iter().map(|v| v.unwrap_or(NODATA)));
        }
        let values = Array2::from_shape_vec((rows, cols), flat).map_err(|_| shape_error(cols))?;

        let mut raster =
            GriddedRaster::new(values, Array1::from(self.lat), Array1::from(self.lon))?;
        if let Some(crs) = self.crs {
            raster = raster.with_crs(crs);
        }
        if let Some(time) = self.time {
            raster = raster.with_time(time);
        }
        Ok((raster, self.unit))
    }
}

impl Scene {
    pub fn from_file(file: SceneFile) -> Result<Self> {
        let (sst, unit) = file.sst.into_raster()?;
        Ok(Self {
            sst,
            unit,
            aoi: file.aoi,
            coast_buffer: file.coast_buffer,
        })
    }
}

/// Parse a scene from a JSON string.
pub fn parse_scene(json: &str) -> Result<Scene> {
    let file: SceneFile = serde_json::from_str(json)?;
    Scene::from_file(file)
}

/// Read and parse a scene file.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let contents = std::fs::read_to_string(path)?;
    let scene = parse_scene(&contents)?;
    debug!(
        path = %path.display(),
        rows = scene.sst.nrows(),
        cols = scene.sst.ncols(),
        "Scene loaded"
    );
    Ok(scene)
}
