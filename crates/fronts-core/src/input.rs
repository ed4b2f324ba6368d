//! Preparation of the SST grid before front detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::KELVIN_OFFSET;
use crate::crs::Crs;
use crate::error::Result;
use crate::geometry::MaskSet;
use crate::mask::{clip, ClipMode};
use crate::raster::GriddedRaster;

/// Temperature unit of a source grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SstUnit {
    /// Archive products deliver `analysed_sst` in Kelvin.
    #[default]
    Kelvin,
    Celsius,
}

impl std::fmt::Display for SstUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kelvin => write!(f, "Kelvin"),
            Self::Celsius => write!(f, "Celsius"),
        }
    }
}

pub fn kelvin_to_celsius(raster: &GriddedRaster) -> GriddedRaster {
    raster.map_values(|v| v - KELVIN_OFFSET)
}

/// Keep only cells whose centre lies inside the AOI, cropped to them.
pub fn clip_to_aoi(raster: &GriddedRaster, aoi: &MaskSet) -> Result<GriddedRaster> {
    clip(raster, aoi, ClipMode::Include)
}

/// Convert a source grid to Celsius, tag it WGS84 when it carries no CRS,
/// and clip it to the AOI.
pub fn prepare_sst(raster: &GriddedRaster, aoi: &MaskSet, unit: SstUnit) -> Result<GriddedRaster> {
    let celsius = match unit {
        SstUnit::Kelvin => kelvin_to_celsius(raster),
        SstUnit::Celsius => raster.clone(),
    };
    let tagged = match celsius.crs() {
        Some(_) => celsius,
        None => celsius.with_crs(Crs::Wgs84),
    };

    let clipped = clip_to_aoi(&tagged, aoi)?;
    debug!(
        %unit,
        rows = clipped.nrows(),
        cols = clipped.ncols(),
        valid = clipped.count_valid(),
        "SST grid prepared"
    );
    Ok(clipped)
}
