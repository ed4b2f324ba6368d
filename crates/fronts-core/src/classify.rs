use tracing::debug;

use crate::consts::{FRONT_THRESHOLD, FRONT_VALUE, NODATA};
use crate::raster::GriddedRaster;

/// Whether a gradient magnitude counts as a front (strictly above the threshold).
pub fn is_front(magnitude: f64) -> bool {
    magnitude > FRONT_THRESHOLD
}

/// Threshold a magnitude raster into a binary front raster.
///
/// Cells with magnitude > 0.2 become 1, everything else (including no-data)
/// becomes no-data. Axes, CRS and time are unchanged.
pub fn classify_fronts(magnitude: &GriddedRaster) -> GriddedRaster {
    let fronts = magnitude.map_values(|v| if is_front(v) { FRONT_VALUE } else { NODATA });
    debug!(
        fronts = fronts.count_valid(),
        cells = fronts.values().len(),
        "Fronts classified"
    );
    fronts
}
