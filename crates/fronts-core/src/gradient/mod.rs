pub mod sobel;

use ndarray::Array2;
use tracing::debug;

use crate::crs::Crs;
use crate::error::{FrontsError, Result};
use crate::filters::gaussian_blur::{gaussian_blur_array, gaussian_blur_u8};
use crate::filters::quantize::quantize;
use crate::pipeline::config::{GradientScaling, Quantization};
use crate::raster::GriddedRaster;

pub use sobel::{gradient_field, gradient_field_u8, GradientField};

/// Blur and differentiate a temperature grid.
///
/// `Uint8` quantizes, blurs and runs Sobel in 8-bit arithmetic, where
/// negative derivatives wrap modulo 256. `Float` keeps `f64` throughout.
pub fn temperature_gradient(
    values: &Array2<f64>,
    quantization: Quantization,
    scaling: GradientScaling,
) -> GradientField {
    match quantization {
        Quantization::Uint8 => gradient_field_u8(&gaussian_blur_u8(&quantize(values)), scaling),
        Quantization::Float => gradient_field(&gaussian_blur_array(values), scaling),
    }
}

/// Gradient magnitude of a temperature raster.
///
/// Quantize (per `quantization`), blur 3x3, Sobel along both axes, rescale
/// (per `scaling`) and combine with `hypot`. The result keeps the source
/// lat/lon axes and time, and is tagged WGS84 with x bound to lon and y to
/// lat. The source must be a geographic WGS84 raster.
pub fn sobel_gradient(
    source: &GriddedRaster,
    quantization: Quantization,
    scaling: GradientScaling,
) -> Result<GriddedRaster> {
    let crs = source.require_crs()?;
    if crs != Crs::Wgs84 {
        return Err(FrontsError::CrsMismatch {
            expected: Crs::Wgs84,
            found: crs,
        });
    }

    let field = temperature_gradient(source.values(), quantization, scaling);

    let (rows, cols) = source.dim();
    debug!(rows, cols, %quantization, %scaling, "Sobel gradient computed");

    Ok(source.with_values(field.magnitude)?.with_crs(Crs::Wgs84))
}
