/// No-data sentinel written into masked and non-front cells.
pub const NODATA: f64 = f64::NAN;

/// Gradient magnitude a cell must strictly exceed to be classified as a front.
pub const FRONT_THRESHOLD: f64 = 0.2;

/// Value written into front cells of the classified raster.
pub const FRONT_VALUE: f64 = 1.0;

/// Upper bound of the 8-bit intensity range used by the quantizer.
pub const INTENSITY_MAX: f64 = 255.0;

/// 3-tap Gaussian kernel selected automatically for a 3x3 window: [1, 2, 1] / 4.
pub const SMOOTHING_KERNEL: [f64; 3] = [1.0, 2.0, 1.0];

/// Sum of the 2-D smoothing weights (outer product of `SMOOTHING_KERNEL`).
pub const SMOOTHING_WEIGHT_SUM: f64 = 16.0;

/// Sobel derivative taps, applied as a correlation.
pub const SOBEL_DERIVATIVE: [f64; 3] = [-1.0, 0.0, 1.0];

/// Sobel smoothing taps along the non-derivative axis.
pub const SOBEL_SMOOTHING: [f64; 3] = [1.0, 2.0, 1.0];

/// Sum of absolute Sobel weights on one side of the kernel.
pub const SOBEL_WEIGHT_SUM: f64 = 8.0;

/// Offset between Kelvin and degrees Celsius.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Default width of the exclusion band around the AOI boundary, in metres.
pub const DEFAULT_AOI_EDGE_BUFFER_M: f64 = 30_000.0;

/// Default number of segments used to approximate a quarter circle when
/// buffering.
pub const DEFAULT_BUFFER_QUAD_SEGMENTS: usize = 16;
