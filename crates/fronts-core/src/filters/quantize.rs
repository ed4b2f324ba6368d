use ndarray::Array2;

/// Convert a temperature grid to 8-bit intensities.
///
/// Each value is truncated toward zero and cast with integer wrap-around, so
/// 256.0 becomes 0 and -1.0 becomes 255. NaN maps to 0. Values must already
/// sit in `[0, 255]` for the result to be meaningful; out-of-range cells are
/// silently wrong, never an error.
pub fn quantize(data: &Array2<f64>) -> Array2<u8> {
    data.mapv(quantize_value)
}

/// Quantize a single value (see [`quantize`]).
pub fn quantize_value(v: f64) -> u8 {
    if !v.is_finite() {
        return 0;
    }
    // `as i64` saturates, `as u8` keeps the low byte.
    (v.trunc() as i64) as u8
}
