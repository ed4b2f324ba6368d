use ndarray::Array2;

use crate::consts::{SMOOTHING_KERNEL, SMOOTHING_WEIGHT_SUM};

/// 3x3 Gaussian blur of an 8-bit image.
///
/// Sigma is derived from the kernel size, which for three taps gives the
/// fixed kernel `[1, 2, 1] / 4`. Borders are reflected without repeating
/// the edge sample (`c b | a b c | b a`). Results are rounded half-up.
pub fn gaussian_blur_u8(data: &Array2<u8>) -> Array2<u8> {
    let sums = weighted_sums(data);
    sums.mapv(|s| ((s + SMOOTHING_WEIGHT_SUM / 2.0) / SMOOTHING_WEIGHT_SUM).floor() as u8)
}

/// 3x3 Gaussian blur of a floating-point grid, same kernel and border as
/// [`gaussian_blur_u8`] without rounding. NaN cells spread to their neighbours.
pub fn gaussian_blur_array(data: &Array2<f64>) -> Array2<f64> {
    weighted_sums(data).mapv(|s| s / SMOOTHING_WEIGHT_SUM)
}

/// Un-normalized 3x3 sums with weights `SMOOTHING_KERNEL ⊗ SMOOTHING_KERNEL`.
fn weighted_sums<T: Copy + Into<f64>>(data: &Array2<T>) -> Array2<f64> {
    let (h, w) = data.dim();
    let mut result = Array2::<f64>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0f64;
            for (ki, &kr) in SMOOTHING_KERNEL.iter().enumerate() {
                let src_row = reflect_101(row as isize + ki as isize - 1, h);
                for (kj, &kc) in SMOOTHING_KERNEL.iter().enumerate() {
                    let src_col = reflect_101(col as isize + kj as isize - 1, w);
                    sum += data[[src_row, src_col]].into() * kr * kc;
                }
            }
            result[[row, col]] = sum;
        }
    }

    result
}

/// Mirror an out-of-range index about the edge sample (`-1 -> 1`, `n -> n-2`).
pub(crate) fn reflect_101(i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let last = n as isize - 1;
    let r = if i < 0 {
        -i
    } else if i > last {
        2 * last - i
    } else {
        i
    };
    r.clamp(0, last) as usize
}
