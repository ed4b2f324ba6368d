use ndarray::{Array2, Axis, Zip};

use crate::consts::{INTENSITY_MAX, SOBEL_DERIVATIVE, SOBEL_SMOOTHING, SOBEL_WEIGHT_SUM};
use crate::pipeline::config::GradientScaling;

/// Rescaled Sobel components and their magnitude.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// Derivative along axis 0 (latitude).
    pub dx: Array2<f64>,
    /// Derivative along axis 1 (longitude).
    pub dy: Array2<f64>,
    /// `hypot(dx, dy)`.
    pub magnitude: Array2<f64>,
}

/// Raw 3x3 Sobel derivative along `axis`.
///
/// Derivative taps `[-1, 0, 1]` run along `axis`, smoothing taps `[1, 2, 1]`
/// along the other one. Borders use symmetric reflect
/// (`b a | a b c | c b`).
pub fn sobel(data: &Array2<f64>, axis: Axis) -> Array2<f64> {
    let (h, w) = data.dim();
    let mut result = Array2::<f64>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0f64;
            for (ki, &kr) in kernel_rows(axis).iter().enumerate() {
                if kr == 0.0 {
                    continue;
                }
                let src_row = reflect(row as isize + ki as isize - 1, h);
                for (kj, &kc) in kernel_cols(axis).iter().enumerate() {
                    let src_col = reflect(col as isize + kj as isize - 1, w);
                    sum += data[[src_row, src_col]] * kr * kc;
                }
            }
            result[[row, col]] = sum;
        }
    }

    result
}

/// 3x3 Sobel derivative of an 8-bit image along `axis`, in 8-bit arithmetic.
///
/// The derivative pass along `axis` runs first, then the smoothing pass
/// along the other axis. Each pass writes into `u8` and wraps modulo 256,
/// so a falling edge of -12 reads as 244. Borders use symmetric reflect.
pub fn sobel_u8(data: &Array2<u8>, axis: Axis) -> Array2<u8> {
    let derivative = correlate_u8(data, axis, |prev, _, next| next.wrapping_sub(prev));
    let across = Axis(1 - axis.index());
    correlate_u8(&derivative, across, |prev, centre, next| {
        prev.wrapping_add(centre.wrapping_mul(2)).wrapping_add(next)
    })
}

/// Apply a 3-tap kernel `taps(prev, centre, next)` along `axis`.
fn correlate_u8(data: &Array2<u8>, axis: Axis, taps: impl Fn(u8, u8, u8) -> u8) -> Array2<u8> {
    let n = data.len_of(axis);
    Array2::from_shape_fn(data.dim(), |(row, col)| {
        let i = (if axis == Axis(0) { row } else { col }) as isize;
        let at = |offset: isize| {
            let j = reflect(i + offset, n);
            if axis == Axis(0) {
                data[[j, col]]
            } else {
                data[[row, j]]
            }
        };
        taps(at(-1), at(0), at(1))
    })
}

fn kernel_rows(axis: Axis) -> [f64; 3] {
    if axis == Axis(0) {
        SOBEL_DERIVATIVE
    } else {
        SOBEL_SMOOTHING
    }
}

fn kernel_cols(axis: Axis) -> [f64; 3] {
    if axis == Axis(0) {
        SOBEL_SMOOTHING
    } else {
        SOBEL_DERIVATIVE
    }
}

/// Symmetric reflect of an out-of-range index (`-1 -> 0`, `n -> n-1`).
fn reflect(i: isize, n: usize) -> usize {
    let last = n as isize - 1;
    let r = if i < 0 {
        -i - 1
    } else if i > last {
        2 * last - i + 1
    } else {
        i
    };
    r.clamp(0, last) as usize
}

/// Normalize a raw Sobel component.
///
/// `ArrayMaximum` divides by 255 and multiplies by the largest absolute
/// value of the divided array (NaN ignored), so rising and falling edges
/// of equal size scale alike. An all-zero component stays zero.
/// `KernelWeight` divides by the Sobel weight sum instead.
pub fn rescale(component: &Array2<f64>, scaling: GradientScaling) -> Array2<f64> {
    match scaling {
        GradientScaling::ArrayMaximum => {
            let divided = component.mapv(|v| v / INTENSITY_MAX);
            let max = nan_abs_max(&divided).unwrap_or(0.0);
            divided.mapv(|v| v * max)
        }
        GradientScaling::KernelWeight => component.mapv(|v| v / SOBEL_WEIGHT_SUM),
    }
}

/// Largest non-NaN absolute value, `None` when every value is NaN.
pub fn nan_abs_max(data: &Array2<f64>) -> Option<f64> {
    data.iter()
        .filter(|v| !v.is_nan())
        .map(|v| v.abs())
        .reduce(f64::max)
}

/// Rescaled `dx`, `dy` and their magnitude for a smoothed `f64` image.
pub fn gradient_field(image: &Array2<f64>, scaling: GradientScaling) -> GradientField {
    combine(sobel(image, Axis(0)), sobel(image, Axis(1)), scaling)
}

/// Rescaled `dx`, `dy` and their magnitude for a smoothed 8-bit image,
/// using [`sobel_u8`].
pub fn gradient_field_u8(image: &Array2<u8>, scaling: GradientScaling) -> GradientField {
    combine(
        sobel_u8(image, Axis(0)).mapv(f64::from),
        sobel_u8(image, Axis(1)).mapv(f64::from),
        scaling,
    )
}

fn combine(dx: Array2<f64>, dy: Array2<f64>, scaling: GradientScaling) -> GradientField {
    let dx = rescale(&dx, scaling);
    let dy = rescale(&dy, scaling);

    let mut magnitude = Array2::<f64>::zeros(dx.dim());
    Zip::from(&mut magnitude)
        .and(&dx)
        .and(&dy)
        .for_each(|m, &a, &b| *m = a.hypot(b));

    GradientField { dx, dy, magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_is_symmetric() {
        assert_eq!(reflect(-1, 5), 0);
        assert_eq!(reflect(5, 5), 4);
        assert_eq!(reflect(3, 5), 3);
        assert_eq!(reflect(-1, 1), 0);
        assert_eq!(reflect(1, 1), 0);
    }

    #[test]
    fn test_nan_abs_max_ignores_nan() {
        let data = Array2::from_shape_vec((1, 3), vec![f64::NAN, 2.0, -3.0]).unwrap();
        assert_eq!(nan_abs_max(&data), Some(3.0));
        let all_nan = Array2::from_elem((2, 2), f64::NAN);
        assert_eq!(nan_abs_max(&all_nan), None);
    }

    #[test]
    fn test_correlate_u8_wraps() {
        let data = Array2::from_shape_vec((1, 3), vec![200u8, 0, 100]).unwrap();
        let out = correlate_u8(&data, Axis(1), |p, c, n| {
            p.wrapping_add(c.wrapping_mul(2)).wrapping_add(n)
        });
        // 200 + 400 + 0 = 600, 200 + 0 + 100 = 300, 0 + 200 + 100 = 300.
        assert_eq!(out.row(0).to_vec(), vec![88, 44, 44]);
    }
}
