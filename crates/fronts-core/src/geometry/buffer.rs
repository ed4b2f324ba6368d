use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

use crate::crs::Crs;
use crate::error::{FrontsError, Result};

use super::polygon::{MaskSet, Polygon};

/// Buffer the boundary of every polygon in `area` by `distance_m` metres.
///
/// The boundary (exterior rings and holes) is projected into EPSG:3035,
/// each boundary segment is swept into a capsule with round caps, and the
/// capsules are projected back into the CRS of `area`. The union of the
/// returned polygons is the buffered boundary.
///
/// `quad_segments` is the number of segments approximating a quarter circle.
pub fn boundary_buffer(area: &MaskSet, distance_m: f64, quad_segments: usize) -> Result<MaskSet> {
    if !(distance_m.is_finite() && distance_m > 0.0) {
        return Err(FrontsError::InvalidConfig(format!(
            "buffer distance must be positive, got {distance_m}"
        )));
    }
    if quad_segments == 0 {
        return Err(FrontsError::InvalidConfig(
            "buffer needs at least one segment per quarter circle".into(),
        ));
    }

    let planar = area.to_crs(Crs::EtrsLaea)?;
    let mut capsules = Vec::new();

    for polygon in &planar.polygons {
        for ring in polygon.rings() {
            let n = ring.len();
            for i in 0..n {
                let a = ring[i];
                let b = ring[(i + 1) % n];
                capsules.push(capsule(a, b, distance_m, quad_segments)?);
            }
        }
    }

    debug!(
        polygons = area.len(),
        capsules = capsules.len(),
        distance_m,
        "Boundary buffer built"
    );

    MaskSet::new(capsules, Crs::EtrsLaea).to_crs(area.crs)
}

/// Polygon covering every point within `radius` of segment `a`-`b`.
///
/// A degenerate segment yields a circle.
fn capsule(a: [f64; 2], b: [f64; 2], radius: f64, quad_segments: usize) -> Result<Polygon> {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let heading = if dx == 0.0 && dy == 0.0 {
        0.0
    } else {
        dy.atan2(dx)
    };

    let half_turn = 2 * quad_segments;
    let step = PI / half_turn as f64;
    let mut ring = Vec::with_capacity(2 * (half_turn + 1));

    // Cap around `b`, from the right-hand side of the segment to the left.
    for k in 0..=half_turn {
        let t = heading - FRAC_PI_2 + k as f64 * step;
        ring.push([b[0] + radius * t.cos(), b[1] + radius * t.sin()]);
    }
    // Cap around `a`, continuing counter-clockwise.
    for k in 0..=half_turn {
        let t = heading + FRAC_PI_2 + k as f64 * step;
        ring.push([a[0] + radius * t.cos(), a[1] + radius * t.sin()]);
    }

    Polygon::new(ring, vec![])
}
