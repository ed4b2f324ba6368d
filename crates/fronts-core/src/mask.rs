use std::borrow::Cow;

use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::NODATA;
use crate::error::Result;
use crate::geometry::MaskSet;
use crate::raster::GriddedRaster;

/// Which side of a mask set survives a clip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipMode {
    /// Inverted clip: cells inside the mask become no-data.
    #[default]
    Exclude,
    /// Regular clip: cells outside the mask become no-data.
    Include,
}

impl std::fmt::Display for ClipMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exclude => write!(f, "Exclude"),
            Self::Include => write!(f, "Include"),
        }
    }
}

/// Clip `raster` against `mask`, cropping to the surviving cells.
///
/// A cell is inside the mask when its centre (lon, lat) lies in any polygon.
/// Cells on the dropped side become no-data, then the raster is cropped to
/// the index bounding box of the kept side. When nothing is kept the full
/// extent is returned with every cell no-data.
///
/// The mask is reprojected into the raster CRS when the two differ; the
/// raster must carry a CRS.
pub fn clip(raster: &GriddedRaster, mask: &MaskSet, mode: ClipMode) -> Result<GriddedRaster> {
    let crs = raster.require_crs()?;
    let mask = if mask.crs == crs {
        Cow::Borrowed(mask)
    } else {
        Cow::Owned(mask.to_crs(crs)?)
    };

    let inside = inside_mask(raster, &mask);
    let keep = match mode {
        ClipMode::Exclude => inside.mapv(|v| !v),
        ClipMode::Include => inside,
    };

    let mut values = raster.values().clone();
    Zip::from(&mut values).and(&keep).for_each(|v, &k| {
        if !k {
            *v = NODATA;
        }
    });
    let masked = raster.with_values(values)?;

    match kept_window(&keep) {
        Some((rows, cols)) => {
            debug!(
                %mode,
                polygons = mask.len(),
                rows = rows.len(),
                cols = cols.len(),
                "Clip applied"
            );
            Ok(masked.crop(rows, cols))
        }
        None => {
            warn!(%mode, polygons = mask.len(), "Clip removed every cell");
            Ok(masked)
        }
    }
}

/// Apply each mask set in order as an inverted clip.
pub fn mask_exclusions<'a>(
    raster: &GriddedRaster,
    masks: impl IntoIterator<Item = &'a MaskSet>,
) -> Result<GriddedRaster> {
    mask_exclusions_with_progress(raster, masks, |_| {})
}

/// Like [`mask_exclusions`], calling `on_progress(masks_done)` after each clip.
pub fn mask_exclusions_with_progress<'a>(
    raster: &GriddedRaster,
    masks: impl IntoIterator<Item = &'a MaskSet>,
    mut on_progress: impl FnMut(usize),
) -> Result<GriddedRaster> {
    let mut current = Cow::Borrowed(raster);
    for (i, mask) in masks.into_iter().enumerate() {
        current = Cow::Owned(clip(&current, mask, ClipMode::Exclude)?);
        on_progress(i + 1);
    }
    Ok(current.into_owned())
}

/// Per-cell flag: does the cell centre fall inside any polygon of `mask`?
fn inside_mask(raster: &GriddedRaster, mask: &MaskSet) -> Array2<bool> {
    let lat = raster.lat();
    let lon = raster.lon();

    let Some(bbox) = mask.bbox() else {
        return Array2::from_elem(raster.dim(), false);
    };

    Array2::from_shape_fn(raster.dim(), |(row, col)| {
        let (x, y) = (lon[col], lat[row]);
        bbox.contains_point(x, y) && mask.contains(x, y)
    })
}

/// Row and column index ranges enclosing every `true` cell.
fn kept_window(keep: &Array2<bool>) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
    let mut rows: Option<(usize, usize)> = None;
    let mut cols: Option<(usize, usize)> = None;

    for ((row, col), &k) in keep.indexed_iter() {
        if !k {
            continue;
        }
        rows = Some(rows.map_or((row, row), |(lo, hi)| (lo.min(row), hi.max(row))));
        cols = Some(cols.map_or((col, col), |(lo, hi)| (lo.min(col), hi.max(col))));
    }

    let (r0, r1) = rows?;
    let (c0, c1) = cols?;
    Some((r0..r1 + 1, c0..c1 + 1))
}
