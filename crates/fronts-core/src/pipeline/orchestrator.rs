use std::sync::Arc;

use tracing::info;

use crate::classify::classify_fronts;
use crate::error::Result;
use crate::geometry::{boundary_buffer, MaskSet};
use crate::gradient::sobel_gradient;
use crate::input::prepare_sst;
use crate::io::scene::Scene;
use crate::mask::mask_exclusions_with_progress;
use crate::raster::GriddedRaster;

use super::config::PipelineConfig;
use super::types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Detect fronts in a prepared (Celsius, AOI-clipped, WGS84) SST grid.
///
/// Gradient magnitude, then inverted clips against the coastline buffer and
/// the AOI-edge buffer (in that order), then thresholding.
pub fn compute_fronts(
    sst: &GriddedRaster,
    aoi: &MaskSet,
    coast_buffer: &MaskSet,
    config: &PipelineConfig,
) -> Result<PipelineOutput> {
    compute_fronts_reported(sst, aoi, coast_buffer, config, Arc::new(NoOpReporter))
}

/// [`compute_fronts`] with a thread-safe progress reporter.
pub fn compute_fronts_reported(
    sst: &GriddedRaster,
    aoi: &MaskSet,
    coast_buffer: &MaskSet,
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineOutput> {
    config.validate()?;
    let (rows, cols) = sst.dim();
    info!(
        rows,
        cols,
        aoi_polygons = aoi.len(),
        coast_polygons = coast_buffer.len(),
        "Computing SST fronts"
    );

    reporter.begin_stage(PipelineStage::Gradient, None);
    let magnitude = sobel_gradient(sst, config.quantization, config.scaling)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Masking, Some(2));
    let aoi_edges = boundary_buffer(aoi, config.aoi_edge.buffer_m, config.aoi_edge.quad_segments)?;
    let masked = mask_exclusions_with_progress(&magnitude, [coast_buffer, &aoi_edges], |done| {
        reporter.advance(done)
    })?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Classifying, None);
    let fronts = classify_fronts(&masked);
    reporter.finish_stage();

    let output = PipelineOutput {
        magnitude: masked,
        fronts,
    };
    info!(
        rows = output.fronts.nrows(),
        cols = output.fronts.ncols(),
        fronts = output.front_count(),
        "Front detection complete"
    );
    Ok(output)
}

/// Prepare a scene's SST grid and detect its fronts.
pub fn run_scene(scene: &Scene, config: &PipelineConfig) -> Result<PipelineOutput> {
    run_scene_reported(scene, config, Arc::new(NoOpReporter))
}

/// [`run_scene`] with a thread-safe progress reporter.
pub fn run_scene_reported(
    scene: &Scene,
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineOutput> {
    reporter.begin_stage(PipelineStage::Preparing, None);
    let sst = prepare_sst(&scene.sst, &scene.aoi, scene.unit)?;
    reporter.finish_stage();

    compute_fronts_reported(&sst, &scene.aoi, &scene.coast_buffer, config, reporter)
}
