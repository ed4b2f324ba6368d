use crate::raster::GriddedRaster;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Preparing,
    Gradient,
    Masking,
    Classifying,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preparing => write!(f, "Preparing SST grid"),
            Self::Gradient => write!(f, "Computing gradient"),
            Self::Masking => write!(f, "Masking edges"),
            Self::Classifying => write!(f, "Classifying fronts"),
        }
    }
}

/// Result of a front detection run.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Gradient magnitude after coastline and AOI-edge masking.
    pub magnitude: GriddedRaster,
    /// Binary front raster: 1 for fronts, no-data elsewhere.
    pub fronts: GriddedRaster,
}

impl PipelineOutput {
    pub fn front_count(&self) -> usize {
        self.fronts.count_valid()
    }

    /// Fraction of cells flagged as fronts.
    pub fn front_fraction(&self) -> f64 {
        let total = self.fronts.values().len();
        if total == 0 {
            return 0.0;
        }
        self.front_count() as f64 / total as f64
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items
    /// in this stage (e.g. mask sets), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `compute_fronts` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
