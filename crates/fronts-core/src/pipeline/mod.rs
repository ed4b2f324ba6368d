pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{compute_fronts, compute_fronts_reported, run_scene, run_scene_reported};
pub use types::{PipelineOutput, PipelineStage, ProgressReporter};
