use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use fronts_core::io::scene::load_scene;
use fronts_core::pipeline::config::{GradientScaling, PipelineConfig, Quantization};
use fronts_core::pipeline::{run_scene_reported, PipelineOutput, PipelineStage, ProgressReporter};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::summary::{print_config_summary, print_scene_summary};

#[derive(Args)]
pub struct DetectArgs {
    /// Scene files (JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run blur and Sobel on floating-point values instead of 8-bit intensities
    #[arg(long)]
    pub float: bool,

    /// Normalize Sobel components by kernel weight instead of their own maximum
    #[arg(long)]
    pub kernel_weight: bool,

    /// AOI edge buffer in kilometres
    #[arg(long)]
    pub edge_buffer_km: Option<f64>,
}

/// Drives one spinner per scene.
struct SpinnerReporter {
    bar: ProgressBar,
}

impl ProgressReporter for SpinnerReporter {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.bar.set_message(stage.to_string());
    }

    fn advance(&self, _items_done: usize) {
        self.bar.tick();
    }
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = build_config(args)?;
    print_config_summary(&config);

    let multi = MultiProgress::new();
    let style = ProgressStyle::default_spinner().template("{spinner} {prefix:24} {msg}")?;

    let results: Vec<(PathBuf, Result<PipelineOutput>)> = args
        .files
        .par_iter()
        .map(|path| {
            let bar = multi.add(ProgressBar::new_spinner());
            bar.set_style(style.clone());
            bar.set_prefix(file_label(path));
            bar.enable_steady_tick(Duration::from_millis(100));

            let reporter = Arc::new(SpinnerReporter { bar: bar.clone() });
            let result = detect_one(path, &config, reporter);
            bar.finish_with_message(if result.is_ok() { "done" } else { "failed" });
            (path.clone(), result)
        })
        .collect();

    let mut failures = 0usize;
    for (path, result) in &results {
        match result {
            Ok(output) => print_scene_summary(path, output),
            Err(e) => {
                failures += 1;
                eprintln!("{}: {:#}", path.display(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} scene(s) failed", results.len());
    }
    Ok(())
}

fn detect_one(
    path: &Path,
    config: &PipelineConfig,
    reporter: Arc<SpinnerReporter>,
) -> Result<PipelineOutput> {
    let scene =
        load_scene(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let output = run_scene_reported(&scene, config, reporter)
        .with_context(|| format!("Front detection failed for {}", path.display()))?;
    Ok(output)
}

fn build_config(args: &DetectArgs) -> Result<PipelineConfig> {
    let mut config: PipelineConfig = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        PipelineConfig::default()
    };

    if args.float {
        config.quantization = Quantization::Float;
    }
    if args.kernel_weight {
        config.scaling = GradientScaling::KernelWeight;
    }
    if let Some(km) = args.edge_buffer_km {
        config.aoi_edge.buffer_m = km * 1000.0;
    }

    config.validate().context("Invalid pipeline config")?;
    Ok(config)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
