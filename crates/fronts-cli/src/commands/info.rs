use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fronts_core::io::scene::load_scene;

#[derive(Args)]
pub struct InfoArgs {
    /// Scene file (JSON)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let scene = load_scene(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let sst = &scene.sst;
    let (lon_min, lat_min, lon_max, lat_max) = sst.extent();

    println!("File:          {}", args.file.display());
    println!("Grid:          {} lat x {} lon", sst.nrows(), sst.ncols());
    println!("Latitude:      {:.4} .. {:.4}", lat_min, lat_max);
    println!("Longitude:     {:.4} .. {:.4}", lon_min, lon_max);
    match sst.crs() {
        Some(crs) => println!("CRS:           {}", crs),
        None => println!("CRS:           unset (WGS84 assumed)"),
    }
    if let Some(time) = sst.time() {
        println!("Time:          {}", time.to_rfc3339());
    }
    println!("Unit:          {}", scene.unit);
    println!(
        "Valid cells:   {} / {}",
        sst.count_valid(),
        sst.values().len()
    );
    println!(
        "AOI:           {} polygon(s), {}",
        scene.aoi.len(),
        scene.aoi.crs
    );
    println!(
        "Coast buffer:  {} polygon(s), {}",
        scene.coast_buffer.len(),
        scene.coast_buffer.crs
    );

    Ok(())
}
