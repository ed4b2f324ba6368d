use std::path::Path;

use console::Style;
use fronts_core::pipeline::config::PipelineConfig;
use fronts_core::pipeline::PipelineOutput;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("SST Fronts"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(10)));
    println!();

    println!("  {}", s.header.apply_to("Gradient"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Quantization"),
        s.method.apply_to(config.quantization)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Scaling"),
        s.method.apply_to(config.scaling)
    );
    println!();

    println!("  {}", s.header.apply_to("AOI Edge"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Buffer"),
        s.value.apply_to(format!("{:.1} km", config.aoi_edge.buffer_m / 1000.0))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Resolution"),
        s.value
            .apply_to(format!("{} seg/quarter", config.aoi_edge.quad_segments))
    );
    println!();
}

pub fn print_scene_summary(path: &Path, output: &PipelineOutput) {
    let s = Styles::new();
    let fronts = &output.fronts;

    println!("  {}", s.path.apply_to(path.display()));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Grid"),
        s.value
            .apply_to(format!("{} x {}", fronts.nrows(), fronts.ncols()))
    );

    let (lon_min, lat_min, lon_max, lat_max) = fronts.extent();
    println!(
        "    {:<14}{}",
        s.label.apply_to("Extent"),
        s.value.apply_to(format!(
            "lon {lon_min:.3}..{lon_max:.3}, lat {lat_min:.3}..{lat_max:.3}"
        ))
    );
    if let Some(time) = fronts.time() {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Time"),
            s.value.apply_to(time.to_rfc3339())
        );
    }

    if output.front_count() == 0 {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Fronts"),
            s.disabled.apply_to("none")
        );
    } else {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Fronts"),
            s.method.apply_to(format!(
                "{} cells ({:.1}%)",
                output.front_count(),
                output.front_fraction() * 100.0
            ))
        );
    }
    println!();
}
