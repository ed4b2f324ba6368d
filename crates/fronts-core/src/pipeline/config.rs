use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_AOI_EDGE_BUFFER_M, DEFAULT_BUFFER_QUAD_SEGMENTS};
use crate::error::{FrontsError, Result};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub quantization: Quantization,
    #[serde(default)]
    pub scaling: GradientScaling,
    #[serde(default)]
    pub aoi_edge: AoiEdgeConfig,
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        self.aoi_edge.validate()
    }
}

/// How temperatures are prepared for the edge filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantization {
    /// Truncate to 8-bit intensities before blurring (lossy).
    #[default]
    Uint8,
    /// Blur and differentiate the floating-point values directly.
    Float,
}

impl std::fmt::Display for Quantization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uint8 => write!(f, "8-bit"),
            Self::Float => write!(f, "Float"),
        }
    }
}

/// Normalization applied to each Sobel component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientScaling {
    /// Divide by 255, then multiply by the component's own largest
    /// absolute value. Sensitive to outliers.
    #[default]
    ArrayMaximum,
    /// Divide by the Sobel weight sum (8). With `Float` quantization this
    /// is the temperature change per cell.
    KernelWeight,
}

impl std::fmt::Display for GradientScaling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArrayMaximum => write!(f, "Array Maximum"),
            Self::KernelWeight => write!(f, "Kernel Weight"),
        }
    }
}

/// Exclusion band along the AOI boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AoiEdgeConfig {
    /// Buffer distance in metres, measured in EPSG:3035.
    #[serde(default = "default_buffer_m")]
    pub buffer_m: f64,
    /// Segments per quarter circle for the buffer's round caps.
    #[serde(default = "default_quad_segments")]
    pub quad_segments: usize,
}

fn default_buffer_m() -> f64 {
    DEFAULT_AOI_EDGE_BUFFER_M
}
fn default_quad_segments() -> usize {
    DEFAULT_BUFFER_QUAD_SEGMENTS
}

impl Default for AoiEdgeConfig {
    fn default() -> Self {
        Self {
            buffer_m: DEFAULT_AOI_EDGE_BUFFER_M,
            quad_segments: DEFAULT_BUFFER_QUAD_SEGMENTS,
        }
    }
}

impl AoiEdgeConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.buffer_m.is_finite() && self.buffer_m > 0.0) {
            return Err(FrontsError::InvalidConfig(format!(
                "aoi_edge.buffer_m must be a positive distance, got {}",
                self.buffer_m
            )));
        }
        if self.quad_segments == 0 {
            return Err(FrontsError::InvalidConfig(
                "aoi_edge.quad_segments must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
