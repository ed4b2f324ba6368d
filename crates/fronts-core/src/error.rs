use thiserror::Error;

use crate::crs::Crs;

#[derive(Error, Debug)]
pub enum FrontsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene file: {0}")]
    InvalidScene(#[from] serde_json::Error),

    #[error("Raster shape {rows}x{cols} does not match axes (lat: {lat_len}, lon: {lon_len})")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        lat_len: usize,
        lon_len: usize,
    },

    #[error("{axis} axis is not strictly monotonic at index {index}")]
    NonMonotonicAxis { axis: &'static str, index: usize },

    #[error("{0} axis is empty")]
    EmptyAxis(&'static str),

    #[error("Raster has no coordinate reference system")]
    MissingCrs,

    #[error("Unsupported CRS: {0}")]
    UnsupportedCrs(String),

    #[error("Expected a raster in {expected}, found {found}")]
    CrsMismatch { expected: Crs, found: Crs },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FrontsError>;
