pub mod classify;
pub mod consts;
pub mod crs;
pub mod error;
pub mod filters;
pub mod geometry;
pub mod gradient;
pub mod input;
pub mod io;
pub mod mask;
pub mod pipeline;
pub mod projection;
pub mod raster;
