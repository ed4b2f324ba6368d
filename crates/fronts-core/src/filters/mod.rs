pub mod gaussian_blur;
pub mod quantize;
