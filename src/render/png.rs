//! PNG output for rendered shapes.

use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::error::{Result, ShapezError};
use crate::types::Colour;

use super::RasterSurface;

/// Copy a surface into an `RgbaImage` with straight alpha.
pub fn to_rgba_image(surface: &RasterSurface) -> RgbaImage {
    ImageBuffer::from_fn(surface.width(), surface.height(), |x, y| {
        Rgba(surface.pixel(x, y).unwrap_or(Colour::TRANSPARENT).to_rgba())
    })
}

/// Write a surface to a PNG file, whatever the file extension.
pub fn write_png(surface: &RasterSurface, path: &Path) -> Result<()> {
    to_rgba_image(surface)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ShapezError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
