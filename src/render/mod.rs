//! Rendering module for shapez.
//!
//! The renderer lays a `Shape` out onto any `DrawingSurface`. Two surfaces
//! ship with the crate: `RasterSurface` paints pixels, `RecordingSurface`
//! keeps the list of calls.

mod png;
mod raster;
mod recorder;
mod shape;
mod surface;

pub use png::{to_rgba_image, write_png};
pub use raster::{RasterSurface, MAX_CANVAS_SIZE};
pub use recorder::{DrawCommand, RecordingSurface};
pub use shape::{layer_scale, render, LOGICAL_EXTENT, MIN_LAYER_SCALE, QUADRANT_OFFSETS, QUADRANT_SIZE};
pub use surface::DrawingSurface;

use crate::error::Result;
use crate::types::Shape;

/// Render a shape onto a fresh square raster of `size` pixels.
pub fn rasterize(shape: &Shape, size: u32) -> Result<RasterSurface> {
    let mut surface = RasterSurface::new(size, size)?;
    render(shape, &mut surface);
    Ok(surface)
}
