//! Core domain types for shapez.
//!
//! - `Colour` - RGBA colour values used when painting
//! - `ShortColor` - single-letter colour aliases of the shape grammar
//! - `Shape`, `Layer`, `Quadrant`, `SubShapeKind` - the parsed shape

mod colour;
mod shape;

pub use colour::{Colour, ShortColor};
pub use shape::{Layer, Quadrant, Shape, SubShapeKind, EMPTY_MARKER, QUADRANT_COUNT};
