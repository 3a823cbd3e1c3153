//! Parser for shapez shape codes.
//!
//! A shape code is a `:`-separated list of layers, outermost first. Each
//! layer lists four quadrants clockwise from the top-right, each written as
//! a shape letter followed by a colour, or `--` when empty:
//!
//! ```text
//! R(ff666a)C(fff)--W(k):S(r)
//! ```
//!
//! Colours are 3 or 6 hex digits, or a single-letter alias (`r g b p c y u
//! w k`). A layer may be shortened to one entry (applied to all four
//! quadrants) or two entries (repeated onto the opposite pair).
//!
//! # Usage
//!
//! ```ignore
//! use shapez::parser::parse;
//!
//! let shape = parse("C(u):R(f00)--")?;
//! assert_eq!(shape.layer_count(), 2);
//! ```

mod layer;
mod list;
mod token;

use log::debug;

use crate::error::ShapeFormatError;
use crate::types::Shape;

pub use list::{parse_code_list, CodeEntry};
pub use token::{RawLayer, Token};

/// Separator between layers.
pub const LAYER_SEPARATOR: char = ':';

/// Parse a shape code.
///
/// Surrounding whitespace is ignored. Fails at the first layer that does
/// not follow the grammar.
pub fn parse(code: &str) -> Result<Shape, ShapeFormatError> {
    let layers = code
        .trim()
        .split(LAYER_SEPARATOR)
        .map(layer::parse_layer)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("parsed {} layer(s) from '{}'", layers.len(), code.trim());
    Shape::new(layers)
}
