//! shapez - shape code parser and renderer
//!
//! Parses shape codes such as `R(f00)C(0f0)--W(u):S(fff)` into layered
//! shapes and draws them onto any [`render::DrawingSurface`], including a
//! PNG-backed raster surface.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use config::Config;
pub use error::{Result, ShapeFormatError, ShapezError};
pub use generate::random_code;
pub use parser::{parse, parse_code_list, CodeEntry};
pub use render::{rasterize, render, write_png, DrawingSurface, RasterSurface, RecordingSurface};
pub use types::{Colour, Layer, Quadrant, Shape, ShortColor, SubShapeKind};
pub use validation::{validate_code, Diagnostic, Severity, ValidationResult};
