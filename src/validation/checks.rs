//! Checks run against a successfully parsed shape.
//!
//! The grammar accepts some codes that still render poorly; these checks
//! report them as warnings.

use crate::types::{Colour, Shape};

use super::warning::{Diagnostic, ValidationResult};

/// Layers beyond this count are drawn with a compressed step.
const COMFORTABLE_LAYERS: usize = 4;

/// Warn about colours the parser passed through that are not valid hex.
pub fn check_colours(shape: &Shape) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (layer_index, layer) in shape.layers().iter().enumerate() {
        for (position, quadrant) in layer.filled() {
            if Colour::from_hex(&quadrant.color).is_err() {
                result.push(
                    Diagnostic::warning(
                        "shapez::check::colour",
                        format!(
                            "Colour '{}' in layer {}, quadrant {} is not valid hex",
                            quadrant.color,
                            layer_index + 1,
                            position + 1
                        ),
                    )
                    .with_help("It will be drawn in magenta"),
                );
            }
        }
    }

    result
}

/// Warn when a shape has so many layers that they are squeezed together.
pub fn check_layer_depth(shape: &Shape) -> ValidationResult {
    let mut result = ValidationResult::new();

    if shape.layer_count() > COMFORTABLE_LAYERS {
        result.push(Diagnostic::warning(
            "shapez::check::layers",
            format!(
                "Shape has {} layers; layers past {} are drawn closer together",
                shape.layer_count(),
                COMFORTABLE_LAYERS
            ),
        ));
    }

    result
}
