//! Shape renderer - lays out layers and quadrants on a drawing surface.
//!
//! All geometry is computed in a logical square of `LOGICAL_EXTENT` units
//! centred on the origin, so the output only depends on the surface size
//! through the initial scale.

use std::f32::consts::{FRAC_PI_2, TAU};

use log::{debug, warn};

use crate::types::{Colour, Quadrant, Shape, SubShapeKind};

use super::DrawingSurface;

/// Width and height of the logical drawing area.
pub const LOGICAL_EXTENT: f32 = 23.0;

/// Edge length of one quadrant of the outermost layer at scale 1.
pub const QUADRANT_SIZE: f32 = 10.0;

const QUADRANT_HALF_SIZE: f32 = QUADRANT_SIZE / 2.0;

/// Backdrop disc radius relative to the quadrant size.
const BACKDROP_SCALE: f32 = 1.15;

/// Below this radius a circle is drawn as a single unit square.
const MIN_CIRCLE_RADIUS: f32 = 0.05;

/// Scale of layer 0.
const OUTER_LAYER_SCALE: f32 = 0.9;

/// Scale lost per layer for shapes with up to four layers.
const LAYER_STEP: f32 = 0.22;

/// Smallest scale any layer is drawn at.
pub const MIN_LAYER_SCALE: f32 = 0.1;

/// Depth of the notch cut into stars and windmills.
const NOTCH: f32 = 0.4;

const OUTLINE_WIDTH: f32 = 1.0;

/// Direction of each quadrant from the centre: top-right, bottom-right,
/// bottom-left, top-left.
pub const QUADRANT_OFFSETS: [(f32, f32); 4] = [(1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)];

/// Scale of layer `index` in a shape with `layer_count` layers.
///
/// Shapes with more than four layers shrink by a smaller step so the inner
/// layers stay visible.
pub fn layer_scale(index: usize, layer_count: usize) -> f32 {
    let mut step = LAYER_STEP;
    if layer_count > 4 {
        step -= step * (layer_count - 4) as f32 / (layer_count - 1) as f32;
    }
    (OUTER_LAYER_SCALE - index as f32 * step).max(MIN_LAYER_SCALE)
}

/// Render a shape onto a surface.
///
/// The surface is expected to be cleared and sized by the caller. Its
/// transform is left as it was found.
pub fn render<S: DrawingSurface + ?Sized>(shape: &Shape, surface: &mut S) {
    let (width, height) = surface.size();
    debug!(
        "rendering {} layer(s) at {}x{}",
        shape.layer_count(),
        width,
        height
    );

    surface.save();
    surface.translate(width / 2.0, height / 2.0);
    surface.scale(width / LOGICAL_EXTENT, height / LOGICAL_EXTENT);

    begin_circle(surface, 0.0, 0.0, QUADRANT_SIZE * BACKDROP_SCALE);
    surface.fill(Colour::BACKDROP);

    let layer_count = shape.layer_count();
    for (index, layer) in shape.layers().iter().enumerate() {
        let dims = QUADRANT_SIZE * layer_scale(index, layer_count);
        for (position, quadrant) in layer.filled() {
            draw_quadrant(surface, position, quadrant, dims);
        }
    }

    surface.restore();
}

fn begin_circle<S: DrawingSurface + ?Sized>(surface: &mut S, x: f32, y: f32, radius: f32) {
    surface.begin_path();
    if radius < MIN_CIRCLE_RADIUS {
        surface.rect(x, y, 1.0, 1.0);
        return;
    }
    surface.arc(x, y, radius, 0.0, TAU);
}

fn draw_quadrant<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    position: usize,
    quadrant: &Quadrant,
    dims: f32,
) {
    let (dx, dy) = QUADRANT_OFFSETS[position];

    surface.save();
    surface.translate(dx * QUADRANT_HALF_SIZE, dy * QUADRANT_HALF_SIZE);
    surface.rotate((position as f32 * 90.0).to_radians());

    trace_sub_shape(surface, quadrant.kind, dims);
    surface.fill(resolve_colour(&quadrant.color));
    surface.stroke(Colour::OUTLINE, OUTLINE_WIDTH);

    surface.restore();
}

/// Build the outline of a sub-shape of size `dims`, anchored at the inner
/// (bottom-left) corner of the rotated quadrant.
fn trace_sub_shape<S: DrawingSurface + ?Sized>(surface: &mut S, kind: SubShapeKind, dims: f32) {
    let origin_x = -QUADRANT_HALF_SIZE;
    let origin_y = QUADRANT_HALF_SIZE - dims;
    let notch = dims * NOTCH;

    surface.begin_path();
    match kind {
        SubShapeKind::Rect => surface.rect(origin_x, origin_y, dims, dims),
        SubShapeKind::Star => {
            surface.move_to(origin_x, origin_y + notch);
            surface.line_to(origin_x + dims, origin_y);
            surface.line_to(origin_x + dims - notch, origin_y + dims);
            surface.line_to(origin_x, origin_y + dims);
            surface.close_path();
        }
        SubShapeKind::Windmill => {
            surface.move_to(origin_x, origin_y + notch);
            surface.line_to(origin_x + dims, origin_y);
            surface.line_to(origin_x + dims, origin_y + dims);
            surface.line_to(origin_x, origin_y + dims);
            surface.close_path();
        }
        SubShapeKind::Circle => {
            surface.move_to(-QUADRANT_HALF_SIZE, QUADRANT_HALF_SIZE);
            surface.arc(-QUADRANT_HALF_SIZE, QUADRANT_HALF_SIZE, dims, -FRAC_PI_2, 0.0);
            surface.close_path();
        }
    }
}

/// Hex colours are not validated by the parser; unreadable ones are drawn
/// in magenta.
fn resolve_colour(hex: &str) -> Colour {
    Colour::from_hex(hex).unwrap_or_else(|_| {
        warn!("cannot paint colour '{}', using magenta", hex);
        Colour::MAGENTA
    })
}
