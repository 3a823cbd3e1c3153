//! Layer parser: shorthand expansion and validation.

use crate::error::ShapeFormatError;
use crate::types::{Layer, Quadrant, ShortColor, SubShapeKind, EMPTY_MARKER, QUADRANT_COUNT};

use super::token::RawLayer;

/// Expanded text of a layer with nothing in it.
const EMPTY_LAYER: &str = "--------";

/// Parse a single layer token into a `Layer`.
///
/// One-entry layers (`C(u)`) fill all four quadrants, two-entry layers
/// (`R(f00)--`) repeat onto the opposite pair.
pub(crate) fn parse_layer(text: &str) -> Result<Layer, ShapeFormatError> {
    let raw = RawLayer::tokenize(text);
    let skeleton = raw.skeleton();

    let (raw, skeleton) = match skeleton.chars().count() {
        1 => (raw.repeat(4), skeleton.repeat(4)),
        2 => (raw.repeat(2), skeleton.repeat(2)),
        QUADRANT_COUNT => (raw, skeleton),
        _ => return Err(ShapeFormatError::new("Shapez must have 4 corners")),
    };

    if raw.text() == EMPTY_LAYER {
        return Err(ShapeFormatError::new("Empty layers are not allowed"));
    }

    if raw.marker_count() % 2 != 0 {
        return Err(invalid_shape(&raw));
    }

    let mut kinds: [Option<SubShapeKind>; QUADRANT_COUNT] = [None; QUADRANT_COUNT];
    for (slot, code) in kinds.iter_mut().zip(skeleton.chars()) {
        if code == EMPTY_MARKER {
            continue;
        }
        let kind = SubShapeKind::from_code(code)
            .ok_or_else(|| ShapeFormatError::new(format!("Invalid shape key: {}", code)))?;
        *slot = Some(kind);
    }

    let colors: Vec<&str> = raw.colors().collect();
    let empty = kinds.iter().filter(|kind| kind.is_none()).count();

    // Each empty quadrant must have been written as a `--` pair.
    if raw.empty_pairs() != empty {
        return Err(invalid_shape(&raw));
    }

    if colors.len() + empty != QUADRANT_COUNT {
        return Err(ShapeFormatError::new(format!(
            "Invalid color count: {}",
            colors.len() + empty
        )));
    }

    let colors = colors
        .into_iter()
        .map(resolve_color)
        .collect::<Result<Vec<_>, _>>()?;
    let mut colors = colors.into_iter();

    let quadrants = kinds.map(|kind| {
        kind.and_then(|kind| colors.next().map(|color| Quadrant::new(kind, color)))
    });

    Layer::new(quadrants)
}

/// Resolve a colour token: aliases expand, 3 and 6 digit values pass through.
fn resolve_color(token: &str) -> Result<String, ShapeFormatError> {
    let mut chars = token.chars();
    match (chars.next(), token.chars().count()) {
        (_, 3 | 6) => Ok(token.to_string()),
        (Some(alias), 1) => ShortColor::from_alias(alias)
            .map(|short| short.hex().to_string())
            .ok_or_else(|| invalid_color(token)),
        _ => Err(invalid_color(token)),
    }
}

fn invalid_shape(raw: &RawLayer) -> ShapeFormatError {
    ShapeFormatError::new(format!("Invalid shape: {}", raw.text()))
}

fn invalid_color(token: &str) -> ShapeFormatError {
    ShapeFormatError::new(format!("Invalid color: {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> String {
        parse_layer(text).unwrap_err().message
    }

    #[test]
    fn test_full_layer() {
        let layer = parse_layer("R(ff666a)C(fff)--W(000)").unwrap();

        assert_eq!(layer.get(0), Some(&Quadrant::new(SubShapeKind::Rect, "ff666a")));
        assert_eq!(layer.get(1), Some(&Quadrant::new(SubShapeKind::Circle, "fff")));
        assert_eq!(layer.get(2), None);
        assert_eq!(layer.get(3), Some(&Quadrant::new(SubShapeKind::Windmill, "000")));
    }

    #[test]
    fn test_single_entry_fills_all_quadrants() {
        let layer = parse_layer("C(r)").unwrap();
        for index in 0..4 {
            assert_eq!(layer.get(index), Some(&Quadrant::new(SubShapeKind::Circle, "ff666a")));
        }
    }

    #[test]
    fn test_two_entries_repeat_onto_opposite_pair() {
        let layer = parse_layer("S(b)--").unwrap();
        assert_eq!(layer.get(0), Some(&Quadrant::new(SubShapeKind::Star, "66a7ff")));
        assert_eq!(layer.get(1), None);
        assert_eq!(layer.get(2), layer.get(0));
        assert_eq!(layer.get(3), None);
    }

    #[test]
    fn test_detached_colours() {
        let layer = parse_layer("RCSW(f00)(0f0)(00f)(fff)").unwrap();
        let kinds: Vec<_> = layer.filled().map(|(_, q)| q.kind).collect();
        let colors: Vec<_> = layer.filled().map(|(_, q)| q.color.as_str()).collect();

        assert_eq!(kinds, SubShapeKind::ALL.to_vec());
        assert_eq!(colors, vec!["f00", "0f0", "00f", "fff"]);
    }

    #[test]
    fn test_trailing_empty_run() {
        let layer = parse_layer("R(r)------").unwrap();
        assert_eq!(layer.empty_count(), 3);
        assert_eq!(layer.get(0).map(|q| q.kind), Some(SubShapeKind::Rect));
    }

    #[test]
    fn test_empty_layer_rejected() {
        assert_eq!(message("--------"), "Empty layers are not allowed");
        assert_eq!(message("----"), "Empty layers are not allowed");
        assert_eq!(message("--"), "Empty layers are not allowed");
    }

    #[test]
    fn test_wrong_corner_count() {
        assert_eq!(message("R(r)C(r)S(r)"), "Shapez must have 4 corners");
        assert_eq!(message("RRRRR"), "Shapez must have 4 corners");
        assert_eq!(message(""), "Shapez must have 4 corners");
        assert_eq!(message("Rr(fff)------"), "Shapez must have 4 corners");
    }

    #[test]
    fn test_odd_marker_count() {
        assert_eq!(message("R(r)-C(r)S(r)"), "Invalid shape: R(r)-C(r)S(r)");
    }

    #[test]
    fn test_unknown_shape_key() {
        assert_eq!(message("RcSW(f00)(0f0)(00f)(fff)"), "Invalid shape key: c");
        assert_eq!(message("X(r)"), "Invalid shape key: X");
    }

    #[test]
    fn test_unpaired_empty_markers() {
        // Two single markers split by a colour never form a `--` pair.
        assert_eq!(message("R-(r)-C(r)S(r)"), "Invalid shape: R-(r)-C(r)S(r)");
    }

    #[test]
    fn test_dashes_inside_colour_are_colour_text() {
        // `(--)` is a colour token, not two empty markers.
        assert_eq!(message("R(--)"), "Invalid color: --");
        assert_eq!(message("R(r)--R(--)--"), "Invalid color: --");
    }

    #[test]
    fn test_color_count_mismatch() {
        assert_eq!(message("RRRR(f)"), "Invalid color count: 1");
        assert_eq!(message("R(r)R(r)R(r)R(r)(g)"), "Invalid color count: 5");
        assert_eq!(message("R--R--(r)(r)(r)"), "Invalid color count: 5");
    }

    #[test]
    fn test_invalid_colors() {
        assert_eq!(message("R(x)"), "Invalid color: x");
        assert_eq!(message("R(ffff)"), "Invalid color: ffff");
        assert_eq!(message("R()"), "Invalid color: ");
    }

    #[test]
    fn test_hex_is_not_validated() {
        let layer = parse_layer("R(zzz)").unwrap();
        assert_eq!(layer.get(0).map(|q| q.color.as_str()), Some("zzz"));
    }
}
