//! Shape types: sub-shape kinds, quadrants, layers and whole shapes.
//!
//! A shape is a stack of layers. Each layer has four quadrants, numbered
//! clockwise from the top-right corner, and each quadrant is either empty
//! or holds a coloured sub-shape.
//!
//! # Example
//!
//! ```text
//! R(u)C(w)--C(w):----R(u)--
//! ```
//!
//! is a two-layer shape. `Display` writes the fully expanded form, so the
//! first layer above comes back as `R(aaa)C(fff)--C(fff)`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ShapeFormatError;

/// Number of quadrants in every layer.
pub const QUADRANT_COUNT: usize = 4;

/// The marker written for an empty quadrant (and its colour).
pub const EMPTY_MARKER: char = '-';

/// The kind of sub-shape drawn in a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubShapeKind {
    Rect,
    Circle,
    Star,
    Windmill,
}

impl SubShapeKind {
    pub const ALL: [SubShapeKind; 4] = [
        SubShapeKind::Rect,
        SubShapeKind::Circle,
        SubShapeKind::Star,
        SubShapeKind::Windmill,
    ];

    /// The single-letter code used in shape codes.
    pub const fn code(self) -> char {
        match self {
            SubShapeKind::Rect => 'R',
            SubShapeKind::Circle => 'C',
            SubShapeKind::Star => 'S',
            SubShapeKind::Windmill => 'W',
        }
    }

    /// Look up a kind by its code letter. Codes are case-sensitive.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for SubShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubShapeKind::Rect => "rect",
            SubShapeKind::Circle => "circle",
            SubShapeKind::Star => "star",
            SubShapeKind::Windmill => "windmill",
        };
        f.write_str(name)
    }
}

/// A filled quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Quadrant {
    pub kind: SubShapeKind,

    /// Hex colour without a leading `#`. Aliases are already resolved.
    pub color: String,
}

impl Quadrant {
    pub fn new(kind: SubShapeKind, color: impl Into<String>) -> Self {
        Self {
            kind,
            color: color.into(),
        }
    }
}

/// One ring of four quadrants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Layer {
    quadrants: [Option<Quadrant>; QUADRANT_COUNT],
}

impl Layer {
    /// Create a layer. At least one quadrant must be filled.
    pub fn new(
        quadrants: [Option<Quadrant>; QUADRANT_COUNT],
    ) -> Result<Self, ShapeFormatError> {
        if quadrants.iter().all(Option::is_none) {
            return Err(ShapeFormatError::new("Empty layers are not allowed"));
        }
        Ok(Self { quadrants })
    }

    /// Get the quadrant at `index` (0 = top-right, clockwise).
    pub fn get(&self, index: usize) -> Option<&Quadrant> {
        self.quadrants.get(index).and_then(Option::as_ref)
    }

    pub fn quadrants(&self) -> &[Option<Quadrant>; QUADRANT_COUNT] {
        &self.quadrants
    }

    /// Iterate over the filled quadrants with their positions.
    pub fn filled(&self) -> impl Iterator<Item = (usize, &Quadrant)> {
        self.quadrants
            .iter()
            .enumerate()
            .filter_map(|(index, quadrant)| quadrant.as_ref().map(|q| (index, q)))
    }

    pub fn empty_count(&self) -> usize {
        self.quadrants.iter().filter(|q| q.is_none()).count()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quadrant in &self.quadrants {
            match quadrant {
                Some(q) => write!(f, "{}({})", q.kind.code(), q.color)?,
                None => write!(f, "{0}{0}", EMPTY_MARKER)?,
            }
        }
        Ok(())
    }
}

/// A parsed shape: one or more layers, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    layers: Vec<Layer>,
}

impl Shape {
    /// Create a shape from its layers. At least one layer is required.
    pub fn new(layers: Vec<Layer>) -> Result<Self, ShapeFormatError> {
        if layers.is_empty() {
            return Err(ShapeFormatError::new("Shapes need at least one layer"));
        }
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, layer) in self.layers.iter().enumerate() {
            if index > 0 {
                f.write_str(":")?;
            }
            write!(f, "{}", layer)?;
        }
        Ok(())
    }
}

impl FromStr for Shape {
    type Err = ShapeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(color: &str) -> Option<Quadrant> {
        Some(Quadrant::new(SubShapeKind::Rect, color))
    }

    #[test]
    fn test_kind_codes_are_consistent() {
        for kind in SubShapeKind::ALL {
            assert_eq!(SubShapeKind::from_code(kind.code()), Some(kind));
        }
        for code in ['R', 'C', 'S', 'W'] {
            assert_eq!(SubShapeKind::from_code(code).map(SubShapeKind::code), Some(code));
        }
        assert_eq!(SubShapeKind::from_code('r'), None);
        assert_eq!(SubShapeKind::from_code('-'), None);
    }

    #[test]
    fn test_layer_rejects_all_empty() {
        let err = Layer::new([None, None, None, None]).unwrap_err();
        assert_eq!(err.message, "Empty layers are not allowed");
    }

    #[test]
    fn test_layer_accessors() {
        let layer = Layer::new([rect("fff"), None, rect("000"), None]).unwrap();

        assert_eq!(layer.get(0).map(|q| q.color.as_str()), Some("fff"));
        assert_eq!(layer.get(1), None);
        assert_eq!(layer.get(7), None);
        assert_eq!(layer.empty_count(), 2);

        let positions: Vec<usize> = layer.filled().map(|(i, _)| i).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn test_shape_requires_layers() {
        assert!(Shape::new(vec![]).is_err());
    }

    #[test]
    fn test_display_expanded_form() {
        let outer = Layer::new([
            rect("ff666a"),
            Some(Quadrant::new(SubShapeKind::Circle, "fff")),
            None,
            Some(Quadrant::new(SubShapeKind::Windmill, "000")),
        ])
        .unwrap();
        let inner = Layer::new([None, Some(Quadrant::new(SubShapeKind::Star, "abc")), None, None])
            .unwrap();
        let shape = Shape::new(vec![outer, inner]).unwrap();

        assert_eq!(shape.to_string(), "R(ff666a)C(fff)--W(000):--S(abc)----");
    }

    #[test]
    fn test_serialize_json() {
        let layer = Layer::new([rect("fff"), None, None, None]).unwrap();
        let shape = Shape::new(vec![layer]).unwrap();

        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "layers": [[{ "kind": "rect", "color": "fff" }, null, null, null]]
            })
        );
    }
}
