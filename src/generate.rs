//! Random shape code generation.

use rand::Rng;

use crate::types::{SubShapeKind, EMPTY_MARKER};

/// Default upper bound on the number of layers in a random shape.
pub const DEFAULT_MAX_LAYERS: usize = 4;

/// Generate a random, valid shape code with 1 to `max_layers` layers.
///
/// Every layer is written in the fully expanded form. Each quadrant is
/// either empty or one of the four kinds with a random 6-digit colour;
/// layers that come out entirely empty are rolled again.
pub fn random_code<R: Rng + ?Sized>(rng: &mut R, max_layers: usize) -> String {
    let layer_count = rng.random_range(1..=max_layers.max(1));

    (0..layer_count)
        .map(|_| random_layer(rng))
        .collect::<Vec<_>>()
        .join(":")
}

fn random_layer<R: Rng + ?Sized>(rng: &mut R) -> String {
    loop {
        let mut layer = String::new();
        let mut filled = 0;

        for _ in 0..4 {
            // one extra slot for an empty quadrant
            let pick = rng.random_range(0..=SubShapeKind::ALL.len());
            match SubShapeKind::ALL.get(pick) {
                Some(kind) => {
                    let [r, g, b]: [u8; 3] = [
                        rng.random_range(0..255),
                        rng.random_range(0..255),
                        rng.random_range(0..255),
                    ];
                    layer.push_str(&format!("{}({:02x}{:02x}{:02x})", kind.code(), r, g, b));
                    filled += 1;
                }
                None => {
                    layer.push(EMPTY_MARKER);
                    layer.push(EMPTY_MARKER);
                }
            }
        }

        if filled > 0 {
            return layer;
        }
    }
}
