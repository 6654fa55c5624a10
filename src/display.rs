//! # Display-space distance compression
//!
//! Outer planets sit ~80 times further from the sun than Mercury, so true AU
//! positions cannot show the whole system on one screen. [`compress_distance`]
//! keeps the direction of a position and replaces its length by
//!
//! ```text
//! d' = log10(d + 1) · factor + padding
//! ```
//!
//! where `padding` keeps every body outside the rendered sun. This is a
//! presentation transform layered on top of the physical positions; nothing in
//! the ephemeris pipeline depends on it.

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Position3D};

/// Parameters of the logarithmic radial scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayScale {
    /// Multiplier of `log10(d + 1)`
    pub factor: f64,
    /// Constant offset added to every compressed distance
    pub padding: f64,
}

impl Default for DisplayScale {
    fn default() -> Self {
        DisplayScale {
            factor: 50.0,
            padding: 10.0,
        }
    }
}

impl DisplayScale {
    /// Compressed length for a true distance `d` (AU).
    pub fn compressed(&self, distance: AstronomicalUnit) -> f64 {
        (distance + 1.0).log10() * self.factor + self.padding
    }
}

/// Scale a heliocentric position for display.
///
/// The distance is the full 3D norm `√(x² + y² + z²)`. The sun itself
/// (zero vector) is returned unchanged.
pub fn compress_distance(position: &Position3D, scale: &DisplayScale) -> Position3D {
    let distance = position.norm();
    if distance == 0.0 {
        return *position;
    }
    position * (scale.compressed(distance) / distance)
}
