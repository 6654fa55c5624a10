//! # Instantaneous orbital elements
//!
//! Evaluation of a body's mean elements at a given number of Julian centuries
//! since J2000.0, and the two angles derived from them:
//!
//! - argument of perihelion `ω = ϖ − Ω`
//! - mean anomaly `M = L − ϖ`, reduced to `[0°, 360°)`
//!
//! Angles are kept in **degrees** here, the unit of the ephemeris table. The
//! Kepler solver and the frame transform work in radians, see
//! [`InstantaneousElements::mean_anomaly_rad`].

use serde::{Deserialize, Serialize};

use crate::{
    constants::{AstronomicalUnit, Degree, JulianCentury, Radian, DEG_PER_TURN, RADEG},
    ephemeris::BodyElements,
};

/// The six mean elements at a specific instant, plus ω and M.
///
/// Units
/// -----
/// * `semi_major_axis`: AU
/// * `eccentricity`: unitless
/// * every other field: degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstantaneousElements {
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub mean_longitude: Degree,
    pub perihelion_longitude: Degree,
    pub ascending_node_longitude: Degree,
    /// ω = ϖ − Ω (not reduced)
    pub periapsis_argument: Degree,
    /// M = L − ϖ, in `[0, 360)`
    pub mean_anomaly: Degree,
}

impl InstantaneousElements {
    /// Mean anomaly converted to radians, in `[0, 2π)`.
    pub fn mean_anomaly_rad(&self) -> Radian {
        self.mean_anomaly * RADEG
    }
}

/// Evaluate the mean elements of a body at `t` Julian centuries from J2000.0.
///
/// Each element is `value + rate · t`. No error conditions: this is plain
/// arithmetic over finite inputs, and non-finite `t` simply propagates.
pub fn evaluate(elements: &BodyElements, t: JulianCentury) -> InstantaneousElements {
    let a = elements.a.at(t);
    let e = elements.e.at(t);
    let i = elements.i.at(t);
    let l = elements.l.at(t);
    let varpi = elements.varpi.at(t);
    let node = elements.omega_node.at(t);

    InstantaneousElements {
        semi_major_axis: a,
        eccentricity: e,
        inclination: i,
        mean_longitude: l,
        perihelion_longitude: varpi,
        ascending_node_longitude: node,
        periapsis_argument: varpi - node,
        mean_anomaly: normalize_degrees(l - varpi),
    }
}

/// Reduce an angle in degrees to `[0, 360)`.
///
/// Negative inputs wrap forward (`-10 → 350`). The result is congruent to
/// the input modulo 360.
pub fn normalize_degrees(angle: Degree) -> Degree {
    let reduced = ((angle % DEG_PER_TURN) + DEG_PER_TURN) % DEG_PER_TURN;
    // -1e-14 % 360 + 360 rounds to exactly 360
    if reduced >= DEG_PER_TURN {
        0.0
    } else {
        reduced
    }
}
