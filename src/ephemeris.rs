//! # Planetary ephemeris table
//!
//! Mean Keplerian elements of the eight planets, each expressed as a value at
//! J2000.0 plus a linear rate per Julian century.
//!
//! ## Source
//!
//! Coefficients come from the JPL *Approximate Positions of the Planets* table
//! (Standish, valid 1800 AD – 2050 AD). Angles are in degrees, the semi-major
//! axis in AU.
//!
//! ## Layout
//!
//! The table is a `static` array indexed by [`Body`], so every lookup is an
//! exhaustive match over a closed set instead of a string key. Parsing a name
//! into a [`Body`] is the only place where an unknown planet can show up, and
//! it is reported as [`HelioposError::UnknownBody`].
//!
//! ## Example
//!
//! ```rust
//! use heliopos::ephemeris::Body;
//!
//! let earth: Body = "earth".parse().unwrap();
//! assert_eq!(earth.elements().e.value, 0.01671123);
//! assert!("pluto".parse::<Body>().is_err());
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{constants::JulianCentury, heliopos_errors::HelioposError};

/// Planets covered by the ephemeris table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// All bodies in table order (increasing distance from the sun).
    pub const ALL: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Lowercase name, as accepted by [`Body::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Earth => "earth",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
        }
    }

    /// Mean elements and secular rates of this body.
    pub fn elements(&self) -> &'static BodyElements {
        &EPHEMERIS_TABLE[*self as usize]
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = HelioposError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HelioposError::UnknownBody(s.to_string()))
    }
}

/// One orbital element: value at J2000.0 and its linear drift per Julian century.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRate {
    pub value: f64,
    pub rate: f64,
}

impl ElementRate {
    pub const fn new(value: f64, rate: f64) -> Self {
        ElementRate { value, rate }
    }

    /// `value + rate · t`
    #[inline]
    pub fn at(&self, t: JulianCentury) -> f64 {
        self.value + self.rate * t
    }
}

/// Mean orbital elements of a body with their secular rates.
///
/// Units
/// -----
/// * `a`: AU (and AU/century)
/// * `e`: unitless
/// * `i`, `l`, `varpi`, `omega_node`: degrees (and degrees/century)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyElements {
    /// Semi-major axis
    pub a: ElementRate,
    /// Eccentricity
    pub e: ElementRate,
    /// Inclination
    pub i: ElementRate,
    /// Mean longitude
    pub l: ElementRate,
    /// Longitude of perihelion (ϖ)
    pub varpi: ElementRate,
    /// Longitude of the ascending node (Ω)
    pub omega_node: ElementRate,
}

const fn er(value: f64, rate: f64) -> ElementRate {
    ElementRate::new(value, rate)
}

static EPHEMERIS_TABLE: [BodyElements; 8] = [
    // Mercury
    BodyElements {
        a: er(0.38709927, 0.00000037),
        e: er(0.20563593, 0.00001906),
        i: er(7.00497902, -0.00594749),
        l: er(252.25032350, 149472.67411175),
        varpi: er(77.45779628, 0.16047689),
        omega_node: er(48.33076593, -0.12534081),
    },
    // Venus
    BodyElements {
        a: er(0.72333566, 0.00000390),
        e: er(0.00677672, -0.00004107),
        i: er(3.39467605, -0.00078890),
        l: er(181.97909950, 58517.81538729),
        varpi: er(131.60246718, 0.00268329),
        omega_node: er(76.67984255, -0.27769418),
    },
    // Earth (Earth-Moon barycenter)
    BodyElements {
        a: er(1.00000261, 0.00000562),
        e: er(0.01671123, -0.00004392),
        i: er(-0.00001531, -0.01294668),
        l: er(100.46457166, 35999.37244981),
        varpi: er(102.93768193, 0.32327364),
        omega_node: er(0.0, 0.0),
    },
    // Mars
    BodyElements {
        a: er(1.52371034, 0.00001847),
        e: er(0.09339410, 0.00007882),
        i: er(1.84969142, -0.00813131),
        l: er(-4.55343205, 19140.30268499),
        varpi: er(-23.94362959, 0.44441088),
        omega_node: er(49.55953891, -0.29257343),
    },
    // Jupiter
    BodyElements {
        a: er(5.20288700, -0.00011607),
        e: er(0.04838624, -0.00013253),
        i: er(1.30439695, -0.00183714),
        l: er(34.39644051, 3034.74612775),
        varpi: er(14.72847983, 0.21252668),
        omega_node: er(100.47390909, 0.20469106),
    },
    // Saturn
    BodyElements {
        a: er(9.53667594, -0.00125060),
        e: er(0.05386179, -0.00050991),
        i: er(2.48599187, 0.00193609),
        l: er(49.95424423, 1222.49362201),
        varpi: er(92.59887831, -0.41897216),
        omega_node: er(113.66242448, -0.28867794),
    },
    // Uranus
    BodyElements {
        a: er(19.18916464, -0.00196176),
        e: er(0.04725744, -0.00004397),
        i: er(0.77263783, -0.00242939),
        l: er(313.23810451, 428.48202785),
        varpi: er(170.95427630, 0.40805281),
        omega_node: er(74.01692503, 0.04240589),
    },
    // Neptune
    BodyElements {
        a: er(30.06992276, 0.00026291),
        e: er(0.00859048, 0.00005105),
        i: er(1.77004347, 0.00035372),
        l: er(-55.12002969, 218.45945325),
        varpi: er(44.96476227, -0.32241464),
        omega_node: er(131.78422574, -0.00508664),
    },
];

#[cfg(test)]
mod ephemeris_test {
    use super::*;

    #[test]
    fn test_parse_body_names() {
        for body in Body::ALL {
            assert_eq!(body.name().parse::<Body>().unwrap(), body);
            assert_eq!(body.to_string(), body.name());
        }
        assert_eq!(" Jupiter ".parse::<Body>().unwrap(), Body::Jupiter);
        assert_eq!("NEPTUNE".parse::<Body>().unwrap(), Body::Neptune);
    }

    #[test]
    fn test_unknown_body() {
        assert_eq!(
            "pluto".parse::<Body>(),
            Err(HelioposError::UnknownBody("pluto".into()))
        );
        assert!("".parse::<Body>().is_err());
    }

    #[test]
    fn test_table_is_indexed_by_body() {
        assert_eq!(Body::Mercury.elements().a.value, 0.38709927);
        assert_eq!(Body::Earth.elements().e.value, 0.01671123);
        assert_eq!(Body::Mars.elements().l.value, -4.55343205);
        assert_eq!(Body::Neptune.elements().omega_node.rate, -0.00508664);
        assert_eq!(Body::Saturn.elements().a.value, 9.53667594);
    }

    #[test]
    fn test_table_is_ordered_by_distance() {
        let axes: Vec<f64> = Body::ALL.iter().map(|b| b.elements().a.value).collect();
        assert!(axes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_every_body_is_bound() {
        for body in Body::ALL {
            let e = body.elements().e.value;
            assert!((0.0..0.25).contains(&e), "{body}: e = {e}");
        }
    }

    #[test]
    fn test_element_rate_at() {
        let rate = ElementRate::new(10.0, 2.0);
        assert_eq!(rate.at(0.0), 10.0);
        assert_eq!(rate.at(1.5), 13.0);
        assert_eq!(rate.at(-1.0), 8.0);
    }
}
