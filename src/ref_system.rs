//! # Orbital plane → ecliptic frame
//!
//! Transformation of a position given by its true anomaly and distance in the
//! orbital plane into the fixed heliocentric ecliptic frame (mean equinox and
//! ecliptic of J2000.0).
//!
//! The chain of rotations is, applied to the perifocal vector `(r cos v, r sin v, 0)`:
//!
//! ```text
//! R_z(Ω) · R_x(I) · R_z(ω)
//! ```
//!
//! i.e. argument of perihelion in the orbital plane, tilt by the inclination,
//! then rotation of the line of nodes. [`orbit_to_ecliptic`] evaluates the
//! closed form of that product, [`orbit_rotation`] builds the matrix itself.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::{
    constants::{AstronomicalUnit, Degree, Position3D, Radian, RADEG},
    orbital_elements::InstantaneousElements,
};

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Elementary rotation matrix of angle `alpha` (radians) around `axis`.
///
/// The rotation is applied to the vector in a fixed frame (counter-clockwise
/// for positive `alpha` when looking down the axis), so `x' = R · x`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation from the perifocal frame (x towards perihelion) to the ecliptic frame.
///
/// Arguments
/// ---------
/// * `node`: longitude of the ascending node Ω (degrees)
/// * `inclination`: I (degrees)
/// * `periapsis_argument`: ω (degrees)
pub fn orbit_rotation(
    node: Degree,
    inclination: Degree,
    periapsis_argument: Degree,
) -> Matrix3<f64> {
    rotmt(node * RADEG, Axis::Z)
        * rotmt(inclination * RADEG, Axis::X)
        * rotmt(periapsis_argument * RADEG, Axis::Z)
}

/// Heliocentric ecliptic position of a body.
///
/// Arguments
/// ---------
/// * `elements`: instantaneous elements; Ω, ω and I are read in degrees
/// * `true_anomaly`: v (radians)
/// * `radius`: distance to the sun (AU)
///
/// Return
/// ------
/// * `(x, y, z)` in AU:
///
/// ```text
/// x = r·(cosΩ·cos(ω+v) − sinΩ·sin(ω+v)·cosI)
/// y = r·(sinΩ·cos(ω+v) + cosΩ·sin(ω+v)·cosI)
/// z = r·(sin(ω+v)·sinI)
/// ```
pub fn orbit_to_ecliptic(
    elements: &InstantaneousElements,
    true_anomaly: Radian,
    radius: AstronomicalUnit,
) -> Position3D {
    let node = elements.ascending_node_longitude * RADEG;
    let incl = elements.inclination * RADEG;
    // argument of latitude
    let u = elements.periapsis_argument * RADEG + true_anomaly;

    let (sin_node, cos_node) = node.sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    Vector3::new(
        radius * (cos_node * cos_u - sin_node * sin_u * cos_i),
        radius * (sin_node * cos_u + cos_node * sin_u * cos_i),
        radius * (sin_u * sin_i),
    )
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use crate::{ephemeris::Body, orbital_elements::evaluate};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn elements(node: Degree, incl: Degree, argp: Degree) -> InstantaneousElements {
        InstantaneousElements {
            semi_major_axis: 1.0,
            eccentricity: 0.0,
            inclination: incl,
            mean_longitude: 0.0,
            perihelion_longitude: node + argp,
            ascending_node_longitude: node,
            periapsis_argument: argp,
            mean_anomaly: 0.0,
        }
    }

    #[test]
    fn test_rotmt_quarter_turns() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);

        assert_relative_eq!(rotmt(FRAC_PI_2, Axis::Z) * x, y, epsilon = 1e-15);
        assert_relative_eq!(
            rotmt(FRAC_PI_2, Axis::X) * y,
            Vector3::new(0.0, 0.0, 1.0),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            rotmt(FRAC_PI_2, Axis::Y) * Vector3::new(0.0, 0.0, 1.0),
            x,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_planar_orbit() {
        // I = Ω = ω = 0: the orbit plane is the ecliptic and x points to perihelion
        let el = elements(0.0, 0.0, 0.0);
        let p = orbit_to_ecliptic(&el, 0.0, 2.0);
        assert_relative_eq!(p, Vector3::new(2.0, 0.0, 0.0), epsilon = 1e-15);

        let p = orbit_to_ecliptic(&el, FRAC_PI_2, 2.0);
        assert_relative_eq!(p, Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_polar_orbit_reaches_ecliptic_pole() {
        // I = 90°, at 90° past the ascending node the body sits above the pole
        let el = elements(0.0, 90.0, 0.0);
        let p = orbit_to_ecliptic(&el, FRAC_PI_2, 1.0);
        assert_relative_eq!(p, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_closed_form_matches_rotation_chain() {
        for body in Body::ALL {
            let el = evaluate(body.elements(), 0.37);
            let rot = orbit_rotation(
                el.ascending_node_longitude,
                el.inclination,
                el.periapsis_argument,
            );
            for k in 0..12 {
                let v = k as f64 * 0.5;
                let r = 1.7;
                let perifocal = Vector3::new(r * v.cos(), r * v.sin(), 0.0);
                assert_relative_eq!(
                    orbit_to_ecliptic(&el, v, r),
                    rot * perifocal,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_distance_is_preserved() {
        let el = elements(131.78, 1.77, 272.8);
        let p = orbit_to_ecliptic(&el, 1.234, 30.07);
        assert_relative_eq!(p.norm(), 30.07, epsilon = 1e-12);
    }
}
