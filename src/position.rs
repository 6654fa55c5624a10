//! # Single-point position pipeline
//!
//! ```text
//! JD ──► T (centuries) ──► elements(T) ──► E (Kepler) ──► (v, r) ──► (x, y, z)
//! ```
//!
//! Every position produced by the crate, live or sampled along a trajectory,
//! goes through [`heliocentric_position`], so a trajectory sample and a single
//! query at the same instant agree to the last bit.

use crate::{
    constants::{JulianDate, Position3D},
    ephem_params::EphemParams,
    ephemeris::Body,
    heliopos_errors::HelioposError,
    kepler::{solve_kepler_with, KeplerSolution},
    orbital_elements::{evaluate, InstantaneousElements},
    ref_system::orbit_to_ecliptic,
    time::{centuries_since_j2000, ensure_finite_jd},
};

/// Instantaneous elements of `body` at `jd`.
pub fn elements_at(body: Body, jd: JulianDate) -> Result<InstantaneousElements, HelioposError> {
    let jd = ensure_finite_jd(jd)?;
    Ok(evaluate(body.elements(), centuries_since_j2000(jd)))
}

/// Elements and Kepler solution of `body` at `jd`, before the frame transform.
pub fn orbit_state(
    body: Body,
    jd: JulianDate,
    params: &EphemParams,
) -> Result<(InstantaneousElements, KeplerSolution), HelioposError> {
    let elements = elements_at(body, jd)?;
    let solution = solve_kepler_with(elements.mean_anomaly_rad(), elements.eccentricity, params)?;
    Ok((elements, solution))
}

/// Heliocentric ecliptic position of `body` at `jd`, in AU.
///
/// Errors
/// ------
/// * [`HelioposError::InvalidInput`] if `jd` is NaN or infinite.
/// * [`HelioposError::NonConvergence`] if the Kepler solver hits its iteration cap.
pub fn heliocentric_position(
    body: Body,
    jd: JulianDate,
    params: &EphemParams,
) -> Result<Position3D, HelioposError> {
    let (elements, solution) = orbit_state(body, jd, params)?;
    let radius = solution.radius(elements.semi_major_axis);
    Ok(orbit_to_ecliptic(&elements, solution.true_anomaly(), radius))
}
