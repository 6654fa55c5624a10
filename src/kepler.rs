//! # Kepler's equation
//!
//! Newton–Raphson solution of `E − e·sin(E) = M` for the eccentric anomaly of
//! an elliptic orbit, and the two quantities derived from it: the true anomaly
//! and the heliocentric distance.
//!
//! The iteration starts at `E₀ = M`. For the planetary eccentricities of the
//! ephemeris table (`e < 0.25`) this converges quadratically in a handful of
//! steps. The loop is capped (see
//! [`EphemParams::kepler_max_iter`](crate::ephem_params::EphemParams::kepler_max_iter)):
//! an ill-conditioned input reports [`HelioposError::NonConvergence`] instead
//! of spinning forever.

use tracing::{trace, warn};

use crate::{
    constants::{AstronomicalUnit, Radian},
    ephem_params::EphemParams,
    heliopos_errors::HelioposError,
};

/// Root of Kepler's equation for a given `(M, e)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentricity: f64,
    /// Eccentric anomaly E (radians)
    pub eccentric_anomaly: Radian,
    /// Newton steps taken
    pub iterations: usize,
}

impl KeplerSolution {
    /// True anomaly `v`, see [`true_anomaly`].
    pub fn true_anomaly(&self) -> Radian {
        true_anomaly(self.eccentric_anomaly, self.eccentricity)
    }

    /// Distance from the focus for semi-major axis `a`, see [`radius`].
    pub fn radius(&self, semi_major_axis: AstronomicalUnit) -> AstronomicalUnit {
        radius(semi_major_axis, self.eccentricity, self.eccentric_anomaly)
    }
}

/// Solve Kepler's equation with the tolerance and iteration cap of `params`.
pub fn solve_kepler_with(
    mean_anomaly: Radian,
    eccentricity: f64,
    params: &EphemParams,
) -> Result<KeplerSolution, HelioposError> {
    solve_kepler(
        mean_anomaly,
        eccentricity,
        params.kepler_tolerance,
        params.kepler_max_iter,
    )
}

/// Solve `E − e·sin(E) = M` by Newton–Raphson.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: M (radians)
/// * `eccentricity`: e, must satisfy `|e| < 1` (secular drift can push it slightly
///   below zero far from J2000)
/// * `tolerance`: stop once the Newton step |ΔE| is at most this value
/// * `max_iter`: number of Newton steps allowed
///
/// Return
/// ------
/// * the [`KeplerSolution`], or
/// * [`HelioposError::InvalidInput`] for a non-elliptic or non-finite eccentricity,
/// * [`HelioposError::NonConvergence`] if `max_iter` steps were not enough or a
///   step became non-finite.
pub fn solve_kepler(
    mean_anomaly: Radian,
    eccentricity: f64,
    tolerance: f64,
    max_iter: usize,
) -> Result<KeplerSolution, HelioposError> {
    if eccentricity.is_nan() || eccentricity.abs() >= 1.0 {
        return Err(HelioposError::InvalidInput(format!(
            "eccentricity must satisfy |e| < 1, got {eccentricity}"
        )));
    }

    let m = mean_anomaly;
    let e = eccentricity;
    let mut ecc_anomaly = m;
    let mut delta = f64::NAN;

    for iteration in 1..=max_iter {
        delta = (ecc_anomaly - e * ecc_anomaly.sin() - m) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        trace!("solve_kepler: iteration={iteration} E={ecc_anomaly} delta={delta}");

        if !delta.is_finite() {
            break;
        }
        if delta.abs() <= tolerance {
            return Ok(KeplerSolution {
                eccentricity: e,
                eccentric_anomaly: ecc_anomaly,
                iterations: iteration,
            });
        }
    }

    warn!("solve_kepler: no convergence for M={m}, e={e} after {max_iter} iterations");
    Err(HelioposError::NonConvergence {
        iterations: max_iter,
        last_step: delta,
    })
}

/// True anomaly from the eccentric anomaly.
///
/// `v = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))`, which keeps `v` in the
/// same half-turn as `E` without the `tan(E/2)` singularity at `E = π`.
pub fn true_anomaly(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin())
        .atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Heliocentric distance `r = a(1 − e·cos E)`.
pub fn radius(
    semi_major_axis: AstronomicalUnit,
    eccentricity: f64,
    eccentric_anomaly: Radian,
) -> AstronomicalUnit {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use crate::constants::DPI;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn test_kepler_circular() {
        for m in [0.0, 0.3, PI / 4.0, PI, 5.9] {
            let sol = solve_kepler(m, 0.0, 1e-6, 50).unwrap();
            assert_eq!(sol.eccentric_anomaly, m);
            assert_eq!(sol.iterations, 1);
            assert_abs_diff_eq!(sol.true_anomaly().rem_euclid(DPI), m, epsilon = 1e-12);
            assert_eq!(sol.radius(2.5), 2.5);
        }
    }

    #[test]
    fn test_kepler_apsides() {
        let sol = solve_kepler(0.0, 0.0167, 1e-12, 50).unwrap();
        assert_eq!(sol.eccentric_anomaly, 0.0);
        assert_abs_diff_eq!(sol.radius(1.0), 1.0 - 0.0167, epsilon = 1e-15);

        let sol = solve_kepler(PI, 0.0167, 1e-12, 50).unwrap();
        assert_abs_diff_eq!(sol.eccentric_anomaly, PI, epsilon = 1e-12);
        assert_abs_diff_eq!(sol.true_anomaly(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(sol.radius(1.0), 1.0 + 0.0167, epsilon = 1e-12);
    }

    #[test]
    fn test_kepler_residual_random() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        let tolerance = 1e-6;

        for _ in 0..5_000 {
            let m = rng.random::<f64>() * DPI;
            let e = rng.random_range(0.0..0.9);
            let sol = solve_kepler(m, e, tolerance, 50).unwrap();
            let ea = sol.eccentric_anomaly;
            let residual = ea - e * ea.sin() - m;
            assert!(
                residual.abs() <= tolerance,
                "residual {residual} for M={m}, e={e}"
            );
        }
    }

    #[test]
    fn test_kepler_low_eccentricity_is_fast() {
        let mut rng = StdRng::seed_from_u64(0xBADF00D);
        for _ in 0..1_000 {
            let m = rng.random::<f64>() * DPI;
            let e = rng.random_range(0.0..0.25);
            let sol = solve_kepler(m, e, 1e-6, 50).unwrap();
            assert!(sol.iterations <= 6, "{} iterations", sol.iterations);
        }
    }

    #[test]
    fn test_kepler_iteration_cap() {
        let res = solve_kepler(1.0, 0.5, 1e-15, 1);
        match res {
            Err(HelioposError::NonConvergence {
                iterations,
                last_step,
            }) => {
                assert_eq!(iterations, 1);
                assert!(last_step.abs() > 1e-15);
            }
            other => panic!("expected NonConvergence, got {other:?}"),
        }
    }

    #[test]
    fn test_kepler_rejects_non_elliptic() {
        for e in [1.0, 1.5, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                solve_kepler(1.0, e, 1e-6, 50),
                Err(HelioposError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_kepler_slightly_negative_eccentricity() {
        // linear e rates cross zero a few centuries from J2000
        let e = -0.0014372799999999991;
        for m in [0.0, 1.0, PI, 5.5] {
            let sol = solve_kepler(m, e, 1e-12, 50).unwrap();
            let ea = sol.eccentric_anomaly;
            assert_abs_diff_eq!(ea - e * ea.sin(), m, epsilon = 1e-12);
            assert!(sol.true_anomaly().is_finite());
            assert_abs_diff_eq!(sol.radius(1.0), 1.0, epsilon = e.abs() + 1e-15);
        }
    }

    #[test]
    fn test_kepler_nan_mean_anomaly() {
        assert!(matches!(
            solve_kepler(f64::NAN, 0.1, 1e-6, 50),
            Err(HelioposError::NonConvergence { .. })
        ));
    }

    #[test]
    fn test_solve_kepler_with_params() {
        let params = EphemParams::default();
        let sol = solve_kepler_with(2.0, 0.2, &params).unwrap();
        let direct = solve_kepler(2.0, 0.2, 1e-6, 50).unwrap();
        assert_eq!(sol, direct);
    }

    #[test]
    fn test_true_anomaly_known_value() {
        // e = 0.5, E = π/2: tan(v/2) = √3 · tan(π/4) → v = 2π/3
        assert_abs_diff_eq!(true_anomaly(PI / 2.0, 0.5), 2.0 * PI / 3.0, epsilon = 1e-12);
    }
}
