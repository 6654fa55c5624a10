//! # SolarSystem: entry points for the presentation layer
//!
//! [`SolarSystem`] is the façade consumed by renderers. It owns the
//! [`EphemParams`] and exposes the two core queries:
//!
//! 1. [`position`](SolarSystem::position): heliocentric position of a named
//!    planet at a Julian Date;
//! 2. [`trajectory`](SolarSystem::trajectory): ordered polyline of positions
//!    sampled from a start date.
//!
//! Names are resolved into the closed [`Body`] set once at the boundary; an
//! unknown name fails with [`HelioposError::UnknownBody`]. Typed variants
//! (`*_of`) skip the lookup.
//!
//! ## Orbit path cache
//!
//! Drawing orbit lines needs one long trajectory per planet, and that
//! trajectory only depends on the body. [`orbit_path`](SolarSystem::orbit_path)
//! computes it on first use from `orbit_path_start_jd` / `orbit_path_samples`
//! and keeps it in a [`OnceCell`]; later calls return the same value.
//!
//! ## Typical usage
//!
//! ```rust
//! use heliopos::solar_system::SolarSystem;
//!
//! let system = SolarSystem::default();
//! let earth = system.position("earth", 2451545.0).unwrap();
//! assert!((earth.norm() - 0.983).abs() < 1e-3);
//!
//! let path = system.trajectory("mars", 2451545.0, 30).unwrap();
//! assert_eq!(path.len(), 30);
//!
//! assert!(system.position("pluto", 2451545.0).is_err());
//! ```

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::{
    constants::{JulianDate, Position3D},
    display::compress_distance,
    ephem_params::EphemParams,
    ephemeris::Body,
    heliopos_errors::HelioposError,
    orbital_elements::InstantaneousElements,
    position::{elements_at, heliocentric_position},
    trajectory::{Trajectory, TrajectoryIter},
};

#[derive(Debug, Clone)]
pub struct SolarSystem {
    params: EphemParams,
    orbit_paths: [OnceCell<Trajectory>; 8],
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new(EphemParams::default())
    }
}

impl SolarSystem {
    pub fn new(params: EphemParams) -> Self {
        SolarSystem {
            params,
            orbit_paths: Default::default(),
        }
    }

    pub fn params(&self) -> &EphemParams {
        &self.params
    }

    /// Heliocentric ecliptic position (AU) of the planet called `name` at `jd`.
    ///
    /// Errors
    /// ------
    /// * [`HelioposError::UnknownBody`] if `name` is not one of the eight planets.
    /// * [`HelioposError::InvalidInput`] if `jd` is NaN or infinite.
    /// * [`HelioposError::NonConvergence`] if the Kepler solver hits its cap.
    pub fn position(&self, name: &str, jd: JulianDate) -> Result<Position3D, HelioposError> {
        self.position_of(name.parse()?, jd)
    }

    pub fn position_of(&self, body: Body, jd: JulianDate) -> Result<Position3D, HelioposError> {
        heliocentric_position(body, jd, &self.params)
    }

    /// `count` positions of the planet called `name`, starting at `start_jd`
    /// and spaced by `trajectory_step_days`. `count = 0` gives an empty
    /// trajectory.
    pub fn trajectory(
        &self,
        name: &str,
        start_jd: JulianDate,
        count: usize,
    ) -> Result<Trajectory, HelioposError> {
        self.trajectory_of(name.parse()?, start_jd, count)
    }

    pub fn trajectory_of(
        &self,
        body: Body,
        start_jd: JulianDate,
        count: usize,
    ) -> Result<Trajectory, HelioposError> {
        Trajectory::sample(body, start_jd, count, &self.params)
    }

    /// Lazy variant of [`trajectory_of`](SolarSystem::trajectory_of).
    pub fn trajectory_iter(
        &self,
        body: Body,
        start_jd: JulianDate,
        count: usize,
    ) -> Result<TrajectoryIter<'_>, HelioposError> {
        TrajectoryIter::new(body, start_jd, count, &self.params)
    }

    /// Instantaneous orbital elements of `body` at `jd`.
    pub fn elements_at(
        &self,
        body: Body,
        jd: JulianDate,
    ) -> Result<InstantaneousElements, HelioposError> {
        elements_at(body, jd)
    }

    /// Positions of all eight planets at `jd`, in table order.
    pub fn positions_at(&self, jd: JulianDate) -> Result<Vec<(Body, Position3D)>, HelioposError> {
        Body::ALL
            .iter()
            .map(|&body| self.position_of(body, jd).map(|p| (body, p)))
            .collect()
    }

    /// Positions of all planets at `jd`, scaled for display with
    /// `params.display_scale`.
    pub fn display_positions_at(
        &self,
        jd: JulianDate,
    ) -> Result<Vec<(Body, Position3D)>, HelioposError> {
        let scale = &self.params.display_scale;
        Ok(self
            .positions_at(jd)?
            .into_iter()
            .map(|(body, p)| (body, compress_distance(&p, scale)))
            .collect())
    }

    /// Cached orbit path of `body`, computed on first access.
    pub fn orbit_path(&self, body: Body) -> Result<&Trajectory, HelioposError> {
        self.orbit_paths[body as usize].get_or_try_init(|| {
            debug!("orbit path cache miss for {body}");
            Trajectory::sample(
                body,
                self.params.orbit_path_start_jd,
                self.params.orbit_path_samples,
                &self.params,
            )
        })
    }
}
