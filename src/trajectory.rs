//! # Trajectory sampling
//!
//! A [`Trajectory`] is the ordered polyline of a body's heliocentric positions
//! at `start_jd, start_jd + step, start_jd + 2·step, …`. It is used to draw
//! orbit paths, so each sample goes through the exact same pipeline as a
//! single-point query ([`heliocentric_position`]): with a one-day step,
//! `trajectory[k]` is bit-identical to the position at `start_jd + k`.
//!
//! Two ways to get samples:
//!
//! - [`TrajectoryIter`]: lazy, cloneable, restartable iterator
//! - [`Trajectory::sample`]: eager; samples are independent and computed in
//!   parallel with rayon, in the same order as the iterator
//!
//! ```rust
//! use heliopos::{ephem_params::EphemParams, ephemeris::Body, trajectory::Trajectory};
//!
//! let params = EphemParams::default();
//! let path = Trajectory::sample(Body::Mars, 2451545.0, 687, &params).unwrap();
//! assert_eq!(path.len(), 687);
//! ```

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::{
    constants::{JulianDate, Position3D},
    display::{compress_distance, DisplayScale},
    ephem_params::EphemParams,
    ephemeris::Body,
    heliopos_errors::HelioposError,
    position::heliocentric_position,
    time::ensure_finite_jd,
};

/// Sampled positions of one body over a fixed time span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    body: Body,
    start_jd: JulianDate,
    step_days: f64,
    points: Vec<Position3D>,
}

impl Trajectory {
    /// Sample `count` positions of `body` from `start_jd`, spaced by
    /// `params.trajectory_step_days`.
    ///
    /// `count = 0` yields an empty trajectory.
    ///
    /// Errors
    /// ------
    /// * [`HelioposError::InvalidInput`] if `start_jd` is not finite.
    /// * [`HelioposError::NonConvergence`] if any sample fails to converge.
    pub fn sample(
        body: Body,
        start_jd: JulianDate,
        count: usize,
        params: &EphemParams,
    ) -> Result<Self, HelioposError> {
        let start_jd = ensure_finite_jd(start_jd)?;
        let step_days = params.trajectory_step_days;
        debug!("sampling {count} positions of {body} from JD {start_jd} every {step_days} d");

        let points = (0..count)
            .into_par_iter()
            .map(|i| heliocentric_position(body, sample_jd(start_jd, step_days, i), params))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Trajectory {
            body,
            start_jd,
            step_days,
            points,
        })
    }

    /// Collect a lazy iterator into a trajectory, sequentially.
    pub fn from_iter_samples(iter: TrajectoryIter<'_>) -> Result<Self, HelioposError> {
        let (body, start_jd, step_days) = (iter.body, iter.start_jd, iter.step_days);
        let points = iter.collect::<Result<Vec<_>, _>>()?;
        Ok(Trajectory {
            body,
            start_jd,
            step_days,
            points,
        })
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn start_jd(&self) -> JulianDate {
        self.start_jd
    }

    pub fn step_days(&self) -> f64 {
        self.step_days
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Position3D] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&Position3D> {
        self.points.get(index)
    }

    /// Julian Date of sample `index`.
    pub fn jd_of(&self, index: usize) -> JulianDate {
        sample_jd(self.start_jd, self.step_days, index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position3D> {
        self.points.iter()
    }

    /// Samples paired with their Julian Date.
    pub fn timed_points(&self) -> impl Iterator<Item = (JulianDate, &Position3D)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (self.jd_of(i), p))
    }

    /// Polyline scaled for display, see [`compress_distance`].
    pub fn compressed(&self, scale: &DisplayScale) -> Vec<Position3D> {
        self.points
            .iter()
            .map(|p| compress_distance(p, scale))
            .collect()
    }
}

impl std::ops::Index<usize> for Trajectory {
    type Output = Position3D;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Position3D;
    type IntoIter = std::slice::Iter<'a, Position3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[inline]
fn sample_jd(start_jd: JulianDate, step_days: f64, index: usize) -> JulianDate {
    start_jd + index as f64 * step_days
}

/// Lazy trajectory: yields one position per call to `next`.
///
/// The iterator holds no state besides its cursor; cloning it, or building a
/// new one with the same arguments, replays the same sequence.
#[derive(Debug, Clone)]
pub struct TrajectoryIter<'p> {
    body: Body,
    start_jd: JulianDate,
    step_days: f64,
    next_index: usize,
    count: usize,
    params: &'p EphemParams,
}

impl<'p> TrajectoryIter<'p> {
    /// Errors with [`HelioposError::InvalidInput`] if `start_jd` is not finite.
    pub fn new(
        body: Body,
        start_jd: JulianDate,
        count: usize,
        params: &'p EphemParams,
    ) -> Result<Self, HelioposError> {
        Ok(TrajectoryIter {
            body,
            start_jd: ensure_finite_jd(start_jd)?,
            step_days: params.trajectory_step_days,
            next_index: 0,
            count,
            params,
        })
    }
}

impl Iterator for TrajectoryIter<'_> {
    type Item = Result<Position3D, HelioposError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.count {
            return None;
        }
        let jd = sample_jd(self.start_jd, self.step_days, self.next_index);
        self.next_index += 1;
        Some(heliocentric_position(self.body, jd, self.params))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrajectoryIter<'_> {}
