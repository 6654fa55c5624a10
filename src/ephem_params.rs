//! # Ephemeris configuration
//!
//! This module defines [`EphemParams`], the set of tunables used by the
//! position pipeline, and its validating builder [`EphemParamsBuilder`].
//!
//! ## Parameter groups
//!
//! - **Kepler solver**: convergence tolerance and iteration cap of the
//!   Newton–Raphson loop.
//! - **Trajectory sampling**: spacing between samples and the span of the
//!   cached per-body orbit path.
//! - **Display**: logarithmic distance compression used for screen placement
//!   (see [`crate::display`]).
//!
//! ## Example
//!
//! ```rust
//! use heliopos::ephem_params::EphemParams;
//!
//! let params = EphemParams::builder()
//!     .kepler_tolerance(1e-10)
//!     .kepler_max_iter(100)
//!     .trajectory_step_days(0.5)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.kepler_max_iter, 100);
//! ```

use std::cmp::Ordering::{Equal, Greater};
use std::fmt;

use crate::{
    constants::{JulianDate, J2000_JD},
    display::DisplayScale,
    heliopos_errors::HelioposError,
};

/// Configuration of the position and trajectory pipeline.
///
/// Default values:
///
/// * `kepler_tolerance`: 1e-6 rad
/// * `kepler_max_iter`: 50
/// * `trajectory_step_days`: 1.0 d
/// * `orbit_path_start_jd`: 2451545.0 (J2000.0)
/// * `orbit_path_samples`: 60 001 (about 164 years of daily samples)
/// * `display_scale`: factor 50, padding 10
#[derive(Debug, Clone, PartialEq)]
pub struct EphemParams {
    // --- Kepler solver ---
    /// Newton–Raphson stopping threshold on |ΔE| (radians).
    pub kepler_tolerance: f64,
    /// Iterations allowed before reporting non-convergence.
    pub kepler_max_iter: usize,

    // --- Trajectory sampling ---
    /// Time between two consecutive trajectory samples (days).
    pub trajectory_step_days: f64,
    /// First sample of the cached orbit path.
    pub orbit_path_start_jd: JulianDate,
    /// Number of samples of the cached orbit path.
    pub orbit_path_samples: usize,

    // --- Display ---
    pub display_scale: DisplayScale,
}

impl EphemParams {
    /// Equivalent to [`EphemParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fluent builder initialized with the defaults.
    pub fn builder() -> EphemParamsBuilder {
        EphemParamsBuilder::new()
    }
}

impl Default for EphemParams {
    fn default() -> Self {
        EphemParams {
            kepler_tolerance: 1e-6,
            kepler_max_iter: 50,

            trajectory_step_days: 1.0,
            orbit_path_start_jd: J2000_JD,
            orbit_path_samples: 60_001,

            display_scale: DisplayScale::default(),
        }
    }
}

/// Builder for [`EphemParams`], with validation.
#[derive(Debug, Clone)]
pub struct EphemParamsBuilder {
    params: EphemParams,
}

impl Default for EphemParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EphemParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: EphemParams::default(),
        }
    }

    // --- Kepler ---
    pub fn kepler_tolerance(mut self, v: f64) -> Self {
        self.params.kepler_tolerance = v;
        self
    }
    pub fn kepler_max_iter(mut self, v: usize) -> Self {
        self.params.kepler_max_iter = v;
        self
    }

    // --- Sampling ---
    pub fn trajectory_step_days(mut self, v: f64) -> Self {
        self.params.trajectory_step_days = v;
        self
    }
    pub fn orbit_path_start_jd(mut self, v: JulianDate) -> Self {
        self.params.orbit_path_start_jd = v;
        self
    }
    pub fn orbit_path_samples(mut self, v: usize) -> Self {
        self.params.orbit_path_samples = v;
        self
    }

    // --- Display ---
    pub fn display_scale(mut self, v: DisplayScale) -> Self {
        self.params.display_scale = v;
        self
    }

    /// Return true iff x > 0.0, finite, and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.is_finite() && x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Return true iff x >= 0.0, finite, and comparable (i.e., not NaN).
    #[inline]
    fn ge0(x: f64) -> bool {
        x.is_finite() && matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `kepler_tolerance > 0`, `kepler_max_iter ≥ 1`
    /// * `trajectory_step_days > 0`
    /// * `orbit_path_start_jd` finite
    /// * `display_scale.factor > 0`, `display_scale.padding ≥ 0`
    ///
    /// All real-valued parameters must be finite.
    pub fn build(self) -> Result<EphemParams, HelioposError> {
        let p = &self.params;

        if !Self::gt0(p.kepler_tolerance) {
            return Err(HelioposError::InvalidParameter(
                "kepler_tolerance must be > 0".into(),
            ));
        }
        if p.kepler_max_iter == 0 {
            return Err(HelioposError::InvalidParameter(
                "kepler_max_iter must be >= 1".into(),
            ));
        }
        if !Self::gt0(p.trajectory_step_days) {
            return Err(HelioposError::InvalidParameter(
                "trajectory_step_days must be > 0".into(),
            ));
        }
        if !p.orbit_path_start_jd.is_finite() {
            return Err(HelioposError::InvalidParameter(
                "orbit_path_start_jd must be finite".into(),
            ));
        }
        if !Self::gt0(p.display_scale.factor) {
            return Err(HelioposError::InvalidParameter(
                "display_scale.factor must be > 0".into(),
            ));
        }
        if !Self::ge0(p.display_scale.padding) {
            return Err(HelioposError::InvalidParameter(
                "display_scale.padding must be >= 0".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for EphemParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: [(&str, String); 7] = [
            ("kepler_tolerance", format!("{:e}", self.kepler_tolerance)),
            ("kepler_max_iter", self.kepler_max_iter.to_string()),
            ("trajectory_step_days", self.trajectory_step_days.to_string()),
            ("orbit_path_start_jd", self.orbit_path_start_jd.to_string()),
            ("orbit_path_samples", self.orbit_path_samples.to_string()),
            ("display_scale.factor", self.display_scale.factor.to_string()),
            ("display_scale.padding", self.display_scale.padding.to_string()),
        ];

        if f.alternate() {
            const NAME_COL: usize = 24;
            writeln!(f, "EphemParams")?;
            for (name, value) in rows {
                writeln!(f, "  {name:<width$} = {value}", width = NAME_COL)?;
            }
            Ok(())
        } else {
            let joined: Vec<String> = rows
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            write!(f, "EphemParams({})", joined.join(", "))
        }
    }
}
