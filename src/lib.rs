//! # heliopos
//!
//! Heliocentric positions of the eight planets from mean Keplerian elements
//! with linear secular rates (JPL approximate planetary elements).
//!
//! ```text
//! time ──► elements ──► Kepler solver ──► ecliptic frame ──► (x, y, z) AU
//! ```
//!
//! Start from [`solar_system::SolarSystem`] for named queries, or from
//! [`position::heliocentric_position`] for the typed pipeline.

pub mod constants;
pub mod display;
pub mod ephem_params;
pub mod ephemeris;
pub mod heliopos_errors;
pub mod kepler;
pub mod orbital_elements;
pub mod position;
pub mod ref_system;
pub mod solar_system;
pub mod time;
pub mod trajectory;

pub use constants::{JulianDate, Position3D};
pub use ephem_params::EphemParams;
pub use ephemeris::Body;
pub use heliopos_errors::HelioposError;
pub use solar_system::SolarSystem;
pub use trajectory::Trajectory;
