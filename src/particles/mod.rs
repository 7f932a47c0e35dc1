//! The particle ensemble that carries all simulation state can be found here.
//!
//! [`Ensemble`] owns a contiguous `Vec<Particle>`; the index of a particle is its only identity for
//! the run. Construction lives in [`new`], derived quantities in [`properties`] and the per-phase
//! Velocity-Verlet updates in [`integration`].
pub mod integration;
pub mod new;
pub mod properties;

pub use integration::PositionUpdate;
pub use new::{Ensemble, Particle};
