//! Direct all-pairs Lennard-Jones molecular dynamics.
//!
//! The ensemble of [`particles::Particle`]s is the only carrier of state. A run performs one force
//! evaluation over the initial positions and then a fixed number of Velocity-Verlet steps, each
//! of which advances positions, re-evaluates forces at the new positions and corrects velocities
//! with the average of the old and new accelerations.
//!
//! ```
//! use ljmd::math::Vector3D;
//! use ljmd::particles::Ensemble;
//! use ljmd::potentials::lennard_jones::LennardJones;
//! use ljmd::simulation_context::{simulate, SimulationArguments};
//!
//! let ensemble = Ensemble::from_positions(vec![
//!     Vector3D::new(0.0, 0.0, 0.0),
//!     Vector3D::new(2.0, 0.0, 0.0),
//! ]);
//! let potential = LennardJones::new(100.0, 1.7).unwrap();
//! let mut args = SimulationArguments::new(ensemble, potential, 10, 0.01);
//! simulate(&mut args).unwrap();
//! // the pair is symmetric about x = 1, so its center of mass stays there
//! let drift = args.ensemble.center_of_mass() - Vector3D::new(1.0, 0.0, 0.0);
//! assert!(drift.norm() < 1e-12);
//! ```
extern crate nalgebra as na;

pub mod constants;
pub mod errors;
pub mod extensions;
pub mod generator;
pub mod math;
pub mod particles;
pub mod potentials;
pub mod readers;
pub mod simulation_context;
pub mod system;
pub mod writers;
