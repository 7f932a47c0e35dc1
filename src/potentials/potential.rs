use log::{debug, info, warn};

use crate::errors::{MdError, Result};
use crate::math::Vector3D;
use crate::particles::{Ensemble, Particle, PositionUpdate};
use crate::simulation_context::SimulationArguments;

/// A central pair interaction.
pub trait PairPotential: Send + Sync {
    /// Force on particle `i` due to particle `j`, with `rij = r_i - r_j`.
    fn pair_force(&self, rij: &Vector3D) -> Vector3D;

    /// Interaction energy of one unordered pair.
    fn pair_energy(&self, rij: &Vector3D) -> f64;
}

/// Evaluates forces over a whole ensemble and drives the Velocity-Verlet integration on top of
/// that evaluation.
pub trait PotentialManager: Send + Sync {
    fn pair_potential(&self) -> &dyn PairPotential;

    /// Adds every pair contribution into `force`. The accumulators are zero on entry.
    fn accumulate_forces(&self, particles: &mut [Particle]);

    /// Demotes the current forces, re-evaluates them at the current positions and refreshes both
    /// accelerations. Positions and velocities are not touched.
    fn compute_forces(&self, ensemble: &mut Ensemble) {
        for particle in ensemble.particles.iter_mut() {
            particle.demote_force();
        }

        self.accumulate_forces(&mut ensemble.particles);

        for particle in ensemble.particles.iter_mut() {
            particle.derive_acceleration();
        }
    }

    fn potential_energy(&self, ensemble: &Ensemble) -> f64 {
        let potential = self.pair_potential();
        let particles = &ensemble.particles;
        let mut potential_energy: f64 = 0.0;
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let rij = particles[i].position - particles[j].position;
                potential_energy += potential.pair_energy(&rij);
            }
        }
        potential_energy
    }

    /// One Velocity-Verlet step. Forces have to be consistent with the current positions on
    /// entry, and are again on exit.
    fn verlet_step(&self, ensemble: &mut Ensemble, dt: f64, scheme: PositionUpdate) {
        ensemble.update_positions(dt, scheme);

        self.compute_forces(ensemble);

        ensemble.update_velocities(dt);
    }

    /// Warm-up force evaluation followed by `n_steps` integrator steps. The ensemble in `args` is
    /// the output. The arguments are validated here, before the warm-up evaluation.
    fn run(&self, args: &mut SimulationArguments) -> Result<()> {
        args.validate()?;

        let dt = args.timestep;
        let scheme = args.position_update;
        let thermo = args.thermo;
        let ensemble = &mut args.ensemble;

        self.compute_forces(ensemble);
        if thermo > 0 {
            self.log_thermo(ensemble, 0);
        }

        for step in 1..=args.n_steps {
            self.verlet_step(ensemble, dt, scheme);

            if args.check_finite {
                if let Some(id) = ensemble.first_non_finite() {
                    warn!("Particle {} became non-finite at step {}", id, step);
                    return Err(MdError::NonFiniteState { id, step });
                }
            }
            if thermo > 0 && step % thermo == 0 {
                self.log_thermo(ensemble, step);
            }
        }

        info!("Completed {} steps of {} time units", args.n_steps, dt);
        Ok(())
    }

    fn log_thermo(&self, ensemble: &Ensemble, step: usize) {
        let kinetic_energy = ensemble.kinetic_energy();
        let potential_energy = self.potential_energy(ensemble);
        debug!(
            "{} {:.6} {:.6} {:.6}",
            step,
            kinetic_energy,
            potential_energy,
            kinetic_energy + potential_energy
        );
    }
}
