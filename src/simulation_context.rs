use log::{info, warn};

use crate::errors::{MdError, Result};
use crate::particles::{Ensemble, PositionUpdate};
use crate::potentials::{
    kind::{PairStyle, PotentialManagerKind},
    lennard_jones::LennardJones,
};

/// Everything a single simulation run consumes.
///
/// The ensemble is mutated in place and is the only output of [`simulate`].
#[derive(Debug, Clone)]
pub struct SimulationArguments {
    pub ensemble: Ensemble,
    pub potential: LennardJones,
    pub n_steps: usize,
    pub timestep: f64,
    pub pair_style: PairStyle,
    pub position_update: PositionUpdate,
    /// Abort with [`MdError::NonFiniteState`] as soon as a position or velocity stops being finite
    pub check_finite: bool,
    /// Log energies every `thermo` steps, 0 disables
    pub thermo: usize,
}

impl SimulationArguments {
    pub fn new(ensemble: Ensemble, potential: LennardJones, n_steps: usize, timestep: f64) -> Self {
        Self {
            ensemble,
            potential,
            n_steps,
            timestep,
            pair_style: PairStyle::default(),
            position_update: PositionUpdate::default(),
            check_finite: false,
            thermo: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.timestep > 0.0) {
            return Err(MdError::NonPositiveTimestep {
                value: self.timestep,
            });
        }
        Ok(())
    }
}

/// Runs a complete simulation: one force evaluation over the initial state, then exactly
/// `n_steps` Velocity-Verlet steps.
///
/// A non-positive timestep is rejected before the ensemble is touched. Numerical faults are not
/// detected unless `check_finite` is set.
pub fn simulate(args: &mut SimulationArguments) -> Result<()> {
    info!(
        "Simulating {} particles for {} steps, dt = {}, epsilon = {}, sigma = {}, pair style {}",
        args.ensemble.len(),
        args.n_steps,
        args.timestep,
        args.potential.epsilon(),
        args.potential.sigma(),
        args.pair_style.name()
    );
    if args.position_update != PositionUpdate::Reference {
        warn!("Using the halved acceleration term in the position update; results will differ from reference runs");
    }

    let mgr = PotentialManagerKind::new(args.pair_style, args.potential);
    mgr.run(args)
}
