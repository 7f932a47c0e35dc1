use crate::constants::{
    REFERENCE_EPSILON, REFERENCE_MASS, REFERENCE_OUTPUT_FILE, REFERENCE_POSITIONS_FILE,
    REFERENCE_SIGMA, REFERENCE_STEPS, REFERENCE_TIMESTEP, REFERENCE_VELOCITIES_FILE,
};
use crate::particles::PositionUpdate;
use crate::potentials::kind::PairStyle;

/// Settings collected from an input script, before any data file is read.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub positions_file: Option<String>,
    /// Particles start at rest when no velocities file is given
    pub velocities_file: Option<String>,
    pub output_file: String,
    pub epsilon: f64,
    pub sigma: f64,
    pub mass: f64,
    pub timestep: f64,
    pub steps: usize,
    pub thermo: usize,
    pub pair_style: PairStyle,
    pub position_update: PositionUpdate,
    pub check_finite: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            positions_file: None,
            velocities_file: None,
            output_file: String::from(REFERENCE_OUTPUT_FILE),
            epsilon: REFERENCE_EPSILON,
            sigma: REFERENCE_SIGMA,
            mass: REFERENCE_MASS,
            timestep: REFERENCE_TIMESTEP,
            steps: REFERENCE_STEPS,
            thermo: 0,
            pair_style: PairStyle::default(),
            position_update: PositionUpdate::default(),
            check_finite: false,
        }
    }
}

impl RunSettings {
    /// The configuration used when no input script is given.
    pub fn reference() -> Self {
        Self {
            positions_file: Some(String::from(REFERENCE_POSITIONS_FILE)),
            velocities_file: Some(String::from(REFERENCE_VELOCITIES_FILE)),
            ..Self::default()
        }
    }
}
