//! Reference run configuration, used whenever no input script overrides it.
pub const REFERENCE_EPSILON: f64 = 100.0;
pub const REFERENCE_SIGMA: f64 = 1.7;
pub const REFERENCE_STEPS: usize = 10_000;
pub const REFERENCE_TIMESTEP: f64 = 0.01;
/// Every particle is built with this mass unless the `mass` command says otherwise
pub const REFERENCE_MASS: f64 = 1.0;

pub const REFERENCE_POSITIONS_FILE: &str = "data/positions.txt";
pub const REFERENCE_VELOCITIES_FILE: &str = "data/velocities.txt";
pub const REFERENCE_OUTPUT_FILE: &str = "final_positions.txt";
