//! Random initial configurations: particles in a cube, kept a minimum distance apart.
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    errors::{MdError, Result},
    math::{min_pair_distance, Vector3D},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterGenerator {
    pub n_particles: usize,
    /// Positions are drawn uniformly from `[-half_width, half_width)` in each direction
    pub half_width: f64,
    /// Every pair of particles ends up strictly further apart than this
    pub min_separation: f64,
    /// Velocity components are drawn uniformly from `[-max_speed, max_speed)`
    pub max_speed: f64,
    pub seed: u64,
    pub max_attempts: usize,
}

impl Default for ClusterGenerator {
    fn default() -> Self {
        Self {
            n_particles: 12,
            half_width: 4.0,
            min_separation: 2.0,
            max_speed: 1.0,
            seed: 0,
            max_attempts: 100_000,
        }
    }
}

impl ClusterGenerator {
    /// Redraws the whole set of positions until no pair is too close, then draws velocities.
    pub fn generate(&self) -> Result<(Vec<Vector3D>, Vec<Vector3D>)> {
        check_extent("half_width", self.half_width, false)?;
        check_extent("max_speed", self.max_speed, true)?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        for _ in 0..self.max_attempts {
            let positions = sample_cube(&mut rng, self.n_particles, self.half_width);
            let separated = match min_pair_distance(&positions) {
                Some(min_distance) => min_distance > self.min_separation,
                None => true,
            };
            if separated {
                let velocities = sample_cube(&mut rng, self.n_particles, self.max_speed);
                return Ok((positions, velocities));
            }
        }
        Err(MdError::GenerationFailed {
            attempts: self.max_attempts,
        })
    }
}

/// Sampling draws from `[-value, value)`, so the full width `2 * value` has to be finite as well.
fn check_extent(name: &'static str, value: f64, allow_zero: bool) -> Result<()> {
    let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if !in_range || !(2.0 * value).is_finite() {
        return Err(MdError::NonPositiveParameter { name, value });
    }
    Ok(())
}

fn sample_cube(rng: &mut StdRng, n: usize, half_width: f64) -> Vec<Vector3D> {
    if half_width == 0.0 {
        return vec![Vector3D::zeros(); n];
    }
    (0..n)
        .map(|_| {
            Vector3D::new(
                rng.gen_range(-half_width..half_width),
                rng.gen_range(-half_width..half_width),
                rng.gen_range(-half_width..half_width),
            )
        })
        .collect()
}
