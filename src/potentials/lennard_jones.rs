use crate::errors::{MdError, Result};
use crate::math::Vector3D;
use crate::particles::Particle;
use crate::potentials::potential::{PairPotential, PotentialManager};

/// Lennard-Jones interaction with length scale `sigma` and energy scale `epsilon`.
///
/// The pair energy is `U(r) = epsilon/2 * ((sigma/r)^12 - (sigma/r)^6)` and the force on `i`
/// is `c * rij` with `c = epsilon/2 * (12 sigma^12 / r^14 - 6 sigma^6 / r^8)`, which is exactly
/// `-grad_i U`. Coincident particles are not guarded against: `r = 0` yields Inf/NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJones {
    epsilon: f64,
    sigma: f64,
    // epsilon/2, 12 sigma^12, -6 sigma^6
    coefficients: [f64; 3],
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64) -> Result<Self> {
        if !(epsilon > 0.0) {
            return Err(MdError::NonPositiveParameter { name: "epsilon", value: epsilon });
        }
        if !(sigma > 0.0) {
            return Err(MdError::NonPositiveParameter { name: "sigma", value: sigma });
        }
        let coefficients = [
            epsilon / 2.0,
            12.0 * sigma.powi(12),
            -6.0 * sigma.powi(6),
        ];
        Ok(Self {
            epsilon,
            sigma,
            coefficients,
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Separation at which the pair force vanishes, `sigma * 2^(1/6)`. Closer pairs repel.
    pub fn equilibrium_distance(&self) -> f64 {
        self.sigma * 2f64.powf(1.0 / 6.0)
    }
}

impl PairPotential for LennardJones {
    fn pair_force(&self, rij: &Vector3D) -> Vector3D {
        let r = rij.norm();
        let [c0, c1, c2] = self.coefficients;
        let c = c0 * (c1 * r.powi(-14) + c2 * r.powi(-8));
        rij * c
    }

    fn pair_energy(&self, rij: &Vector3D) -> f64 {
        let inv_rij2 = 1.0 / rij.norm_squared();
        let attraction = (self.sigma.powi(2) * inv_rij2).powi(3);
        let repulsion = attraction.powi(2);
        0.5 * self.epsilon * (repulsion - attraction)
    }
}

/// Direct evaluation over every ordered pair.
///
/// Each interaction is computed twice, once from either side. This is the default evaluator and
/// the one whose results are reproducible bit for bit.
pub struct LennardJonesManager {
    pub potential: LennardJones,
}

impl LennardJonesManager {
    pub fn new(potential: LennardJones) -> Self {
        Self { potential }
    }
}

impl PotentialManager for LennardJonesManager {
    fn pair_potential(&self) -> &dyn PairPotential {
        &self.potential
    }

    fn accumulate_forces(&self, particles: &mut [Particle]) {
        let n = particles.len();
        for i in 0..n {
            let mut force_i = Vector3D::zeros();
            for j in 0..n {
                if i == j {
                    continue;
                }
                let rij = particles[i].position - particles[j].position;
                force_i += self.potential.pair_force(&rij);
            }
            particles[i].force += force_i;
        }
    }
}

/// Evaluation over unordered pairs, applying equal and opposite forces.
///
/// Does half the pair work of [`LennardJonesManager`]. Since the force law is odd in `rij` the
/// two agree up to floating point summation order, not bit for bit.
pub struct LennardJonesPairManager {
    pub potential: LennardJones,
}

impl LennardJonesPairManager {
    pub fn new(potential: LennardJones) -> Self {
        Self { potential }
    }
}

impl PotentialManager for LennardJonesPairManager {
    fn pair_potential(&self) -> &dyn PairPotential {
        &self.potential
    }

    fn accumulate_forces(&self, particles: &mut [Particle]) {
        let n = particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let rij = particles[i].position - particles[j].position;
                let force_ij = self.potential.pair_force(&rij);
                particles[i].force += force_ij;
                particles[j].force -= force_ij;
            }
        }
    }
}
