use crate::math::{is_finite, Vector3D};
use crate::particles::new::Ensemble;

impl Ensemble {
    pub fn total_mass(&self) -> f64 {
        self.particles.iter().map(|p| p.mass()).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        let mut ek: f64 = 0.0;
        for particle in self.particles.iter() {
            ek += 0.5 * particle.mass() * particle.velocity.norm_squared();
        }
        ek
    }

    pub fn total_momentum(&self) -> Vector3D {
        let mut total_momentum = Vector3D::zeros();
        for particle in self.particles.iter() {
            total_momentum += particle.velocity * particle.mass();
        }
        total_momentum
    }

    /// Mass-weighted mean position; the origin for an empty ensemble.
    pub fn center_of_mass(&self) -> Vector3D {
        let total_mass = self.total_mass();
        if total_mass == 0.0 {
            return Vector3D::zeros();
        }
        let mut weighted = Vector3D::zeros();
        for particle in self.particles.iter() {
            weighted += particle.position * particle.mass();
        }
        weighted / total_mass
    }

    /// Index of the first particle whose position or velocity holds NaN or Inf.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.particles
            .iter()
            .position(|p| !is_finite(&p.position) || !is_finite(&p.velocity))
    }
}
