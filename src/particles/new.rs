use crate::constants::REFERENCE_MASS;
use crate::errors::{MdError, Result};
use crate::math::Vector3D;

/// A point particle.
///
/// `acceleration` and `prev_acceleration` are stored rather than derived on demand. Every force
/// evaluation refreshes both, so right after one `acceleration == force / mass` and
/// `prev_acceleration == prev_force / mass` hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub force: Vector3D,
    pub prev_force: Vector3D,
    pub acceleration: Vector3D,
    pub prev_acceleration: Vector3D,
    mass: f64,
}

impl Particle {
    pub fn new(position: Vector3D, velocity: Vector3D, mass: f64) -> Result<Self> {
        if !(mass > 0.0) {
            return Err(MdError::NonPositiveMass { value: mass });
        }
        Ok(Self {
            position,
            velocity,
            force: Vector3D::zeros(),
            prev_force: Vector3D::zeros(),
            acceleration: Vector3D::zeros(),
            prev_acceleration: Vector3D::zeros(),
            mass,
        })
    }

    /// A particle at rest with the reference mass.
    pub fn at_position(position: Vector3D) -> Self {
        Self {
            position,
            velocity: Vector3D::zeros(),
            force: Vector3D::zeros(),
            prev_force: Vector3D::zeros(),
            acceleration: Vector3D::zeros(),
            prev_acceleration: Vector3D::zeros(),
            mass: REFERENCE_MASS,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Moves the current force into `prev_force` and clears the accumulator.
    pub fn demote_force(&mut self) {
        self.prev_force = self.force;
        self.prev_acceleration = self.prev_force / self.mass;
        self.force = Vector3D::zeros();
    }

    pub fn derive_acceleration(&mut self) {
        self.acceleration = self.force / self.mass;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ensemble {
    pub particles: Vec<Particle>,
}

impl Ensemble {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Builds particles at rest with the reference mass, in the given order.
    pub fn from_positions(positions: Vec<Vector3D>) -> Self {
        Self::new(positions.into_iter().map(Particle::at_position).collect())
    }

    /// Velocity `i` belongs to particle `i`; the counts have to match exactly.
    pub fn set_velocities(&mut self, velocities: Vec<Vector3D>) -> Result<()> {
        if velocities.len() != self.particles.len() {
            return Err(MdError::VelocityCountMismatch {
                expected: self.particles.len(),
                found: velocities.len(),
            });
        }
        for (particle, velocity) in self.particles.iter_mut().zip(velocities) {
            particle.velocity = velocity;
        }
        Ok(())
    }

    /// Assigns the same mass to every particle. Only meant for construction, before any force
    /// evaluation has run.
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        if !(mass > 0.0) {
            return Err(MdError::NonPositiveMass { value: mass });
        }
        for particle in self.particles.iter_mut() {
            particle.mass = mass;
            particle.derive_acceleration();
            particle.prev_acceleration = particle.prev_force / mass;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn positions(&self) -> Vec<Vector3D> {
        self.particles.iter().map(|p| p.position).collect()
    }
}
