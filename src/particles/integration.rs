//! The two half-phases of a Velocity-Verlet step that do not involve forces.
use crate::particles::new::Ensemble;

/// Acceleration term used when advancing positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionUpdate {
    /// `x += v dt + a dt^2`, the formula the reference runs were produced with.
    #[default]
    Reference,
    /// `x += v dt + a dt^2 / 2`, the canonical Velocity-Verlet drift.
    Textbook,
}

impl PositionUpdate {
    pub fn from_str(name: &str) -> Option<Self> {
        match name {
            "reference" => Some(Self::Reference),
            "textbook" => Some(Self::Textbook),
            _ => None,
        }
    }

    fn acceleration_factor(self, dt: f64) -> f64 {
        match self {
            Self::Reference => dt * dt,
            Self::Textbook => 0.5 * dt * dt,
        }
    }
}

impl Ensemble {
    /// Advances positions with the current velocity and acceleration.
    pub fn update_positions(&mut self, dt: f64, scheme: PositionUpdate) {
        let a_factor = scheme.acceleration_factor(dt);
        for particle in self.particles.iter_mut() {
            particle.position += particle.velocity * dt + particle.acceleration * a_factor;
        }
    }

    /// Applies the average of the accelerations before and after the last position update.
    /// Must run after the force evaluation at the new positions.
    pub fn update_velocities(&mut self, dt: f64) {
        let half_dt = dt / 2.0;
        for particle in self.particles.iter_mut() {
            particle.velocity += (particle.acceleration + particle.prev_acceleration) * half_dt;
        }
    }
}
