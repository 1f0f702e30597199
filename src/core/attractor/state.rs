use glam::{DVec3, Vec3};

use crate::core::attractor::coefficients::AizawaCoefficients;
use crate::core::attractor::integrator::rk4_step;

/// The single, never-restarted trajectory of the attractor.
#[derive(Debug, Clone, PartialEq)]
pub struct AttractorState {
    position: DVec3,
    coefficients: AizawaCoefficients,
    dt: f64,
    steps_taken: u64,
}

impl AttractorState {
    #[must_use]
    pub fn new(position: DVec3, coefficients: AizawaCoefficients, dt: f64) -> Self {
        Self {
            position,
            coefficients,
            dt,
            steps_taken: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    #[must_use]
    pub fn coefficients(&self) -> &AizawaCoefficients {
        &self.coefficients
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
    }

    pub fn advance(&mut self) -> DVec3 {
        self.position = rk4_step(self.position, &self.coefficients, self.dt);
        self.steps_taken += 1;
        self.position
    }

    /// Appends the next `count` trajectory points to `out`, continuing from
    /// wherever the previous call stopped.
    pub fn extend_trajectory(&mut self, count: usize, out: &mut Vec<Vec3>) {
        out.reserve(count);

        for _ in 0..count {
            let p = self.advance();
            out.push(p.as_vec3());
        }
    }
}
