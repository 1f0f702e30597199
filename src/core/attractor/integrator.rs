use glam::DVec3;

use crate::core::attractor::coefficients::AizawaCoefficients;
use crate::core::attractor::vector_field::aizawa_field;

/// Fixed integration step. Trajectory length per frame, not wall-clock time,
/// is what the point count controls.
pub const DEFAULT_TIME_STEP: f64 = 0.1;

/// Advances `p` by one classical fourth-order Runge-Kutta step of size `dt`.
///
/// Never fails: a diverging trajectory yields non-finite components rather
/// than an error.
#[must_use]
pub fn rk4_step(p: DVec3, k: &AizawaCoefficients, dt: f64) -> DVec3 {
    let half_dt = 0.5 * dt;

    let k1 = aizawa_field(p, k);
    let k2 = aizawa_field(p + k1 * half_dt, k);
    let k3 = aizawa_field(p + k2 * half_dt, k);
    let k4 = aizawa_field(p + k3 * dt, k);

    p + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}
