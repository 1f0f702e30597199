use glam::DVec3;

use crate::core::attractor::coefficients::AizawaCoefficients;

/// Evaluates the Aizawa vector field at `p`.
///
/// ```text
/// dx/dt = (z - b)x - dy
/// dy/dt = dx + (z - b)y
/// dz/dt = c + az - z³/3 - (x² + y²)(1 + ez) + fzx³
/// ```
#[must_use]
pub fn aizawa_field(p: DVec3, k: &AizawaCoefficients) -> DVec3 {
    let DVec3 { x, y, z } = p;
    let z_shift = z - k.b;

    DVec3::new(
        z_shift * x - k.d * y,
        k.d * x + z_shift * y,
        k.c + k.a * z - (z * z * z) / 3.0 - (x * x + y * y) * (1.0 + k.e * z) + k.f * z * x * x * x,
    )
}

#[cfg(test)]
mod tests {
    use super::aizawa_field;
    use crate::core::attractor::coefficients::AizawaCoefficients;
    use glam::DVec3;

    const EPSILON: f64 = 1e-12;

    fn assert_vec_approx_eq(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).abs().max_element() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn field_at_origin_is_pure_vertical_drift() {
        let k = AizawaCoefficients::default();

        assert_vec_approx_eq(aizawa_field(DVec3::ZERO, &k), DVec3::new(0.0, 0.0, k.c));
    }

    #[test]
    fn field_at_initial_point_matches_hand_computation() {
        let k = AizawaCoefficients::default();

        // (0 - 0.7) * 0.1, 3.5 * 0.1, 0.6 - 0.01
        assert_vec_approx_eq(
            aizawa_field(DVec3::new(0.1, 0.0, 0.0), &k),
            DVec3::new(-0.07, 0.35, 0.59),
        );
    }

    #[test]
    fn cubic_terms_contribute_to_z() {
        let k = AizawaCoefficients::default();
        let p = DVec3::new(1.0, 0.0, 1.0);
        let expected_z = k.c + k.a - 1.0 / 3.0 - (1.0 + k.e) + k.f;

        assert!((aizawa_field(p, &k).z - expected_z).abs() <= EPSILON);
    }
}
