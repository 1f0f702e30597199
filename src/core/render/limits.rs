#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderLimits {
    pub min_points_per_frame: usize,
    pub max_points_per_frame: usize,
    pub points_step: usize,
    pub min_point_size: f32,
    pub max_point_size: f32,
    pub point_size_step: f32,
    pub rotation_increment_deg: f64,
}

impl RenderLimits {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.min_points_per_frame > 0
            && self.min_points_per_frame <= self.max_points_per_frame
            && self.points_step > 0
            && self.min_point_size.is_finite()
            && self.max_point_size.is_finite()
            && self.min_point_size > 0.0
            && self.min_point_size <= self.max_point_size
            && self.point_size_step.is_finite()
            && self.point_size_step > 0.0
            && self.rotation_increment_deg.is_finite()
    }

    #[must_use]
    pub fn clamp_points(&self, points: usize) -> usize {
        points.clamp(self.min_points_per_frame, self.max_points_per_frame)
    }

    #[must_use]
    pub fn clamp_point_size(&self, size: f32) -> f32 {
        size.clamp(self.min_point_size, self.max_point_size)
    }
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            min_points_per_frame: 500,
            max_points_per_frame: 100_000,
            points_step: 500,
            min_point_size: 0.2,
            max_point_size: 3.0,
            point_size_step: 0.1,
            rotation_increment_deg: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderLimits;

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = RenderLimits::default();

        assert!(limits.is_consistent());
        assert_eq!(limits.min_points_per_frame, 500);
        assert_eq!(limits.max_points_per_frame, 100_000);
        assert_eq!(limits.min_point_size, 0.2);
        assert_eq!(limits.max_point_size, 3.0);
    }

    #[test]
    fn inverted_point_bounds_are_inconsistent() {
        let limits = RenderLimits {
            min_points_per_frame: 2_000,
            max_points_per_frame: 1_000,
            ..RenderLimits::default()
        };

        assert!(!limits.is_consistent());
    }

    #[test]
    fn zero_size_step_is_inconsistent() {
        let limits = RenderLimits {
            point_size_step: 0.0,
            ..RenderLimits::default()
        };

        assert!(!limits.is_consistent());
    }

    #[test]
    fn clamps_respect_bounds() {
        let limits = RenderLimits::default();

        assert_eq!(limits.clamp_points(0), 500);
        assert_eq!(limits.clamp_points(250_000), 100_000);
        assert_eq!(limits.clamp_points(30_000), 30_000);
        assert_eq!(limits.clamp_point_size(0.0), 0.2);
        assert_eq!(limits.clamp_point_size(9.0), 3.0);
    }
}
