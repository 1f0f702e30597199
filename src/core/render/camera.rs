//! Perspective projection and the model-view transform for the point cloud.

use glam::{Mat4, Vec3};

/// Tilt about the x axis that stands the attractor's z axis on the screen's vertical.
const UPRIGHT_TILT_DEG: f32 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    #[must_use]
    pub fn perspective(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_deg,
            aspect,
            near,
            far,
        }
    }

    /// Same field of view and clip planes with the aspect ratio of a new
    /// `width` x `height` surface.
    #[must_use]
    pub fn with_surface_size(self, width: u32, height: u32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            ..self
        }
    }

    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Fixed camera pulled back along the depth axis, looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub distance: f32,
}

impl CameraRig {
    #[must_use]
    pub fn new(distance: f32) -> Self {
        Self { distance }
    }

    /// `translate(0, 0, -distance) * rot_x(90°) * rot_z(angle)`.
    #[must_use]
    pub fn model_view(&self, rotation_angle_deg: f64) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_x(UPRIGHT_TILT_DEG.to_radians())
            * Mat4::from_rotation_z((rotation_angle_deg as f32).to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::{CameraRig, Projection};
    use glam::{Vec3, Vec4};

    const EPSILON: f32 = 1e-5;

    fn assert_vec3_approx_eq(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, EPSILON),
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn attractor_z_axis_maps_to_screen_vertical() {
        let rig = CameraRig::new(10.0);

        let axis = rig.model_view(0.0).transform_vector3(Vec3::Z);

        assert_vec3_approx_eq(axis, Vec3::NEG_Y);
    }

    #[test]
    fn origin_is_pushed_back_by_distance() {
        let rig = CameraRig::new(10.0);

        let origin = rig.model_view(123.0).transform_point3(Vec3::ZERO);

        assert_vec3_approx_eq(origin, Vec3::new(0.0, 0.0, -10.0));
    }

    #[test]
    fn spin_rotates_about_the_vertical_axis() {
        let rig = CameraRig::new(0.0);

        let quarter = rig.model_view(90.0).transform_vector3(Vec3::X);
        let axis = rig.model_view(90.0).transform_vector3(Vec3::Z);

        assert_vec3_approx_eq(quarter, Vec3::Z);
        assert_vec3_approx_eq(axis, Vec3::NEG_Y);
    }

    #[test]
    fn resize_keeps_fov_and_clip_planes() {
        let projection = Projection::perspective(24.0, 960.0 / 540.0, 1.0, 100.0);

        let resized = projection.with_surface_size(800, 800);

        assert_eq!(resized.aspect, 1.0);
        assert_eq!(resized.fov_y_deg, 24.0);
        assert_eq!(resized.near, 1.0);
        assert_eq!(resized.far, 100.0);
    }

    #[test]
    fn point_in_front_of_camera_lands_inside_clip_volume() {
        let projection = Projection::perspective(24.0, 16.0 / 9.0, 1.0, 100.0);
        let rig = CameraRig::new(10.0);
        let clip = projection.matrix() * rig.model_view(0.0) * Vec4::new(0.1, 0.2, 0.3, 1.0);

        assert!(clip.w > 0.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && ndc.z.abs() <= 1.0);
    }
}
