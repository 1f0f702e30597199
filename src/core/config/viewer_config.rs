use glam::DVec3;

use crate::core::attractor::{AizawaCoefficients, DEFAULT_TIME_STEP};
use crate::core::config::errors::ConfigError;
use crate::core::render::{CameraRig, Projection, RenderLimits};

/// Startup configuration. Read once when a session is built; nothing mutates
/// it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub fullscreen_width: u32,
    pub fullscreen_height: u32,
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub camera_distance: f32,
    pub initial_position: DVec3,
    pub coefficients: AizawaCoefficients,
    pub time_step: f64,
    pub initial_points_per_frame: usize,
    pub show_overlay: bool,
    /// Distance of the overlay text from the top-left corner, in pixels.
    pub overlay_margin: f32,
    pub limits: RenderLimits,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: String::from("Aizawa Attractor"),
            window_width: 960,
            window_height: 540,
            fullscreen_width: 1920,
            fullscreen_height: 1080,
            fov_y_deg: 24.0,
            near: 1.0,
            far: 100.0,
            camera_distance: 10.0,
            initial_position: DVec3::new(0.1, 0.0, 0.0),
            coefficients: AizawaCoefficients::default(),
            time_step: DEFAULT_TIME_STEP,
            initial_points_per_frame: 40_000,
            show_overlay: true,
            overlay_margin: 10.0,
            limits: RenderLimits::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::ZeroWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }

        if self.fullscreen_width == 0 || self.fullscreen_height == 0 {
            return Err(ConfigError::ZeroFullscreenSize {
                width: self.fullscreen_width,
                height: self.fullscreen_height,
            });
        }

        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(self.time_step));
        }

        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(self.fov_y_deg));
        }

        if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(ConfigError::InvalidClipPlanes {
                near: self.near,
                far: self.far,
            });
        }

        if !self.camera_distance.is_finite() {
            return Err(ConfigError::InvalidCameraDistance(self.camera_distance));
        }

        if !self.coefficients.is_finite() {
            return Err(ConfigError::NonFiniteCoefficients);
        }

        if !self.initial_position.is_finite() {
            return Err(ConfigError::NonFiniteInitialPosition);
        }

        if !self.limits.is_consistent() {
            return Err(ConfigError::InconsistentLimits);
        }

        let min = self.limits.min_points_per_frame;
        let max = self.limits.max_points_per_frame;
        if !(min..=max).contains(&self.initial_points_per_frame) {
            return Err(ConfigError::InitialPointsOutOfRange {
                points: self.initial_points_per_frame,
                min,
                max,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        Projection::perspective(self.fov_y_deg, 1.0, self.near, self.far)
            .with_surface_size(self.window_width, self.window_height)
    }

    #[must_use]
    pub fn camera(&self) -> CameraRig {
        CameraRig::new(self.camera_distance)
    }
}
