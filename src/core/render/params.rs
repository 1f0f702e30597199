use crate::core::render::colour::Rgb;
use crate::core::render::limits::RenderLimits;

const FULL_TURN_DEG: f64 = 360.0;

/// Mutable presentation state shared by the frame and input controllers.
///
/// Every bounded field is clamped on mutation; out-of-range commands stop at
/// the boundary instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
    limits: RenderLimits,
    points_per_frame: usize,
    point_size: f32,
    rotation_angle_deg: f64,
    rotation_increment_deg: f64,
    colour: Rgb,
    fullscreen: bool,
    show_overlay: bool,
    info_text: String,
}

impl RenderParameters {
    #[must_use]
    pub fn new(limits: RenderLimits, points_per_frame: usize, show_overlay: bool) -> Self {
        let mut params = Self {
            limits,
            points_per_frame: limits.clamp_points(points_per_frame),
            point_size: limits.clamp_point_size(1.0),
            rotation_angle_deg: 0.0,
            rotation_increment_deg: limits.rotation_increment_deg,
            colour: Rgb::DEFAULT,
            fullscreen: false,
            show_overlay,
            info_text: String::new(),
        };
        params.refresh_info_text();
        params
    }

    #[must_use]
    pub fn limits(&self) -> &RenderLimits {
        &self.limits
    }

    #[must_use]
    pub fn points_per_frame(&self) -> usize {
        self.points_per_frame
    }

    #[must_use]
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    #[must_use]
    pub fn rotation_angle_deg(&self) -> f64 {
        self.rotation_angle_deg
    }

    #[must_use]
    pub fn rotation_increment_deg(&self) -> f64 {
        self.rotation_increment_deg
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotation_increment_deg != 0.0
    }

    #[must_use]
    pub fn colour(&self) -> Rgb {
        self.colour
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn show_overlay(&self) -> bool {
        self.show_overlay
    }

    #[must_use]
    pub fn info_text(&self) -> &str {
        &self.info_text
    }

    pub fn increase_points(&mut self) {
        let next = self.points_per_frame.saturating_add(self.limits.points_step);
        self.set_points_per_frame(next);
    }

    pub fn decrease_points(&mut self) {
        let next = self.points_per_frame.saturating_sub(self.limits.points_step);
        self.set_points_per_frame(next);
    }

    pub fn set_points_per_frame(&mut self, points: usize) {
        self.points_per_frame = self.limits.clamp_points(points);
        self.refresh_info_text();
    }

    pub fn increase_point_size(&mut self) {
        self.set_point_size(self.point_size + self.limits.point_size_step);
    }

    pub fn decrease_point_size(&mut self) {
        self.set_point_size(self.point_size - self.limits.point_size_step);
    }

    pub fn set_point_size(&mut self, size: f32) {
        if size.is_nan() {
            return;
        }
        self.point_size = self.limits.clamp_point_size(size);
        self.refresh_info_text();
    }

    /// Adds the current increment and wraps into `[0, 360)`.
    pub fn advance_rotation(&mut self) {
        self.rotation_angle_deg =
            (self.rotation_angle_deg + self.rotation_increment_deg).rem_euclid(FULL_TURN_DEG);
    }

    /// Switches the increment between zero and the configured default.
    pub fn toggle_rotation(&mut self) {
        self.rotation_increment_deg = if self.is_rotating() {
            0.0
        } else {
            self.limits.rotation_increment_deg
        };
    }

    pub fn set_colour(&mut self, colour: Rgb) {
        self.colour = colour;
    }

    pub fn reset_colour(&mut self) {
        self.colour = Rgb::DEFAULT;
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    pub fn toggle_overlay(&mut self) {
        self.show_overlay = !self.show_overlay;
    }

    fn refresh_info_text(&mut self) {
        self.info_text = format!(
            "Points: {}  Point size: {:.1}",
            self.points_per_frame, self.point_size
        );
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self::new(RenderLimits::default(), 40_000, true)
    }
}
