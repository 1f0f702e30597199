use crate::core::attractor::AttractorState;
use crate::core::config::ViewerConfig;
use crate::core::render::{CameraRig, Projection, RenderParameters};

/// Everything one viewer mutates, passed by reference into the frame and
/// input controllers.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerContext {
    pub attractor: AttractorState,
    pub render: RenderParameters,
    pub camera: CameraRig,
    pub projection: Projection,
    /// Window size restored when leaving fullscreen.
    pub windowed_size: (u32, u32),
    /// Size the projection was last computed for.
    pub surface_size: (u32, u32),
    pub overlay_margin: f32,
}

impl ViewerContext {
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            attractor: AttractorState::new(
                config.initial_position,
                config.coefficients,
                config.time_step,
            ),
            render: RenderParameters::new(
                config.limits,
                config.initial_points_per_frame,
                config.show_overlay,
            ),
            camera: config.camera(),
            projection: config.projection(),
            windowed_size: (config.window_width, config.window_height),
            surface_size: (config.window_width, config.window_height),
            overlay_margin: config.overlay_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewerContext;
    use crate::core::config::ViewerConfig;
    use glam::DVec3;

    #[test]
    fn context_starts_from_config() {
        let config = ViewerConfig {
            initial_points_per_frame: 30_000,
            ..ViewerConfig::default()
        };

        let context = ViewerContext::from_config(&config);

        assert_eq!(context.attractor.position(), DVec3::new(0.1, 0.0, 0.0));
        assert_eq!(context.attractor.steps_taken(), 0);
        assert_eq!(context.render.points_per_frame(), 30_000);
        assert_eq!(context.windowed_size, (960, 540));
        assert_eq!(context.camera.distance, 10.0);
    }
}
