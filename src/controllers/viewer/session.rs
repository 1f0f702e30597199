use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use crate::controllers::errors::surface::SurfaceError;
use crate::controllers::ports::display_surface::DisplaySurface;
use crate::controllers::viewer::context::ViewerContext;
use crate::controllers::viewer::frame_controller::{FrameController, FrameReport};
use crate::controllers::viewer::input_controller::{InputController, InputOutcome};
use crate::controllers::viewer::key_bindings::{Key, KeyBindings, KeyCommand};
use crate::core::config::{ConfigError, ViewerConfig};

/// Everything the host loop can deliver to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    Tick,
    KeyPress(Key),
    Resize { width: u32, height: u32 },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Exit,
}

/// Owns the viewer state and the surface, and consumes host events one at a
/// time on the host's thread.
pub struct ViewerSession<S: DisplaySurface, R: Rng = StdRng> {
    context: ViewerContext,
    frame: FrameController,
    input: InputController<R>,
    bindings: KeyBindings,
    surface: S,
    last_frame: Option<FrameReport>,
}

impl<S: DisplaySurface> ViewerSession<S, StdRng> {
    pub fn new(config: &ViewerConfig, surface: S) -> Result<Self, ConfigError> {
        Self::with_input(config, surface, InputController::new())
    }
}

impl<S: DisplaySurface, R: Rng> ViewerSession<S, R> {
    pub fn with_input(
        config: &ViewerConfig,
        surface: S,
        input: InputController<R>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut session = Self {
            context: ViewerContext::from_config(config),
            frame: FrameController::new(),
            input,
            bindings: KeyBindings::default(),
            surface,
            last_frame: None,
        };

        let (width, height) = session.surface.window_size();
        session.apply_resize(width, height);
        session.surface.set_projection(session.context.projection);

        info!(
            "session started: {} points per frame, dt {}, window {}x{}",
            session.context.render.points_per_frame(),
            session.context.attractor.dt(),
            width,
            height
        );
        for &command in KeyCommand::ALL {
            debug!(
                "{:?} -> {}",
                session.bindings.keys_for(command),
                command.description()
            );
        }

        Ok(session)
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn step(&mut self, event: ViewerEvent) -> Result<SessionStatus, SurfaceError> {
        match event {
            ViewerEvent::Tick => {
                let report = self.frame.run_frame(&mut self.context, &mut self.surface)?;
                self.last_frame = Some(report);
            }
            ViewerEvent::KeyPress(key) => {
                let Some(command) = self.bindings.command_for(key) else {
                    return Ok(SessionStatus::Running);
                };

                let outcome = self.input.handle(command, &mut self.context, &mut self.surface);
                if outcome == InputOutcome::Exit {
                    return Ok(SessionStatus::Exit);
                }

                let (width, height) = self.surface.window_size();
                self.apply_resize(width, height);
            }
            ViewerEvent::Resize { width, height } => {
                self.apply_resize(width, height);
            }
            ViewerEvent::Quit => {
                info!("window closed");
                return Ok(SessionStatus::Exit);
            }
        }

        Ok(SessionStatus::Running)
    }

    /// Recomputes the projection aspect for a new surface size. Zero-sized
    /// surfaces (minimised windows) and unchanged sizes are ignored.
    fn apply_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == self.context.surface_size {
            return;
        }

        self.context.surface_size = (width, height);
        self.context.projection = self.context.projection.with_surface_size(width, height);
        self.surface.set_projection(self.context.projection);
        debug!("projection aspect updated for {}x{}", width, height);
    }

    #[must_use]
    pub fn context(&self) -> &ViewerContext {
        &self.context
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn frame_controller(&self) -> &FrameController {
        &self.frame
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<FrameReport> {
        self.last_frame
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionStatus, ViewerEvent, ViewerSession};
    use crate::controllers::viewer::input_controller::InputController;
    use crate::controllers::viewer::key_bindings::{Key, KeyBindings, KeyCommand};
    use crate::controllers::viewer::test_support::{RecordingSurface, SurfaceCall};
    use crate::core::config::{ConfigError, ViewerConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type TestSession = ViewerSession<RecordingSurface, StdRng>;

    fn session_with(config: &ViewerConfig) -> TestSession {
        ViewerSession::with_input(
            config,
            RecordingSurface::new(config.window_width, config.window_height),
            InputController::with_rng(StdRng::seed_from_u64(5)),
        )
        .unwrap()
    }

    fn session() -> TestSession {
        session_with(&ViewerConfig {
            initial_points_per_frame: 1_000,
            ..ViewerConfig::default()
        })
    }

    #[test]
    fn construction_sets_initial_projection() {
        let session = session();

        let projection = session.surface().last_projection().unwrap();
        assert_eq!(projection.fov_y_deg, 24.0);
        assert!((projection.aspect - 960.0 / 540.0).abs() < 1e-6);
        assert_eq!((projection.near, projection.far), (1.0, 100.0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ViewerConfig {
            time_step: -0.1,
            ..ViewerConfig::default()
        };

        let result = ViewerSession::new(&config, RecordingSurface::new(960, 540));

        assert!(matches!(result, Err(ConfigError::InvalidTimeStep(_))));
    }

    #[test]
    fn tick_runs_one_frame() {
        let mut session = session();

        let status = session.step(ViewerEvent::Tick).unwrap();

        assert_eq!(status, SessionStatus::Running);
        assert_eq!(session.last_frame().unwrap().points_drawn, 1_000);
        assert_eq!(session.context().attractor.steps_taken(), 1_000);
    }

    #[test]
    fn key_press_effects_apply_on_next_tick() {
        let mut session = session();

        session.step(ViewerEvent::KeyPress(Key::ArrowUp)).unwrap();
        session.step(ViewerEvent::Tick).unwrap();

        assert_eq!(session.last_frame().unwrap().points_drawn, 1_500);
    }

    #[test]
    fn unmapped_key_is_ignored() {
        let mut session = session();
        let before = session.context().clone();

        let status = session.step(ViewerEvent::KeyPress(Key::Character('x'))).unwrap();

        assert_eq!(status, SessionStatus::Running);
        assert_eq!(*session.context(), before);
    }

    #[test]
    fn quit_key_exits_when_windowed() {
        let mut session = session();

        let status = session.step(ViewerEvent::KeyPress(Key::Character('q'))).unwrap();

        assert_eq!(status, SessionStatus::Exit);
    }

    #[test]
    fn escape_in_fullscreen_returns_to_window() {
        let mut session = session();

        session.step(ViewerEvent::KeyPress(Key::Character('f'))).unwrap();
        let projection = session.surface().last_projection().unwrap();
        assert!((projection.aspect - 1920.0 / 1080.0).abs() < 1e-6);

        let status = session.step(ViewerEvent::KeyPress(Key::Escape)).unwrap();

        assert_eq!(status, SessionStatus::Running);
        assert!(!session.context().render.is_fullscreen());
        assert_eq!(session.surface().size, (960, 540));
        let projection = session.surface().last_projection().unwrap();
        assert!((projection.aspect - 960.0 / 540.0).abs() < 1e-6);
    }

    #[test]
    fn resize_recomputes_aspect_with_same_fov() {
        let mut session = session();

        session
            .step(ViewerEvent::Resize { width: 500, height: 1000 })
            .unwrap();

        let projection = session.surface().last_projection().unwrap();
        assert_eq!(projection.aspect, 0.5);
        assert_eq!(projection.fov_y_deg, 24.0);
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut session = session();
        let projections_before =
            session.surface().count(|call| matches!(call, SurfaceCall::SetProjection(_)));

        session.step(ViewerEvent::Resize { width: 0, height: 0 }).unwrap();

        assert_eq!(
            session.surface().count(|call| matches!(call, SurfaceCall::SetProjection(_))),
            projections_before
        );
    }

    #[test]
    fn window_close_exits() {
        let mut session = session();

        assert_eq!(session.step(ViewerEvent::Quit).unwrap(), SessionStatus::Exit);
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let mut bindings = KeyBindings::empty();
        bindings.bind(Key::Character('x'), KeyCommand::Quit);
        let mut session = session().with_bindings(bindings);

        assert_eq!(
            session.step(ViewerEvent::KeyPress(Key::Character('q'))).unwrap(),
            SessionStatus::Running
        );
        assert_eq!(
            session.step(ViewerEvent::KeyPress(Key::Character('x'))).unwrap(),
            SessionStatus::Exit
        );
    }

    #[test]
    fn swap_failure_surfaces_as_error() {
        let mut session = session();
        session.surface_mut().fail_swap = true;

        assert!(session.step(ViewerEvent::Tick).is_err());
    }
}
