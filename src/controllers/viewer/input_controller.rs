use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::controllers::ports::display_surface::DisplaySurface;
use crate::controllers::viewer::context::ViewerContext;
use crate::controllers::viewer::key_bindings::KeyCommand;
use crate::core::render::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Exit,
}

/// Applies key commands to the viewer context. Effects are synchronous and
/// visible from the next frame.
#[derive(Debug)]
pub struct InputController<R: Rng = StdRng> {
    rng: R,
}

impl InputController<StdRng> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for InputController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> InputController<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn handle<S: DisplaySurface + ?Sized>(
        &mut self,
        command: KeyCommand,
        context: &mut ViewerContext,
        surface: &mut S,
    ) -> InputOutcome {
        debug!("key command: {:?}", command);
        let render = &mut context.render;

        match command {
            KeyCommand::Quit => {
                if render.is_fullscreen() {
                    Self::leave_fullscreen(context, surface);
                } else {
                    info!("quit requested");
                    return InputOutcome::Exit;
                }
            }
            KeyCommand::ToggleFullscreen => {
                if render.is_fullscreen() {
                    Self::leave_fullscreen(context, surface);
                } else {
                    render.set_fullscreen(true);
                    surface.request_fullscreen(true);
                    info!("entered fullscreen");
                }
            }
            KeyCommand::RandomizeColour => {
                render.set_colour(Rgb::random(&mut self.rng));
                debug!("colour set to {:?}", render.colour());
            }
            KeyCommand::ResetColour => render.reset_colour(),
            KeyCommand::ToggleRotation => render.toggle_rotation(),
            KeyCommand::ToggleOverlay => render.toggle_overlay(),
            KeyCommand::IncreasePoints => render.increase_points(),
            KeyCommand::DecreasePoints => render.decrease_points(),
            KeyCommand::IncreasePointSize => render.increase_point_size(),
            KeyCommand::DecreasePointSize => render.decrease_point_size(),
        }

        if matches!(
            command,
            KeyCommand::IncreasePoints
                | KeyCommand::DecreasePoints
                | KeyCommand::IncreasePointSize
                | KeyCommand::DecreasePointSize
        ) {
            debug!("{}", context.render.info_text());
        }

        InputOutcome::Continue
    }

    fn leave_fullscreen<S: DisplaySurface + ?Sized>(context: &mut ViewerContext, surface: &mut S) {
        let (width, height) = context.windowed_size;

        context.render.set_fullscreen(false);
        surface.request_fullscreen(false);
        surface.resize_window(width, height);
        info!("left fullscreen, window restored to {}x{}", width, height);
    }
}
