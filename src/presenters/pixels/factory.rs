use winit::{event_loop::EventLoop, window::Window};

use crate::controllers::errors::surface::SurfaceError;
use crate::core::config::ViewerConfig;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: &ViewerConfig,
    ) -> Result<PixelsPresenter, SurfaceError> {
        PixelsPresenter::new(
            window,
            event_loop,
            (config.fullscreen_width, config.fullscreen_height),
        )
    }
}
