use winit::{event_loop::EventLoop, window::Window};

use crate::controllers::errors::surface::SurfaceError;
use crate::core::config::ViewerConfig;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: &ViewerConfig,
    ) -> Result<T, SurfaceError>;
}
