use std::error::Error;
use std::marker::PhantomData;

use log::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::viewer::ViewerSession;
use crate::core::config::ViewerConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until the viewer exits.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        self.config.validate()?;

        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.title.as_str())
                .with_inner_size(LogicalSize::new(
                    self.config.window_width,
                    self.config.window_height,
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, &event_loop, &self.config)?;
        let session = ViewerSession::new(&self.config, presenter)?;
        let mut app = GuiApp::new(window, session);

        info!("opened {} window", self.config.title);
        window.request_redraw();

        event_loop.run(move |event, elwt| app.handle_event(event, elwt))?;

        Ok(())
    }
}
