use log::{error, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopWindowTarget;
use winit::window::Window;

use crate::controllers::viewer::{SessionStatus, ViewerEvent, ViewerSession};
use crate::input::gui::app::key_input::pressed_viewer_key;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

/// Translates winit events for one window into viewer events.
pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    session: ViewerSession<T>,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(window: &'static Window, session: ViewerSession<T>) -> Self {
        Self { window, session }
    }

    pub fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        let Event::WindowEvent { ref event, window_id } = event else {
            return;
        };
        if window_id != self.window.id() {
            return;
        }

        // Overlay is paint-only.
        let _ = self.session.surface_mut().handle_window_event(event);

        let viewer_event = match event {
            WindowEvent::CloseRequested => Some(ViewerEvent::Quit),
            WindowEvent::RedrawRequested => Some(ViewerEvent::Tick),
            WindowEvent::KeyboardInput { event, .. } => {
                pressed_viewer_key(event).map(ViewerEvent::KeyPress)
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.window.inner_size();
                self.resize(size.width, size.height)
            }
            _ => None,
        };

        let Some(viewer_event) = viewer_event else {
            return;
        };

        match self.session.step(viewer_event) {
            Ok(SessionStatus::Running) => {}
            Ok(SessionStatus::Exit) => {
                info!("exiting");
                elwt.exit();
            }
            Err(e) => {
                error!("render error: {e}");
                elwt.exit();
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Option<ViewerEvent> {
        if let Err(e) = self.session.surface_mut().resize(width, height) {
            error!("{e}");
            return None;
        }

        Some(ViewerEvent::Resize { width, height })
    }
}
