use winit::event::WindowEvent;

use crate::controllers::errors::surface::SurfaceError;
use crate::controllers::ports::display_surface::DisplaySurface;

/// A display surface that lives inside a winit window.
pub trait GuiPresenterPort: DisplaySurface {
    /// Forwards a window event to the overlay layer. Returns whether the
    /// overlay consumed it.
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool;

    /// Reallocates the framebuffer after the window changed size.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;
}
