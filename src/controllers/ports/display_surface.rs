use glam::{Mat4, Vec3};

use crate::controllers::errors::surface::SurfaceError;
use crate::core::render::{Projection, Rgb};

/// One point-primitive draw call.
#[derive(Debug, Clone, Copy)]
pub struct PointBatch<'a> {
    pub points: &'a [Vec3],
    /// Transform active for this draw call, applied before the projection.
    pub model_view: Mat4,
    pub colour: Rgb,
    pub point_size: f32,
}

/// Window, context and presentation owned by the host.
///
/// Creating the window is the adapter's constructor; frame, key and resize
/// callbacks arrive as `ViewerEvent`s instead of registered closures.
pub trait DisplaySurface {
    fn set_projection(&mut self, projection: Projection);
    fn draw_points(&mut self, batch: PointBatch<'_>);
    /// Screen-space text, drawn after and independently of the 3D pass.
    fn draw_overlay_text(&mut self, x: f32, y: f32, text: &str);
    fn request_fullscreen(&mut self, enable: bool);
    fn resize_window(&mut self, width: u32, height: u32);
    fn swap_buffers(&mut self) -> Result<(), SurfaceError>;
    fn request_redraw(&mut self);
    fn window_size(&self) -> (u32, u32);
}
