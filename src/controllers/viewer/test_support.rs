use glam::{Mat4, Vec3};

use crate::controllers::errors::surface::SurfaceError;
use crate::controllers::ports::display_surface::{DisplaySurface, PointBatch};
use crate::core::render::{Projection, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetProjection(Projection),
    DrawPoints {
        count: usize,
        last: Option<Vec3>,
        model_view: Mat4,
        colour: Rgb,
        point_size: f32,
    },
    DrawOverlayText { x: f32, y: f32, text: String },
    RequestFullscreen(bool),
    ResizeWindow { width: u32, height: u32 },
    SwapBuffers,
    RequestRedraw,
}

/// Records every call; window size follows fullscreen and resize requests.
#[derive(Debug)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub size: (u32, u32),
    pub fullscreen_size: (u32, u32),
    pub fail_swap: bool,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            calls: Vec::new(),
            size: (width, height),
            fullscreen_size: (1920, 1080),
            fail_swap: false,
        }
    }

    pub fn count(&self, predicate: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    pub fn last_projection(&self) -> Option<Projection> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetProjection(projection) => Some(*projection),
            _ => None,
        })
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_projection(&mut self, projection: Projection) {
        self.calls.push(SurfaceCall::SetProjection(projection));
    }

    fn draw_points(&mut self, batch: PointBatch<'_>) {
        self.calls.push(SurfaceCall::DrawPoints {
            count: batch.points.len(),
            last: batch.points.last().copied(),
            model_view: batch.model_view,
            colour: batch.colour,
            point_size: batch.point_size,
        });
    }

    fn draw_overlay_text(&mut self, x: f32, y: f32, text: &str) {
        self.calls.push(SurfaceCall::DrawOverlayText {
            x,
            y,
            text: text.to_owned(),
        });
    }

    fn request_fullscreen(&mut self, enable: bool) {
        if enable {
            self.size = self.fullscreen_size;
        }
        self.calls.push(SurfaceCall::RequestFullscreen(enable));
    }

    fn resize_window(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.calls.push(SurfaceCall::ResizeWindow { width, height });
    }

    fn swap_buffers(&mut self) -> Result<(), SurfaceError> {
        self.calls.push(SurfaceCall::SwapBuffers);
        if self.fail_swap {
            return Err(SurfaceError::Present(String::from("device lost")));
        }
        Ok(())
    }

    fn request_redraw(&mut self) {
        self.calls.push(SurfaceCall::RequestRedraw);
    }

    fn window_size(&self) -> (u32, u32) {
        self.size
    }
}
