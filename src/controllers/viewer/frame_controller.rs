use glam::Vec3;
use log::{trace, warn};

use crate::controllers::errors::surface::SurfaceError;
use crate::controllers::ports::display_surface::{DisplaySurface, PointBatch};
use crate::controllers::viewer::context::ViewerContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub points_drawn: usize,
    /// Spin angle the cloud was drawn at, before this frame's increment.
    pub rotation_angle_deg: f64,
    pub overlay_drawn: bool,
}

/// Runs one display cycle: integrate, draw, overlay, spin, present.
#[derive(Debug, Default)]
pub struct FrameController {
    points: Vec<Vec3>,
    divergence_reported: bool,
}

impl FrameController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The point cloud produced by the most recent frame.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn run_frame<S: DisplaySurface + ?Sized>(
        &mut self,
        context: &mut ViewerContext,
        surface: &mut S,
    ) -> Result<FrameReport, SurfaceError> {
        self.points.clear();
        context
            .attractor
            .extend_trajectory(context.render.points_per_frame(), &mut self.points);

        if !self.divergence_reported && !context.attractor.is_finite() {
            warn!(
                "trajectory became non-finite after {} steps",
                context.attractor.steps_taken()
            );
            self.divergence_reported = true;
        }

        let rotation_angle_deg = context.render.rotation_angle_deg();
        surface.draw_points(PointBatch {
            points: &self.points,
            model_view: context.camera.model_view(rotation_angle_deg),
            colour: context.render.colour(),
            point_size: context.render.point_size(),
        });

        let overlay_drawn = context.render.show_overlay();
        if overlay_drawn {
            let margin = context.overlay_margin;
            surface.draw_overlay_text(margin, margin, context.render.info_text());
        }

        context.render.advance_rotation();

        surface.swap_buffers()?;
        surface.request_redraw();

        trace!(
            "frame drawn: {} points at {:.1} deg",
            self.points.len(),
            rotation_angle_deg
        );

        Ok(FrameReport {
            points_drawn: self.points.len(),
            rotation_angle_deg,
            overlay_drawn,
        })
    }
}
