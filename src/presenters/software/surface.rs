use log::debug;

use crate::controllers::errors::surface::SurfaceError;
use crate::controllers::ports::display_surface::{DisplaySurface, PointBatch};
use crate::core::actions::rasterize_points::rasterize_points;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::render::Projection;

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayText {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// In-memory display surface that rasterizes on the CPU.
///
/// Draw calls land in a back buffer; `swap_buffers` makes it the presented
/// frame and starts a fresh back buffer. Overlay text is kept as lines for the
/// host to draw in its own screen-space pass.
#[derive(Debug)]
pub struct SoftwareSurface {
    back: PixelBuffer,
    presented: PixelBuffer,
    overlay: Vec<OverlayText>,
    presented_overlay: Vec<OverlayText>,
    projection: Option<Projection>,
    window_size: (u32, u32),
    fullscreen_size: (u32, u32),
    fullscreen: bool,
    frames_presented: u64,
    redraw_requested: bool,
}

impl SoftwareSurface {
    pub fn new(width: u32, height: u32, fullscreen_size: (u32, u32)) -> Result<Self, SurfaceError> {
        let pixel_rect = Self::pixel_rect(width, height)?;

        Ok(Self {
            back: PixelBuffer::new(pixel_rect),
            presented: PixelBuffer::new(pixel_rect),
            overlay: Vec::new(),
            presented_overlay: Vec::new(),
            projection: None,
            window_size: (width, height),
            fullscreen_size,
            fullscreen: false,
            frames_presented: 0,
            redraw_requested: false,
        })
    }

    fn pixel_rect(width: u32, height: u32) -> Result<PixelRect, SurfaceError> {
        PixelRect::new(width, height).map_err(|error| SurfaceError::Resize {
            width,
            height,
            message: error.to_string(),
        })
    }

    /// Reallocates both buffers. Zero sizes are ignored, keeping the last
    /// valid buffers.
    pub fn resize_buffers(&mut self, width: u32, height: u32) {
        let Ok(pixel_rect) = Self::pixel_rect(width, height) else {
            return;
        };

        self.window_size = (width, height);
        if self.back.pixel_rect() != pixel_rect {
            self.back = PixelBuffer::new(pixel_rect);
            self.presented = PixelBuffer::new(pixel_rect);
        }
    }

    #[must_use]
    pub fn presented(&self) -> &PixelBuffer {
        &self.presented
    }

    #[must_use]
    pub fn presented_overlay(&self) -> &[OverlayText] {
        &self.presented_overlay
    }

    #[must_use]
    pub fn projection(&self) -> Option<Projection> {
        self.projection
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl DisplaySurface for SoftwareSurface {
    fn set_projection(&mut self, projection: Projection) {
        self.projection = Some(projection);
    }

    fn draw_points(&mut self, batch: PointBatch<'_>) {
        let Some(projection) = self.projection else {
            debug!("points drawn before a projection was set; skipping");
            return;
        };

        let clip_from_world = projection.matrix() * batch.model_view;
        rasterize_points(
            &mut self.back,
            batch.points,
            clip_from_world,
            batch.colour,
            batch.point_size,
        );
    }

    fn draw_overlay_text(&mut self, x: f32, y: f32, text: &str) {
        self.overlay.push(OverlayText {
            x,
            y,
            text: text.to_owned(),
        });
    }

    fn request_fullscreen(&mut self, enable: bool) {
        self.fullscreen = enable;
        if enable {
            let (width, height) = self.fullscreen_size;
            self.resize_buffers(width, height);
        }
    }

    fn resize_window(&mut self, width: u32, height: u32) {
        self.resize_buffers(width, height);
    }

    fn swap_buffers(&mut self) -> Result<(), SurfaceError> {
        std::mem::swap(&mut self.back, &mut self.presented);
        self.back.clear(Colour::BLACK);
        self.presented_overlay = std::mem::take(&mut self.overlay);
        self.frames_presented += 1;
        Ok(())
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn window_size(&self) -> (u32, u32) {
        self.window_size
    }
}

#[cfg(test)]
mod tests {
    use super::SoftwareSurface;
    use crate::controllers::ports::display_surface::{DisplaySurface, PointBatch};
    use crate::controllers::viewer::{Key, ViewerEvent, ViewerSession};
    use crate::core::config::ViewerConfig;
    use crate::core::render::{Projection, Rgb};
    use glam::{Mat4, Vec3};

    fn surface() -> SoftwareSurface {
        SoftwareSurface::new(64, 48, (128, 96)).unwrap()
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(SoftwareSurface::new(0, 48, (128, 96)).is_err());
    }

    #[test]
    fn draw_without_projection_draws_nothing() {
        let mut surface = surface();

        surface.draw_points(PointBatch {
            points: &[Vec3::ZERO],
            model_view: Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0)),
            colour: Rgb::DEFAULT,
            point_size: 1.0,
        });
        surface.swap_buffers().unwrap();

        assert_eq!(surface.presented().lit_pixel_count(), 0);
    }

    #[test]
    fn swap_presents_back_buffer_and_clears_it() {
        let mut surface = surface();
        surface.set_projection(Projection::perspective(24.0, 64.0 / 48.0, 1.0, 100.0));

        surface.draw_points(PointBatch {
            points: &[Vec3::ZERO],
            model_view: Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0)),
            colour: Rgb::DEFAULT,
            point_size: 1.0,
        });
        surface.draw_overlay_text(10.0, 10.0, "hello");
        surface.swap_buffers().unwrap();

        assert_eq!(surface.presented().lit_pixel_count(), 1);
        assert_eq!(surface.presented_overlay().len(), 1);
        assert_eq!(surface.frames_presented(), 1);

        surface.swap_buffers().unwrap();
        assert_eq!(surface.presented().lit_pixel_count(), 0);
        assert!(surface.presented_overlay().is_empty());
    }

    #[test]
    fn fullscreen_switches_to_configured_size() {
        let mut surface = surface();

        surface.request_fullscreen(true);
        assert_eq!(surface.window_size(), (128, 96));
        assert_eq!(surface.presented().pixel_rect().width(), 128);

        surface.request_fullscreen(false);
        surface.resize_window(64, 48);
        assert_eq!(surface.window_size(), (64, 48));
        assert!(!surface.is_fullscreen());
    }

    #[test]
    fn redraw_request_is_consumed_once() {
        let mut surface = surface();

        surface.request_redraw();

        assert!(surface.take_redraw_request());
        assert!(!surface.take_redraw_request());
    }

    #[test]
    fn session_renders_visible_attractor() {
        let config = ViewerConfig {
            initial_points_per_frame: 5_000,
            ..ViewerConfig::default()
        };
        let surface = SoftwareSurface::new(
            config.window_width,
            config.window_height,
            (config.fullscreen_width, config.fullscreen_height),
        )
        .unwrap();
        let mut session = ViewerSession::new(&config, surface).unwrap();

        session.step(ViewerEvent::Tick).unwrap();

        let surface = session.surface();
        assert!(surface.presented().lit_pixel_count() > 100);
        assert_eq!(surface.presented_overlay()[0].text, "Points: 5000  Point size: 1.0");
    }

    #[test]
    fn toggling_fullscreen_twice_restores_default_window() {
        let config = ViewerConfig::default();
        let surface = SoftwareSurface::new(960, 540, (1920, 1080)).unwrap();
        let mut session = ViewerSession::new(&config, surface).unwrap();

        session.step(ViewerEvent::KeyPress(Key::Character('f'))).unwrap();
        assert_eq!(session.surface().window_size(), (1920, 1080));

        session.step(ViewerEvent::KeyPress(Key::Character('f'))).unwrap();
        assert_eq!(session.surface().window_size(), (960, 540));
        assert_eq!(session.surface().presented().pixel_rect().width(), 960);
    }
}
