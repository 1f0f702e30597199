use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info};
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::{Fullscreen, Window};

use crate::controllers::errors::surface::SurfaceError;
use crate::controllers::ports::display_surface::{DisplaySurface, PointBatch};
use crate::core::render::Projection;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::software::{OverlayText, SoftwareSurface};

/// Window-backed display surface.
///
/// Points are rasterized into a `SoftwareSurface`, copied into the `pixels`
/// framebuffer on swap, and the overlay text is painted on top by egui in a
/// separate screen-space pass.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    surface: SoftwareSurface,
    fullscreen_size: (u32, u32),
    egui_ctx: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiRenderer,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        fullscreen_size: (u32, u32),
    ) -> Result<Self, SurfaceError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .map_err(|e| SurfaceError::Present(e.to_string()))?;
        let surface = SoftwareSurface::new(size.width, size.height, fullscreen_size)?;

        let egui_ctx = EguiContext::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );
        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            window,
            pixels,
            surface,
            fullscreen_size,
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    fn copy_presented_into_pixels_frame(&mut self) {
        let presented = self.surface.presented();
        let src = presented.buffer();
        let dest = self.pixels.frame_mut();

        if src.len() / 3 != dest.len() / 4 {
            debug!("presented frame does not match the pixels buffer; waiting for resize");
            return;
        }

        for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }
    }

    fn run_overlay_pass(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let lines: Vec<OverlayText> = self.surface.presented_overlay().to_vec();

        self.egui_ctx.run(raw_input, |ctx| {
            for (index, line) in lines.iter().enumerate() {
                egui::Area::new(egui::Id::new(("overlay", index)))
                    .fixed_pos(egui::pos2(line.x, line.y))
                    .interactable(false)
                    .show(ctx, |ui| {
                        ui.label(
                            egui::RichText::new(&line.text)
                                .monospace()
                                .color(egui::Color32::WHITE),
                        );
                    });
            }
        })
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        let output = self.run_overlay_pass();
        self.egui_state
            .handle_platform_output(self.window, output.platform_output);

        let pixels_per_point = output.pixels_per_point;
        let clipped_primitives = self.egui_ctx.tessellate(output.shapes, pixels_per_point);
        let textures_delta = output.textures_delta;
        let size = self.window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point,
        };
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("overlay"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the point cloud
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn fullscreen_mode(&self) -> Fullscreen {
        let (width, height) = self.fullscreen_size;
        let target = PhysicalSize::new(width, height);

        self.window
            .current_monitor()
            .and_then(|monitor| monitor.video_modes().find(|mode| mode.size() == target))
            .map(Fullscreen::Exclusive)
            .unwrap_or(Fullscreen::Borderless(None))
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(self.window, event).consumed
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        let resize_error = |e: pixels::TextureError| SurfaceError::Resize {
            width,
            height,
            message: e.to_string(),
        };
        self.pixels.resize_surface(width, height).map_err(resize_error)?;
        self.pixels.resize_buffer(width, height).map_err(resize_error)?;
        self.surface.resize_buffers(width, height);

        Ok(())
    }
}

impl DisplaySurface for PixelsPresenter {
    fn set_projection(&mut self, projection: Projection) {
        self.surface.set_projection(projection);
    }

    fn draw_points(&mut self, batch: PointBatch<'_>) {
        self.surface.draw_points(batch);
    }

    fn draw_overlay_text(&mut self, x: f32, y: f32, text: &str) {
        self.surface.draw_overlay_text(x, y, text);
    }

    fn request_fullscreen(&mut self, enable: bool) {
        if enable {
            self.window.set_fullscreen(Some(self.fullscreen_mode()));
        } else {
            self.window.set_fullscreen(None);
        }
    }

    fn resize_window(&mut self, width: u32, height: u32) {
        if let Some(size) = self.window.request_inner_size(LogicalSize::new(width, height)) {
            if let Err(e) = self.resize(size.width, size.height) {
                error!("{e}");
            }
        }
        info!("window resize to {}x{} requested", width, height);
    }

    fn swap_buffers(&mut self) -> Result<(), SurfaceError> {
        self.surface.swap_buffers()?;
        self.copy_presented_into_pixels_frame();
        self.render().map_err(|e| SurfaceError::Present(e.to_string()))
    }

    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }

    fn window_size(&self) -> (u32, u32) {
        self.surface.window_size()
    }
}
