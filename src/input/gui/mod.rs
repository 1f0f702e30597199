//! Windowed host for the viewer.
//!
//! winit owns the window and the event loop, pixels owns the framebuffer and
//! egui paints the overlay text.

pub mod app;
pub mod commands;
