mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use crate::controllers::errors::surface::SurfaceError;
pub use crate::controllers::ports::display_surface::{DisplaySurface, PointBatch};
pub use crate::controllers::viewer::{
    FrameReport, Key, KeyBindings, KeyCommand, SessionStatus, ViewerEvent, ViewerSession,
};
pub use crate::core::attractor::{AizawaCoefficients, AttractorState, DEFAULT_TIME_STEP, rk4_step};
pub use crate::core::config::{ConfigError, ViewerConfig};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::render::{Projection, RenderLimits, Rgb};
pub use crate::presenters::software::SoftwareSurface;
pub use crate::storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
