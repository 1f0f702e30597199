//! Port definitions for the viewer controllers.
//!
//! The display surface is the only outbound collaborator: it owns the window,
//! rasterizes what the controllers hand it and presents frames.

pub mod display_surface;

pub use display_surface::{DisplaySurface, PointBatch};
