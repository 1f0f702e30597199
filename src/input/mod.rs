//! Input adapters for the attractor viewer.
//!
//! Each adapter receives events from a host (a window system, a terminal)
//! and translates them into `ViewerEvent`s for a session.

#[cfg(feature = "gui")]
pub mod gui;
