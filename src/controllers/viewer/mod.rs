//! Single-threaded viewer loop.
//!
//! # Architecture
//!
//! - **Input**: `ViewerEvent`s delivered by the host event loop
//! - **Output**: the `DisplaySurface` port
//! - **Core**: the attractor integrator and render parameters from `core/`
//!
//! All state lives in one `ViewerContext` owned by the session, so every
//! mutation and every frame is serialised through `ViewerSession::step`.

mod context;
mod frame_controller;
mod input_controller;
mod key_bindings;
mod session;
#[cfg(test)]
pub(crate) mod test_support;

pub use context::ViewerContext;
pub use frame_controller::{FrameController, FrameReport};
pub use input_controller::{InputController, InputOutcome};
pub use key_bindings::{Key, KeyBindings, KeyCommand};
pub use session::{SessionStatus, ViewerEvent, ViewerSession};
