pub mod surface;

pub use surface::{OverlayText, SoftwareSurface};
