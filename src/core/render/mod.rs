//! Presentation state: tuning limits, colour, the mutable render parameters
//! and the camera that frames the point cloud.

pub mod camera;
pub mod colour;
pub mod limits;
pub mod params;

pub use camera::{CameraRig, Projection};
pub use colour::Rgb;
pub use limits::RenderLimits;
pub use params::RenderParameters;
