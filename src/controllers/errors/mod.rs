pub mod surface;

pub use surface::SurfaceError;
