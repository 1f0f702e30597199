use std::{error::Error, fmt};

/// Fatal failure reported by a display surface while presenting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    Present(String),
    Resize { width: u32, height: u32, message: String },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(message) => write!(f, "failed to present frame: {}", message),
            Self::Resize {
                width,
                height,
                message,
            } => write!(f, "failed to resize surface to {}x{}: {}", width, height, message),
        }
    }
}

impl Error for SurfaceError {}
