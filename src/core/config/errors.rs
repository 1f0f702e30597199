use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroWindowSize { width: u32, height: u32 },
    ZeroFullscreenSize { width: u32, height: u32 },
    InvalidTimeStep(f64),
    InvalidFieldOfView(f32),
    InvalidClipPlanes { near: f32, far: f32 },
    InvalidCameraDistance(f32),
    NonFiniteCoefficients,
    NonFiniteInitialPosition,
    InconsistentLimits,
    InitialPointsOutOfRange { points: usize, min: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindowSize { width, height } => {
                write!(f, "window size must be positive: {}x{}", width, height)
            }
            Self::ZeroFullscreenSize { width, height } => {
                write!(f, "fullscreen size must be positive: {}x{}", width, height)
            }
            Self::InvalidTimeStep(dt) => {
                write!(f, "time step must be finite and positive, got {}", dt)
            }
            Self::InvalidFieldOfView(fov) => {
                write!(f, "field of view must lie in (0, 180) degrees, got {}", fov)
            }
            Self::InvalidClipPlanes { near, far } => {
                write!(f, "clip planes must satisfy 0 < near < far, got near {} far {}", near, far)
            }
            Self::InvalidCameraDistance(distance) => {
                write!(f, "camera distance must be finite, got {}", distance)
            }
            Self::NonFiniteCoefficients => write!(f, "attractor coefficients must be finite"),
            Self::NonFiniteInitialPosition => write!(f, "initial position must be finite"),
            Self::InconsistentLimits => write!(f, "render limits are inconsistent"),
            Self::InitialPointsOutOfRange { points, min, max } => {
                write!(f, "initial point count {} outside [{}, {}]", points, min, max)
            }
        }
    }
}

impl Error for ConfigError {}
