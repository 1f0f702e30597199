pub mod errors;
pub mod viewer_config;

pub use errors::ConfigError;
pub use viewer_config::ViewerConfig;
