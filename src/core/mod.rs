pub mod actions;
pub mod attractor;
pub mod config;
pub mod data;
pub mod render;
