//! Configuration module for Runway
//!
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RunwayPaths;
pub use settings::Settings;
