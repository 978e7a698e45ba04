//! Configuration module for the finance tracker
//!
//! This module provides configuration management including:
//! - Per-user config directory resolution
//! - Loading, defaulting and merging of config.yaml

pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::Config;
