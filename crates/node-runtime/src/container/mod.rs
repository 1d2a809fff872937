//! # Runtime Container
//!
//! Configuration loading and the service graph built from it.

pub mod config;

pub use config::{load_config, load_config_with, ConfigLoadError};
