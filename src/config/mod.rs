//! Configuration management for the charging console
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values.

pub mod app;
pub mod ui;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, BackendSettings, ServiceSettings, DEFAULT_API_PATH};
pub use ui::UiSettings;
