//! Configuration and file management for gh-user-search
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) with environment overrides

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{ApiConfig, AppConfig, RepositoriesConfig, SearchConfig};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
