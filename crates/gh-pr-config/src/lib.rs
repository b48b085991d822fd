//! Configuration for gh-pr-render
//!
//! This crate provides:
//! - Config and data directory paths
//! - Configuration file discovery (TOML)
//! - Render configuration (RenderConfig)

pub mod config_file;
pub mod paths;
pub mod render_config;

pub use config_file::load_config_file;
pub use paths::{config_dir, global_config_path};
pub use render_config::RenderConfig;
