//! Render configuration
//!
//! Configuration loaded from .gh-pr-render.toml file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Render configuration loaded from .gh-pr-render.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Theme used for the generated stylesheet (e.g., "InspiredGitHub", "base16-ocean.dark")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Text shown when a patch has nothing to display
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Highlight code; when false, code is rendered as escaped plain text
    #[serde(default = "default_syntax_highlighting")]
    pub syntax_highlighting: bool,
}

fn default_theme() -> String {
    "InspiredGitHub".to_string()
}

fn default_placeholder() -> String {
    "No diff available".to_string()
}

fn default_syntax_highlighting() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            placeholder: default_placeholder(),
            syntax_highlighting: default_syntax_highlighting(),
        }
    }
}

impl RenderConfig {
    /// Load config from CWD first, then home directory, then the config dir, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded render config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                }
            }
        }

        log::debug!("Using default render config");
        Self::default()
    }

    /// Load config from an explicit path; missing or invalid files are errors
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
