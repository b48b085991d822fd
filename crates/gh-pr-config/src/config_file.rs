use std::{env, path::PathBuf};

use crate::paths;

const CONFIG_FILE: &str = ".gh-pr-render.toml";

/// Load config file content
///
/// Searches in order:
/// 1. `.gh-pr-render.toml` in the current working directory
/// 2. `~/.gh-pr-render.toml`
/// 3. `<config dir>/gh-pr-render/config.toml`
///
/// Returns the path and content of the first file found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some((path, content))
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home_config) = get_home_config_path() {
        candidates.push(home_config);
    }
    if let Ok(global) = paths::global_config_path() {
        candidates.push(global);
    }
    candidates
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.gh-pr-render.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
