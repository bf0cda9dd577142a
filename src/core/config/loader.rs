// src/core/config/loader.rs
use crate::core::config::FileConfig;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".checklist.toml";

/// Loads the configuration from a `.checklist.toml` file starting from the
/// given directory and recursively checking parent directories until a file
/// is found.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for `.checklist.toml` files
///
/// # Returns
///
/// * `Ok(Some((path, config)))` with the file that was found and its contents
/// * `Ok(None)` if no directory up to the filesystem root holds one
///
/// # Errors
///
/// This function may return an error if:
/// * The `.checklist.toml` file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_config_file(dir: &Path) -> Result<Option<(PathBuf, FileConfig)>> {
    let mut current_dir = dir.to_path_buf();

    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            let content = fs::read_to_string(&config_file).with_context(|| {
                format!("Failed to read config file: {}", config_file.display())
            })?;

            let config: FileConfig = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config file: {}", config_file.display())
            })?;

            tracing::debug!(path = %config_file.display(), "loaded config file");
            return Ok(Some((config_file, config)));
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(None)
}
