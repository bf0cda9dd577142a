// src/core/config.rs
pub mod loader;

pub use loader::{CONFIG_FILE_NAME, load_config_file};

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Database file used when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "checklist.sqlite";

/// Contents of a `.checklist.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub rule_source: Option<PathBuf>,
}

/// Settings for a single invocation, after every source has been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the `SQLite` file holding the checklist
    pub database: PathBuf,
    /// Rule asset for `install-rule`; `None` means the copy bundled with the executable
    pub rule_source: Option<PathBuf>,
}

impl Config {
    /// Merges the configuration sources for a run started in `cwd`.
    ///
    /// Precedence, highest first:
    /// - `database_override`, from `--database` or `AGENT_CHECKLIST_DB`
    /// - the nearest `.checklist.toml` in `cwd` or one of its ancestors
    /// - the defaults
    ///
    /// Relative paths in the config file resolve against the directory that
    /// holds it; a relative override resolves against `cwd`.
    ///
    /// # Errors
    ///
    /// This function may return an error if a config file exists but cannot
    /// be read or parsed.
    #[inline]
    pub fn resolve(cwd: &Path, database_override: Option<&Path>) -> Result<Self> {
        let (file_dir, file) = match load_config_file(cwd)? {
            Some((path, file)) => {
                let dir = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
                (dir, file)
            }
            None => (cwd.to_path_buf(), FileConfig::default()),
        };

        let database = match (database_override, file.database) {
            (Some(path), _) => cwd.join(path),
            (None, Some(path)) => file_dir.join(path),
            (None, None) => cwd.join(DEFAULT_DATABASE),
        };
        let rule_source = file.rule_source.map(|path| file_dir.join(path));

        let config = Self {
            database,
            rule_source,
        };
        tracing::info!(database = %config.database.display(), "resolved configuration");
        Ok(config)
    }
}
