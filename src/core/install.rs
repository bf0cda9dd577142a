// src/core/install.rs
use crate::errors::InstallError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the editor rule shipped with the program.
pub const RULE_FILE_NAME: &str = "agent-checklist.mdc";

/// Directory, relative to a project root, that the editor reads rules from.
pub const RULE_DEST_DIR: &str = ".cursor/rules";

/// Locates the rule asset bundled next to the running executable.
///
/// An install places `rules/agent-checklist.mdc` in the same directory as the
/// binary. `cargo install` does not copy it, so copy `rules/` from the source
/// tree next to the installed binary or set `rule_source` in `.checklist.toml`.
///
/// # Errors
///
/// Returns an error if the path of the current executable cannot be determined.
#[inline]
pub fn bundled_rule_path() -> Result<PathBuf, InstallError> {
    let exe = env::current_exe().map_err(|source| InstallError::Io {
        path: PathBuf::from("<current executable>"),
        source,
    })?;
    let dir = exe.parent().map_or_else(PathBuf::new, Path::to_path_buf);
    Ok(dir.join("rules").join(RULE_FILE_NAME))
}

/// Copies the rule at `source` into `<project_root>/.cursor/rules/`, creating
/// the directories on the way. An existing rule file is overwritten.
///
/// # Arguments
///
/// * `source` - The rule asset to copy
/// * `project_root` - The project that receives the rule, usually the current directory
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path the rule was written to
///
/// # Errors
///
/// This function may return an error if:
/// * `source` does not exist or is not a file
/// * The destination directory cannot be created
/// * The copy itself fails
#[inline]
pub fn install_rule(source: &Path, project_root: &Path) -> Result<PathBuf, InstallError> {
    if !source.is_file() {
        return Err(InstallError::AssetMissing {
            path: source.to_path_buf(),
        });
    }

    let dest_dir = project_root.join(RULE_DEST_DIR);
    fs::create_dir_all(&dest_dir).map_err(|source| InstallError::Io {
        path: dest_dir.clone(),
        source,
    })?;

    let dest = dest_dir.join(RULE_FILE_NAME);
    fs::copy(source, &dest).map_err(|source| InstallError::Io {
        path: dest.clone(),
        source,
    })?;

    tracing::debug!(from = %source.display(), to = %dest.display(), "installed rule");
    Ok(dest)
}
