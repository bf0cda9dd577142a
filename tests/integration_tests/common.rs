// tests/integration_tests/common.rs
use agent_checklist::{Command, Config, Store, dispatch};
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Output of one dispatched command.
pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

/// A project directory with its own on-disk checklist.
pub struct Project {
    pub dir: TempDir,
    pub config: Config,
    pub store: Store,
}

impl Project {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let config = Config::resolve(dir.path(), None)?;
        let store = Store::open(&config.database)?;
        Ok(Self { dir, config, store })
    }

    pub fn run(&self, command: Command) -> Result<Output> {
        let mut out = Vec::new();
        let mut err = Vec::new();
        dispatch(
            &command,
            &self.store,
            &self.config,
            self.dir.path(),
            &mut out,
            &mut err,
        )?;
        Ok(Output {
            stdout: String::from_utf8(out)?,
            stderr: String::from_utf8(err)?,
        })
    }

    pub fn add(&self, task: &str) -> Result<Output> {
        self.run(Command::Add {
            task: task.to_owned(),
        })
    }

    pub fn list(&self) -> Result<String> {
        Ok(self.run(Command::List)?.stdout)
    }
}

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
