use super::Command;
use crate::error::{Result, WrapErr};
use index_core::IndexConfig;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct GenerateCommand {
    config: IndexConfig,
    docs_dir: PathBuf,
}

impl GenerateCommand {
    pub fn new(config: IndexConfig, docs_dir: PathBuf) -> Self {
        Self { config, docs_dir }
    }

    /// Builds the index stamped with `generated_at` and returns where it went.
    pub fn run(&self, generated_at: &str) -> Result<PathBuf> {
        index_core::generate(&self.docs_dir, &self.config, generated_at)
            .wrap_err_with(|| format!("Failed to index {}", self.docs_dir.display()))
    }
}

fn now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn confirmation(output: &Path) -> String {
    format!("generated {}", output.display())
}

impl Command for GenerateCommand {
    fn execute(&self) -> Result<()> {
        let output = self.run(&now())?;
        println!("{}", confirmation(&output));
        Ok(())
    }
}
