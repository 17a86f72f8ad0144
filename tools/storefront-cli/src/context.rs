//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for a shop session.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

/// Effective session settings after flag overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: PathBuf,
    pub page_size: usize,
}

impl Context {
    /// Load context from config file.
    ///
    /// An explicit `config_path` must load; a discovered file that fails to
    /// parse is reported and skipped.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(Path::new(path))?
        } else {
            Self::find_config(&cwd, &output).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path, output: &Output) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if !config_path.exists() {
                    continue;
                }
                match CliConfig::load(&config_path) {
                    Ok(config) => {
                        output.debug(&format!("Using config {}", config_path.display()));
                        return Some(config);
                    }
                    Err(e) => output.warn(&format!("Ignoring config: {:#}", e)),
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Merge flag overrides into the loaded config.
    pub fn settings(&self, catalog: Option<&Path>, page_size: Option<usize>) -> Settings {
        let catalog_path = catalog.unwrap_or(self.config.catalog.path.as_path());
        Settings {
            catalog_path: self.resolve_path(catalog_path),
            page_size: page_size.unwrap_or(self.config.display.page_size).max(1),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
