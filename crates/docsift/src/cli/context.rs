//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use docsift_config::Config;
use docsift_index::{SearchIndex, build_from_config};
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
    /// Index built on first use.
    index: Option<SearchIndex>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            index: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init` and `inspect`, which work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            index: None,
        })
    }

    /// Ensures something is configured, optionally printing an init hint.
    pub fn require_content(&self, show_init_hint: bool) -> Result<(), ExitCode> {
        if self.config.is_empty() {
            eprintln!("error: no topics or examples defined in configuration");
            if show_init_hint {
                eprintln!(
                    "Run 'docsift init' to create a configuration file, then add topics or examples."
                );
            }
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }

    /// Returns the index, building it from the configuration on first use.
    pub fn index(&mut self, show_init_hint: bool) -> Result<&SearchIndex, ExitCode> {
        if self.index.is_none() {
            self.require_content(show_init_hint)?;
            let index = build_index_or_failure(&self.config)?;
            debug!(items = index.total_items(), "index ready");
            self.index = Some(index);
        }
        self.index.as_ref().ok_or(ExitCode::FAILURE)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Builds the index or exits with an error.
fn build_index_or_failure(config: &Config) -> Result<SearchIndex, ExitCode> {
    build_from_config(config).map_err(|e| {
        eprintln!("error: failed to build index: {e}");
        ExitCode::FAILURE
    })
}
