use std::path::{Path, PathBuf};

use crate::error::{AgentsMdError, Result};

use super::Config;

/// Config file looked up in the scanned repository root.
pub const LOCAL_CONFIG_NAME: &str = ".agents-md.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load `.agents-md.toml` from the repository root, or defaults when absent.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load_for_root(&self, root: &Path) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Loads configuration from TOML files.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn local_config_path(root: &Path) -> PathBuf {
        root.join(LOCAL_CONFIG_NAME)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load_for_root(&self, root: &Path) -> Result<Config> {
        let path = Self::local_config_path(root);
        if !self.fs.exists(&path) {
            tracing::debug!(path = %path.display(), "no local config, using defaults");
            return Ok(Config::default());
        }
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| AgentsMdError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
