//! Configuration Loader
//!
//! Environment-aware configuration loading built on the `config` crate. A file or
//! string source is layered with `PAGE_TEMPLATES__*` environment overrides, then
//! deserialized and validated.

use super::error::{ConfigResult, ConfigurationError};
use super::PageTemplatesConfig;
use crate::constants::env;
use ::config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loaded configuration together with where it came from
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PageTemplatesConfig,
    environment: String,
    source_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from a file. The format is inferred from the extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigurationError::config_file_not_found(path));
        }

        let builder = Config::builder().add_source(File::from(path));
        let config = Self::build(builder, &path.display().to_string())?;

        Ok(Self {
            config,
            environment: Self::detect_environment(),
            source_path: Some(path.to_path_buf()),
        })
    }

    /// Load configuration from an in-memory document
    pub fn load_from_str(contents: &str, format: FileFormat) -> ConfigResult<Self> {
        let builder = Config::builder().add_source(File::from_str(contents, format));
        let config = Self::build(builder, "inline")?;

        Ok(Self {
            config,
            environment: Self::detect_environment(),
            source_path: None,
        })
    }

    /// Wrap an already constructed configuration
    pub fn from_config(config: PageTemplatesConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            environment: Self::detect_environment(),
            source_path: None,
        })
    }

    fn build(
        builder: ::config::ConfigBuilder<::config::builder::DefaultState>,
        source_name: &str,
    ) -> ConfigResult<PageTemplatesConfig> {
        let config: PageTemplatesConfig = builder
            .add_source(
                Environment::with_prefix(env::CONFIG_PREFIX)
                    .prefix_separator(env::CONFIG_SEPARATOR)
                    .separator(env::CONFIG_SEPARATOR),
            )
            .build()
            .and_then(|built| built.try_deserialize::<PageTemplatesConfig>())
            .map_err(|e| ConfigurationError::load_error(source_name, e))?;

        config.validate()?;

        debug!(
            source = source_name,
            options = config.options.len(),
            routes = config.routes.len(),
            "Page template configuration loaded"
        );

        Ok(config)
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &PageTemplatesConfig {
        &self.config
    }

    /// Consume the manager, keeping only the configuration
    pub fn into_config(self) -> PageTemplatesConfig {
        self.config
    }

    /// Get the environment detected at load time
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Path of the file the configuration was read from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    fn detect_environment() -> String {
        crate::logging::get_environment().to_lowercase()
    }
}
