//! Configuration loader with multi-source merging
//!
//! Precedence, lowest first:
//! 1. built-in defaults
//! 2. `coursereg.toml` in the config directory
//! 3. `COURSEREG_*` environment variables (`__` separates nested keys,
//!    e.g. `COURSEREG_LOG__LEVEL=debug`)

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use coursereg_core::logging_facility::Profile;
use coursereg_store::FileStoreConfig;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "coursereg.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Effective application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub students_file: PathBuf,
    pub courses_file: PathBuf,
    pub enrollments_file: PathBuf,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: Profile,
}

impl Default for AppConfig {
    fn default() -> Self {
        let files = FileStoreConfig::default();
        Self {
            students_file: files.students_file,
            courses_file: files.courses_file,
            enrollments_file: files.enrollments_file,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Profile::Development,
        }
    }
}

impl AppConfig {
    /// Data file locations for the flat-file stores
    pub fn store_config(&self) -> FileStoreConfig {
        FileStoreConfig {
            students_file: self.students_file.clone(),
            courses_file: self.courses_file.clone(),
            enrollments_file: self.enrollments_file.clone(),
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.students_file,
            &mut self.courses_file,
            &mut self.enrollments_file,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    fn validate(&mut self) -> Result<()> {
        self.log.level = self.log.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&self.log.level.as_str()) {
            bail!(
                "log.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log.level
            );
        }
        for (key, path) in [
            ("students_file", &self.students_file),
            ("courses_file", &self.courses_file),
            ("enrollments_file", &self.enrollments_file),
        ] {
            if path.as_os_str().is_empty() {
                bail!("{} must not be empty", key);
            }
        }
        Ok(())
    }
}

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    config_dir: PathBuf,
    env_prefix: String,
    env_source: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    /// Create a loader rooted at the current directory
    pub fn new() -> Self {
        Self {
            config_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "COURSEREG".to_string(),
            env_source: None,
        }
    }

    /// Set the directory holding `coursereg.toml`; relative data paths resolve against it
    pub fn with_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Read environment overrides from `vars` instead of the process environment
    #[cfg(test)]
    pub fn with_env_source(mut self, vars: config::Map<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Load configuration from all sources with proper precedence
    ///
    /// # Errors
    /// Fails if the config file is malformed or a value is out of range.
    pub fn load(self) -> Result<AppConfig> {
        let mut builder = config::Config::builder();

        // 1. Built-in defaults
        let defaults = AppConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Config file
        let config_file = self.config_dir.join(CONFIG_FILE_NAME);
        if config_file.exists() {
            builder = builder.add_source(
                config::File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 3. Environment variables (COURSEREG_*)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .source(self.env_source),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;
        app_config.resolve_paths(&self.config_dir);

        Ok(app_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
