// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(user)
//!   .add_toml_file_optional(cwd)
//!   .add_toml_file(--config)
//!   .add_toml_str()
//!   .with_env_prefix("ONI_MODS")
//!   .set_assignment("section.key=value")
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::Config;
use crate::error::{ConfigError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables.
    ///
    /// Keys contain underscores, so sections and keys are split on `__`.
    /// Values stay strings until deserialization, like `--set`, so
    /// `ONI_MODS_SCAFFOLD__VERSION=1.10` is not read as a float.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies a `section.key=value` assignment as given to `--set`.
    ///
    /// `/` is accepted as the section separator as well.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the assignment has no `=`,
    /// no section, or an empty key.
    pub fn set_assignment(self, assignment: &str) -> Result<Self> {
        let (key, value) = parse_assignment(assignment)?;
        self.set(&key, value)
            .with_context(|| format!("failed to apply --set {assignment}"))
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - An environment variable does not fit its key's type.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            ),
            None => self.builder,
        };
        let cfg = builder.build().map_err(load_error)?;
        let config: Config = cfg.try_deserialize().map_err(load_error)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_error(e: config::ConfigError) -> ConfigError {
    let path = match &e {
        config::ConfigError::FileParse { uri: Some(uri), .. } => uri.clone(),
        _ => "merged sources".to_string(),
    };
    ConfigError::LoadError {
        path,
        message: e.to_string(),
    }
}

/// Splits `section.key=value` (or `section/key=value`) into a dotted key and value.
pub(crate) fn parse_assignment(assignment: &str) -> std::result::Result<(String, String), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        section: "--set".to_string(),
        key: assignment.to_string(),
        message: message.to_string(),
    };

    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| invalid("expected section.key=value"))?;
    let key = key.trim().replace('/', ".");

    match key.split_once('.') {
        Some((section, name)) if !section.is_empty() && !name.is_empty() => {
            Ok((key.clone(), value.trim().to_string()))
        }
        _ => Err(invalid("key must be of the form section.key")),
    }
}
