// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for oni-mods.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <config dir>/oni-mods/oni-mods.toml
//! 3. ./oni-mods.toml
//! 4. --config FILE (repeatable)
//! 5. ONI_MODS_* env vars
//! 6. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ONI_MODS_GLOBAL__DRY=true          → global.dry = true
//! ONI_MODS_SCAFFOLD__AUTHOR=PeterHan → scaffold.author = "PeterHan"
//! ONI_MODS_PATHS__MODS_DIR=/mods     → paths.mods_dir = "/mods"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::manifest::is_valid_static_id;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, InstallConfig, ScaffoldConfig};

/// Name of the configuration file looked up in the user config dir and cwd.
pub const CONFIG_FILE_NAME: &str = "oni-mods.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ONI_MODS";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Defaults for new projects.
    pub scaffold: ScaffoldConfig,
    /// Game paths.
    pub paths: PathsConfig,
    /// Install file selection.
    pub install: InstallConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oni_mods::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("oni-mods.toml")
    ///     .with_env_prefix("ONI_MODS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// User-level config file path, if the platform has a config dir.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("oni-mods").join(CONFIG_FILE_NAME))
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if `scaffold.author` would make an
    /// invalid `staticID` or if an install glob fails to compile.
    pub fn validate(&self) -> Result<()> {
        let author = &self.scaffold.author;
        if !author.is_empty() && !is_valid_static_id(author) {
            return Err(ConfigError::InvalidValue {
                section: "scaffold".to_string(),
                key: "author".to_string(),
                message: format!(
                    "'{author}' may only contain ASCII letters, digits, '_', '.' and '-', and must not start with '.'"
                ),
            }
            .into());
        }

        for (key, patterns) in [
            ("include", &self.install.include),
            ("exclude", &self.install.exclude),
        ] {
            for pattern in patterns {
                if let Err(e) = wax::Glob::new(pattern) {
                    return Err(ConfigError::InvalidValue {
                        section: "install".to_string(),
                        key: key.to_string(),
                        message: format!("invalid glob '{pattern}': {e}"),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_scaffold_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_install_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_scaffold_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("scaffold.author".into(), self.scaffold.author.clone());
        options.insert("scaffold.version".into(), self.scaffold.version.clone());
        options.insert(
            "scaffold.api_version".into(),
            self.scaffold.api_version.clone(),
        );
        options.insert(
            "scaffold.minimum_supported_build".into(),
            self.scaffold.minimum_supported_build.clone(),
        );
        options.insert(
            "scaffold.supported_content".into(),
            self.scaffold.supported_content.clone(),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let mods_dir = self.paths.mods_dir.as_ref().map_or_else(
            || {
                paths::default_mods_dir()
                    .map_or_else(String::new, |p| format!("{} (default)", p.display()))
            },
            |p| p.display().to_string(),
        );
        options.insert("paths.mods_dir".into(), mods_dir);
    }

    fn format_install_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "install.include".into(),
            self.install.include.join(", "),
        );
        options.insert(
            "install.exclude".into(),
            self.install.exclude.join(", "),
        );
    }
}
