// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config: GlobalConfig, ScaffoldConfig, PathsConfig, InstallConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::manifest::DEFAULT_SUPPORTED_CONTENT;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Simulate filesystem writes without making changes.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. Empty disables the file log.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

impl GlobalConfig {
    /// Returns the log file path, or `None` when file logging is off.
    #[must_use]
    pub fn log_file(&self) -> Option<&std::path::Path> {
        if self.log_file.as_os_str().is_empty() {
            None
        } else {
            Some(&self.log_file)
        }
    }
}

/// Defaults used by `new` when scaffolding a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Author prefix for `staticID` and the C# namespace. Empty means none.
    pub author: String,
    /// Initial mod version.
    pub version: String,
    /// Mod API version written to `mod_info.yaml`.
    pub api_version: String,
    /// Oldest game build the new mod claims to support.
    pub minimum_supported_build: String,
    /// Initial `supportedContent`.
    pub supported_content: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            version: "1.0.0".to_string(),
            api_version: "2".to_string(),
            minimum_supported_build: "469112".to_string(),
            supported_content: DEFAULT_SUPPORTED_CONTENT.to_string(),
        }
    }
}

/// Which project files `install` copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallConfig {
    /// Extra globs (relative to the project) copied flat into the target root,
    /// typically the built assembly.
    pub include: Vec<String>,
    /// Globs skipped during the project walk. Matched against both the
    /// relative path and the bare file name.
    pub exclude: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: ["*.cs", "*.csproj", "*.sln", "**/obj/**", ".gitignore"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
