// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! mods_dir resolution:
//!   --mods-dir  >  paths.mods_dir  >  platform default
//!
//! platform default (dev mods):
//!   windows  <Documents>/Klei/OxygenNotIncluded/mods/Dev
//!   macos    <Home>/Library/Application Support/unity.Klei.Oxygen Not Included/mods/Dev
//!   linux    <Config>/unity3d/Klei/Oxygen Not Included/mods/Dev
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Game-related paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory the game scans for local (non-Workshop) mods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods_dir: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolves the dev mods directory.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if nothing is configured and the
    /// platform default cannot be determined.
    pub fn resolve_mods_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.mods_dir {
            return Ok(dir.clone());
        }
        default_mods_dir().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "mods_dir".to_string(),
            }
            .into()
        })
    }
}

/// Platform default dev mods directory, if the base directory is known.
#[must_use]
pub fn default_mods_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        dirs::document_dir().map(|d| d.join("Klei").join("OxygenNotIncluded"))
    } else if cfg!(target_os = "macos") {
        dirs::home_dir().map(|d| {
            d.join("Library")
                .join("Application Support")
                .join("unity.Klei.Oxygen Not Included")
        })
    } else {
        dirs::config_dir().map(|d| d.join("unity3d").join("Klei").join("Oxygen Not Included"))
    }
    .map(|game| game.join("mods").join("Dev"))
}
