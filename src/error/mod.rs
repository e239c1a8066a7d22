// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            OniError (16 bytes)
//!                   |
//!   +--------+------+------+--------+
//!   |        |             |        |
//!   v        v             v        v
//!  Cfg   Manifest      Scaffold    Fs
//!  Box     Box           Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Config    LoadError, MissingKey, InvalidValue
//!   Manifest  NotFound, Invalid, InvalidField, InvalidVersion, VersionOverflow
//!   Scaffold  InvalidName, DestinationExists
//!   Fs        NotFound, PermissionDenied, IoError
//!
//! Plain I/O failures are wrapped in `FsError` with the offending path.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`OniError`].
pub type OniResult<T> = std::result::Result<T, OniError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum OniError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Mod manifest error.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// Project scaffolding error.
    #[error("scaffold error: {0}")]
    Scaffold(#[from] Box<ScaffoldError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for OniError {
                fn from(err: $error) -> Self {
                    OniError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ManifestError => Manifest,
    ScaffoldError => Scaffold,
    FsError => Fs,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read, parse or deserialize configuration.
    #[error("failed to load config from {path}: {message}")]
    LoadError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Manifest Errors ---

/// Errors raised while reading, writing or checking `mod.yaml` / `mod_info.yaml`.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file does not exist.
    #[error("manifest not found: {path}")]
    NotFound { path: String },

    /// Document is not valid YAML or does not match the schema
    /// (missing required field, wrong type).
    #[error("invalid {file}: {message}")]
    Invalid { file: String, message: String },

    /// A field is present but its value is unacceptable.
    #[error("invalid value for '{field}' in {file}: {message}")]
    InvalidField {
        file: String,
        field: String,
        message: String,
    },

    /// Version string is not a dotted numeric version.
    #[error("invalid version '{0}': expected 1 to 4 dot-separated numbers")]
    InvalidVersion(String),

    /// Bumping would overflow a version component.
    #[error("cannot bump version '{0}': component would overflow")]
    VersionOverflow(String),
}

// --- Scaffold Errors ---

/// Project scaffolding errors.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project name is not a single folder name or yields no C# identifier.
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Destination already exists and is not empty.
    #[error("destination '{0}' already exists and is not empty (use --force to overwrite)")]
    DestinationExists(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised on `path`.
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::IoError { path, source },
        }
    }
}
