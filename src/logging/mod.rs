// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `tracing` setup for the CLI.
//!
//! ```text
//!              registry
//!       ┌─────────┴──────────┐
//!   stderr layer        file layer (--log-file)
//!   output_log_level    file_log_level
//!   ANSI, no target     plain, target, span close
//!                            │
//!                        LogGuard flushes on drop
//! ```
//!
//! | level | name   | oni_mods | dependencies |
//! |-------|--------|----------|--------------|
//! | 0     | silent | off      | off          |
//! | 1     | error  | error    | error        |
//! | 2     | warn   | warn     | warn         |
//! | 3     | info   | info     | warn         |
//! | 4     | debug  | debug    | warn         |
//! | 5     | trace  | trace    | warn         |
//! | 6     | dump   | trace    | trace        |

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::error::{ConfigError, Result};

/// `EnvFilter` directives indexed by level.
const FILTERS: [&str; 7] = [
    "off",
    "error",
    "warn",
    "warn,oni_mods=info",
    "warn,oni_mods=debug",
    "warn,oni_mods=trace",
    "trace",
];

/// Verbosity from 0 (silent) to 6 (dump), as written in `output_log_level`
/// and `file_log_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for anything above [`Self::DUMP`].
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        if usize::from(level) < FILTERS.len() {
            Ok(Self(level))
        } else {
            Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-6, got {level}"),
            })
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Filter directive for this level. Levels 3 to 5 only affect this crate.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        FILTERS[self.0 as usize]
    }

    fn env_filter(self) -> EnvFilter {
        EnvFilter::new(self.to_filter_string())
    }
}

// serde goes through these so config files and env vars share the range check
impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
    #[builder(setters(name = with_show_timestamps), default = true)]
    show_timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }
}

/// Keeps the file writer thread alive. Dropping it flushes pending lines.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file or its parent directory cannot be
/// created.
///
/// # Example
///
/// ```no_run
/// use oni_mods::logging::{LogConfig, LogLevel, init_logging};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::DEBUG)
///     .with_log_file("oni-mods.log".into())
///     .build();
/// let _guard = init_logging(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let mut layers: Vec<BoxedLayer> = vec![console_layer(config)];

    let file_guard = match config.log_file() {
        Some(path) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            layers.push(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_filter(config.file_level().env_filter())
                    .boxed(),
            );
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry().with(layers).init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

// stderr keeps stdout clean for `info --json`
fn console_layer(config: &LogConfig) -> BoxedLayer {
    let filter = config.console_level().env_filter();
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    if config.show_timestamps() {
        layer.with_filter(filter).boxed()
    } else {
        layer.without_time().with_filter(filter).boxed()
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("failed to create log file {}", path.display()))
}

#[cfg(test)]
mod tests;
