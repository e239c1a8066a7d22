// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for commands that operate on an existing project.
//!
//! ```text
//! validate [DIR] [--strict]
//! info     [DIR] [--json]
//! bump     [DIR] [--part major|minor|patch]
//! install  [DIR] [--mods-dir DIR] [--clean]
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::manifest::version::VersionPart;

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Project directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Treats warnings as errors.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Args)]
pub struct InfoArgs {
    /// Project directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Prints both manifests as a JSON object.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `bump` command.
#[derive(Debug, Clone, Args)]
pub struct BumpArgs {
    /// Project directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Version component to increment.
    #[arg(short = 'p', long, value_enum, default_value_t = BumpPart::Patch)]
    pub part: BumpPart,
}

/// Version component selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpPart {
    Major,
    Minor,
    Patch,
}

impl From<BumpPart> for VersionPart {
    fn from(part: BumpPart) -> Self {
        match part {
            BumpPart::Major => Self::Major,
            BumpPart::Minor => Self::Minor,
            BumpPart::Patch => Self::Patch,
        }
    }
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Args)]
pub struct InstallArgs {
    /// Project directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Dev mods directory (overrides paths.mods_dir).
    #[arg(short = 'm', long = "mods-dir", value_name = "DIR")]
    pub mods_dir: Option<PathBuf>,

    /// Removes the installed copy before copying.
    #[arg(long)]
    pub clean: bool,
}
