// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `new` command arguments.
//!
//! ```text
//! oni-mods new <NAME> [--dest DIR]
//!   mod.yaml       --title --static-id --description
//!   mod_info.yaml  --version --api-version --min-build --supported-content
//!   namespace      --author
//! ```
//!
//! Unset flags fall back to the `[scaffold]` config section.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `new` command.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Project name; also the directory name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory to create the project in.
    #[arg(short = 'd', long = "dest", value_name = "DIR", default_value = ".")]
    pub dest: PathBuf,

    /// Display title (defaults to NAME).
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Stable mod identifier (defaults to AUTHOR.Ident or Ident).
    #[arg(long = "static-id", value_name = "ID")]
    pub static_id: Option<String>,

    /// Mod description.
    #[arg(long)]
    pub description: Option<String>,

    /// Author prefix for the static ID and C# namespace.
    #[arg(short = 'a', long)]
    pub author: Option<String>,

    /// Initial mod version.
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Mod API version.
    #[arg(long = "api-version", value_name = "VERSION")]
    pub api_version: Option<String>,

    /// Minimum supported game build.
    #[arg(long = "min-build", value_name = "BUILD")]
    pub minimum_supported_build: Option<String>,

    /// Supported content (all, vanilla_id, expansion1_id).
    #[arg(long = "supported-content", value_name = "CONTENT")]
    pub supported_content: Option<String>,

    /// Writes into an existing non-empty directory.
    #[arg(short = 'f', long)]
    pub force: bool,
}
