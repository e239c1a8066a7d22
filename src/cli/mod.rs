// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for oni-mods using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! oni-mods [global options] [command]
//! (none)     print help
//! new <NAME>
//! validate [DIR]
//! info [DIR]
//! bump [DIR]
//! install [DIR]
//! options
//! configs
//! version
//! ```

pub mod global;
pub mod new;
pub mod project;


use crate::cli::global::GlobalOptions;
use crate::cli::new::NewArgs;
use crate::cli::project::{BumpArgs, InfoArgs, InstallArgs, ValidateArgs};
use clap::{CommandFactory, Parser, Subcommand};

/// ONI-Mods command-line toolset
///
/// Creates and manages mod projects for Oxygen Not Included.
#[derive(Debug, Parser)]
#[command(
    name = "oni-mods",
    author,
    version,
    about = "ONI-Mods command-line toolset - create and manage Oxygen Not Included mod projects",
    long_about = "ONI-Mods command-line toolset - create and manage Oxygen Not Included mod projects.\n\n\
                  A mod project is a directory holding mod.yaml (title, staticID,\n\
                  description) and mod_info.yaml (supportedContent,\n\
                  minimumSupportedBuild, version, APIVersion) next to the mod's\n\
                  C# sources. Start with `oni-mods new MyMod`, check it with\n\
                  `oni-mods validate MyMod`, and copy it into the game's dev mods\n\
                  folder with `oni-mods install MyMod`.",
    after_help = "CONFIG FILES:\n\n\
                  oni-mods reads `oni-mods.toml` from the user config directory\n\
                  and then from the current directory; the latter overrides the\n\
                  former. Files given with --config are loaded after those, then\n\
                  ONI_MODS_<SECTION>__<KEY> environment variables, then --set.\n\
                  Use --no-default-configs to only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by oni-mods.
    Configs,

    /// Creates a new mod project.
    New(NewArgs),

    /// Checks mod.yaml and mod_info.yaml of a project.
    Validate(ValidateArgs),

    /// Prints the manifests of a project.
    Info(InfoArgs),

    /// Increments the version in mod_info.yaml.
    Bump(BumpArgs),

    /// Copies a project into the game's dev mods folder.
    Install(InstallArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Renders the long help text shown when no command is given.
#[must_use]
pub fn render_help() -> String {
    Cli::command().render_long_help().to_string()
}
