// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for oni-mods.

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use crate::error::Result;

/// Assembles the config layers for the given global options.
///
/// ```text
/// [user config dir]/oni-mods/oni-mods.toml   (optional, skipped by --no-default-configs)
/// ./oni-mods.toml                            (optional, skipped by --no-default-configs)
/// --config FILE...                           (required)
/// ONI_MODS_<SECTION>__<KEY>
/// --set / CLI flags
/// ```
///
/// # Errors
///
/// Returns an error if a `--set` assignment is malformed.
pub fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();

    if !global.no_default_configs {
        if let Some(user) = Config::user_config_path() {
            loader = loader.add_toml_file_optional(user);
        }
        loader = loader.add_toml_file_optional(CONFIG_FILE_NAME);
    }

    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }

    loader = loader.with_env_prefix(ENV_PREFIX);

    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }

    Ok(loader)
}

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_configs_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
