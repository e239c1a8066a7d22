// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! New command implementation for oni-mods.

use tracing::info;

use crate::cli::new::NewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::manifest::ModInfo;
use crate::scaffold::ScaffoldOptions;

/// Merges command-line arguments over the `[scaffold]` defaults.
#[must_use]
pub fn scaffold_options(args: &NewArgs, config: &Config) -> ScaffoldOptions {
    let defaults = &config.scaffold;
    let pick = |arg: &Option<String>, default: &str| arg.clone().unwrap_or_else(|| default.to_string());

    let info = ModInfo::new(
        pick(&args.minimum_supported_build, &defaults.minimum_supported_build),
        pick(&args.version, &defaults.version),
        pick(&args.api_version, &defaults.api_version),
    )
    .with_supported_content(pick(&args.supported_content, &defaults.supported_content));

    let author = args
        .author
        .clone()
        .or_else(|| Some(defaults.author.clone()).filter(|a| !a.is_empty()));

    ScaffoldOptions::builder()
        .name(args.name.clone())
        .dest(args.dest.clone())
        .maybe_title(args.title.clone())
        .maybe_static_id(args.static_id.clone())
        .maybe_description(args.description.clone())
        .maybe_author(author)
        .info(info)
        .force(args.force)
        .build()
}

/// Main handler for the new command.
///
/// # Errors
///
/// Returns an error if the name is unusable, the destination is taken, or
/// writing fails.
pub async fn run_new_command(args: &NewArgs, config: &Config) -> Result<()> {
    let plan = scaffold_options(args, config).plan()?;
    let written = plan.write(config.global.dry).await?;

    info!(
        path = %plan.root().display(),
        static_id = %plan.project().definition.static_id,
        files = written.len(),
        "Created mod project"
    );
    println!("{}", plan.root().display());
    Ok(())
}
