// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command implementation for oni-mods.

use anyhow::Context;
use tracing::info;

use crate::cli::project::InstallArgs;
use crate::config::Config;
use crate::error::Result;
use crate::install::InstallPlan;
use crate::manifest::ModProject;

/// Main handler for the install command.
///
/// # Errors
///
/// Returns an error if the project cannot be loaded or is invalid, no mods
/// directory can be resolved, or copying fails.
pub async fn run_install_command(args: &InstallArgs, config: &Config) -> Result<()> {
    let project = ModProject::load(&args.dir)
        .with_context(|| format!("failed to load mod project {}", args.dir.display()))?;
    let mods_dir = config.paths.resolve_mods_dir(args.mods_dir.as_deref())?;

    let plan = InstallPlan::collect(&project, &mods_dir, &config.install)?;
    info!(
        target = %plan.target().display(),
        files = plan.len(),
        "Installing {}", project.definition.title
    );

    let report = plan.execute(args.clean, config.global.dry).await?;
    println!(
        "{} file(s) copied to {} ({} unchanged)",
        report.copied,
        plan.target().display(),
        report.unchanged
    );
    Ok(())
}
