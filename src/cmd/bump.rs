// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bump command implementation for oni-mods.

use anyhow::Context;
use tracing::info;

use crate::cli::project::BumpArgs;
use crate::error::Result;
use crate::manifest::ModProject;
use crate::manifest::version::ModVersion;

/// Main handler for the bump command.
///
/// Rewrites `mod_info.yaml` with the incremented version and prints it.
///
/// # Errors
///
/// Returns an error if the project cannot be loaded, the current version is
/// not numeric, or the manifests cannot be saved.
pub fn run_bump_command(args: &BumpArgs, dry_run: bool) -> Result<()> {
    let mut project = ModProject::load(&args.dir)
        .with_context(|| format!("failed to load mod project {}", args.dir.display()))?;

    let current = ModVersion::parse(&project.info.version)?;
    let next = current.bump(args.part.into())?;

    if dry_run {
        info!(from = %current, to = %next, "[DRY-RUN] would bump version");
    } else {
        project.info.version = next.to_string();
        project
            .save()
            .with_context(|| format!("failed to save {}", args.dir.display()))?;
        info!(from = %current, to = %next, "Bumped version");
    }

    println!("{next}");
    Ok(())
}
