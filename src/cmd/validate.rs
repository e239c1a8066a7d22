// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validate command implementation for oni-mods.

use anyhow::Context;
use tracing::info;

use crate::cli::project::ValidateArgs;
use crate::error::Result;
use crate::manifest::ModProject;

/// Main handler for the validate command.
///
/// Prints every problem as `error: ...` or `warning: ...`.
///
/// # Errors
///
/// Returns an error if the project cannot be loaded, has errors, or has
/// warnings while `--strict` is set.
pub fn run_validate_command(args: &ValidateArgs) -> Result<()> {
    let project = ModProject::load(&args.dir)
        .with_context(|| format!("failed to load mod project {}", args.dir.display()))?;
    let report = project.validate();

    for error in report.errors() {
        println!("error: {error}");
    }
    for warning in report.warnings() {
        println!("warning: {warning}");
    }

    if !report.passes(args.strict) {
        anyhow::bail!(
            "{} has {} error(s) and {} warning(s)",
            args.dir.display(),
            report.errors().len(),
            report.warnings().len()
        );
    }

    info!(path = %args.dir.display(), "Mod project is valid");
    println!("{}: ok", project.definition.static_id);
    Ok(())
}
