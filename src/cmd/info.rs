// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Info command implementation for oni-mods.

use anyhow::Context;

use crate::cli::project::InfoArgs;
use crate::error::Result;
use crate::manifest::ModProject;

/// Renders both manifests as aligned `key = value` lines.
#[must_use]
pub fn format_info(project: &ModProject) -> Vec<String> {
    let definition = &project.definition;
    let info = &project.info;
    let rows = [
        ("title", definition.title.as_str()),
        ("staticID", definition.static_id.as_str()),
        ("description", definition.description.as_str()),
        ("supportedContent", info.supported_content.as_str()),
        ("minimumSupportedBuild", info.minimum_supported_build.as_str()),
        ("version", info.version.as_str()),
        ("APIVersion", info.api_version.as_str()),
    ];
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(key, value)| format!("{key:<width$} = {value}"))
        .collect()
}

/// Both manifests as one JSON document, `{"mod": ..., "modInfo": ...}`.
#[must_use]
pub fn info_json(project: &ModProject) -> serde_json::Value {
    serde_json::json!({
        "mod": project.definition,
        "modInfo": project.info,
    })
}

/// Main handler for the info command.
///
/// # Errors
///
/// Returns an error if the project cannot be loaded.
pub fn run_info_command(args: &InfoArgs) -> Result<()> {
    let project = ModProject::load(&args.dir)
        .with_context(|| format!("failed to load mod project {}", args.dir.display()))?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&info_json(&project))
            .context("failed to render project info")?;
        println!("{rendered}");
    } else {
        for line in format_info(&project) {
            println!("{line}");
        }
    }
    Ok(())
}
