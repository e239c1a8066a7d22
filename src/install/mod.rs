// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Copies a mod project into the game's dev mods folder.
//!
//! ```text
//! <project>/                     <mods_dir>/<staticID>/
//!   mod.yaml            ───────►   mod.yaml
//!   mod_info.yaml       ───────►   mod_info.yaml
//!   anim/assets/x.png   ───────►   anim/assets/x.png
//!   Patches.cs          (excluded)
//!   bin/Release/X.dll   ─include─► X.dll
//! ```

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::InstallConfig;
use crate::error::Result;
use crate::manifest::ModProject;
use crate::utility::fs::copy::{copy_file_if_newer, ensure_dir, remove_dir};
use crate::utility::fs::walk::{ExcludeSet, WalkOptions, find_files, parallel_walk};

/// Source and destination of every file to install.
#[derive(Debug, Clone)]
pub struct InstallPlan {
    target: PathBuf,
    /// Destination → source, so a flattened include replaces a walked file.
    files: BTreeMap<PathBuf, PathBuf>,
}

/// Outcome of [`InstallPlan::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    /// Files copied (or that would be copied in dry-run mode).
    pub copied: usize,
    /// Files already up to date.
    pub unchanged: usize,
}

impl InstallPlan {
    /// Collects the files of `project` to install below `mods_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the project fails validation, the `staticID` does
    /// not name a folder directly inside `mods_dir`, a glob is invalid, or any
    /// entry of the project directory cannot be read.
    pub fn collect(project: &ModProject, mods_dir: &Path, config: &InstallConfig) -> Result<Self> {
        let report = project.validate();
        if let Some(first) = report.errors().first() {
            anyhow::bail!(
                "refusing to install invalid project {}: {first}",
                project.root().display()
            );
        }

        let root = project.root();
        let static_id = &project.definition.static_id;
        let target = mods_dir.join(static_id);
        // `clean` wipes the target, so it must never resolve outside `mods_dir`
        if target.parent() != Some(mods_dir)
            || target.file_name() != Some(OsStr::new(static_id.as_str()))
        {
            anyhow::bail!(
                "staticID '{static_id}' does not name a folder directly inside {}",
                mods_dir.display()
            );
        }

        let excludes = ExcludeSet::new(&config.exclude)?;
        let mut files = BTreeMap::new();

        let walk = parallel_walk(root, &WalkOptions::for_mod_project())?;
        if walk.error_count() > 0 {
            anyhow::bail!(
                "{} entries under {} could not be read",
                walk.error_count(),
                root.display()
            );
        }
        for src in walk.files() {
            let Ok(relative) = src.strip_prefix(root) else {
                continue;
            };
            if excludes.is_excluded(relative) {
                debug!(path = %relative.display(), "Excluded");
                continue;
            }
            files.insert(target.join(relative), src.clone());
        }

        // Build output is usually gitignored, so includes walk everything
        let unfiltered = WalkOptions::builder().with_respect_gitignore(false).build();
        for pattern in &config.include {
            for src in find_files(root, pattern, &unfiltered)? {
                if let Some(name) = src.file_name() {
                    files.insert(target.join(name), src);
                }
            }
        }

        Ok(Self { target, files })
    }

    /// `<mods_dir>/<staticID>`.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// `(source, destination)` pairs ordered by destination.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.files
            .iter()
            .map(|(dst, src)| (src.as_path(), dst.as_path()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Copies the planned files, optionally wiping the target first.
    ///
    /// # Errors
    ///
    /// Returns an error if any filesystem operation fails.
    pub async fn execute(&self, clean: bool, dry_run: bool) -> Result<InstallReport> {
        if clean {
            remove_dir(&self.target, dry_run).await?;
        }
        ensure_dir(&self.target, dry_run).await?;

        let mut report = InstallReport {
            copied: 0,
            unchanged: 0,
        };
        for (src, dst) in self.files() {
            // A dry clean leaves the old copy in place, yet everything would be copied
            let copied = if clean && dry_run {
                info!(src = %src.display(), dst = %dst.display(), "[DRY-RUN] would copy");
                true
            } else {
                copy_file_if_newer(src, dst, dry_run).await?
            };

            if copied {
                report.copied += 1;
            } else {
                report.unchanged += 1;
            }
        }

        info!(
            target = %self.target.display(),
            copied = report.copied,
            unchanged = report.unchanged,
            "Install finished"
        );
        Ok(report)
    }
}
