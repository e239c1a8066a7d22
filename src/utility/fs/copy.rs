// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dry-run aware filesystem writes.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`ensure_dir`] | Create directory if it doesn't exist |
//! | [`remove_dir`] | Delete a directory tree if it exists |
//! | [`copy_file_if_newer`] | Copy file only if source is newer than destination |

use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Ensures a directory exists, creating it if necessary.
///
/// In dry-run mode, logs what would be created.
///
/// # Errors
///
/// Returns an error if the directory creation fails.
pub async fn ensure_dir(path: &Path, dry_run: bool) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if dry_run {
        info!(path = %path.display(), "[DRY-RUN] would create directory");
    } else {
        fs::create_dir_all(path)
            .await
            .with_context(|| format!("failed to create {}", path.display()))?;
    }

    Ok(())
}

/// Deletes a directory and everything below it.
///
/// Missing directories are not an error. In dry-run mode, only logs.
///
/// # Errors
///
/// Returns an error if the deletion fails.
pub async fn remove_dir(path: &Path, dry_run: bool) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    if dry_run {
        info!(path = %path.display(), "[DRY-RUN] would delete directory");
    } else {
        info!(path = %path.display(), "Deleting directory");
        fs::remove_dir_all(path)
            .await
            .with_context(|| format!("failed to delete {}", path.display()))?;
    }

    Ok(())
}

/// Copies a file only if the source is newer than the destination, or the
/// destination doesn't exist.
///
/// Parent directories of `dst` are created as needed. Returns whether the file
/// was copied (or would be, in dry-run mode).
///
/// # Errors
///
/// Returns an error if metadata access or the copy operation fails.
///
/// # Example
/// ```no_run
/// use oni_mods::utility::fs::copy::copy_file_if_newer;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let copied = copy_file_if_newer(Path::new("mod.yaml"), Path::new("/mods/Dev/x/mod.yaml"), false).await?;
/// # Ok(())
/// # }
/// ```
pub async fn copy_file_if_newer(src: &Path, dst: &Path, dry_run: bool) -> Result<bool> {
    let should_copy = if dst.exists() {
        let src_meta = fs::metadata(src)
            .await
            .with_context(|| format!("failed to get metadata for {}", src.display()))?;
        let dst_meta = fs::metadata(dst)
            .await
            .with_context(|| format!("failed to get metadata for {}", dst.display()))?;

        match (src_meta.modified().ok(), dst_meta.modified().ok()) {
            (Some(s), Some(d)) => s > d,
            _ => true,
        }
    } else {
        true
    };

    if !should_copy {
        debug!(dst = %dst.display(), "Up to date");
        return Ok(false);
    }

    if dry_run {
        info!(
            src = %src.display(),
            dst = %dst.display(),
            "[DRY-RUN] would copy"
        );
        return Ok(true);
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    debug!(src = %src.display(), dst = %dst.display(), "Copying");
    fs::copy(src, dst)
        .await
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;

    Ok(true)
}
