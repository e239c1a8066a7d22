// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use bon::Builder;
use flume::bounded;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::warn;
use wax::{Glob, Pattern};

/// Options for parallel directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Respect .gitignore files
    #[builder(setters(name = with_respect_gitignore), default = true)]
    respect_gitignore: bool,
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Options for walking a mod project.
    ///
    /// - Ignores hidden files
    /// - Respects .gitignore
    /// - Skips .NET build output and IDE folders (bin, obj, .vs, ...)
    #[must_use]
    pub fn for_mod_project() -> Self {
        Self::builder()
            .with_skip_dirs(
                ["bin", "obj", ".vs", ".idea", ".git", "packages", "TestResults"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            )
            .build()
    }
}

/// Result of a parallel walk operation.
#[derive(Debug)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    error_count: usize,
}

impl WalkResult {
    /// Files found during traversal, sorted.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Entries that could not be read (permissions, broken links, ...).
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }
}

/// Builds a `WalkBuilder` with the given options, using `filter_entry` for directory skipping.
pub(super) fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    if let Some(depth) = options.max_depth() {
        builder.max_depth(Some(depth));
    }

    builder.hidden(!options.include_hidden());

    builder.git_ignore(options.respect_gitignore());
    builder.git_global(options.respect_gitignore());
    builder.git_exclude(options.respect_gitignore());

    // Evaluated before descending, so skipped trees are never read
    if !options.skip_dirs().is_empty() {
        let skip_dirs: Arc<Vec<String>> = Arc::new(options.skip_dirs().to_vec());
        builder.filter_entry(move |entry| {
            !(entry.depth() > 0
                && entry.file_type().is_some_and(|ft| ft.is_dir())
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| skip_dirs.iter().any(|skip| skip == name)))
        });
    }

    builder
}

/// Performs parallel directory traversal using `ignore::WalkParallel`.
///
/// Results are collected over flume channels and sorted so callers see a
/// stable order.
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
///
/// # Example
/// ```no_run
/// use oni_mods::utility::fs::walk::{parallel_walk, WalkOptions};
///
/// let result = parallel_walk("MyMod", &WalkOptions::for_mod_project())?;
/// println!("Found {} files", result.files().len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parallel_walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<WalkResult> {
    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let (file_tx, file_rx) = bounded::<PathBuf>(1000);
    let error_count = Arc::new(AtomicUsize::new(0));

    let parallel = build_walker(root, options).build_parallel();

    // Drain on a scoped thread while the walkers run, the channel is bounded
    let mut files = std::thread::scope(|scope| {
        let files = scope.spawn(move || file_rx.iter().collect::<Vec<_>>());

        parallel.run(|| {
            let file_tx = file_tx.clone();
            let error_count = Arc::clone(&error_count);

            Box::new(move |entry_result| {
                match entry_result {
                    Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                        let _ = file_tx.send(entry.into_path());
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "walk error");
                        error_count.fetch_add(1, Ordering::Relaxed);
                    }
                }
                ignore::WalkState::Continue
            })
        });

        // Drop the sender to signal completion
        drop(file_tx);
        files.join().unwrap_or_default()
    });

    files.sort();

    Ok(WalkResult {
        files,
        error_count: error_count.load(Ordering::Relaxed),
    })
}

/// Finds files under `root` whose path relative to `root` matches `pattern`.
///
/// Uses the `wax` crate for glob matching. Results are sorted.
///
/// # Example
/// ```no_run
/// use oni_mods::utility::fs::walk::{find_files, WalkOptions};
///
/// let dlls = find_files("MyMod", "bin/Release/*.dll", &WalkOptions::default())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
/// - Any entry below `root` could not be read.
pub fn find_files<P: AsRef<Path>>(
    root: P,
    pattern: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    let walk = parallel_walk(root, options)?;
    if walk.error_count() > 0 {
        anyhow::bail!(
            "{} entries under {} could not be read",
            walk.error_count(),
            root.display()
        );
    }
    Ok(walk
        .files()
        .iter()
        .filter(|path| {
            path.strip_prefix(root)
                .is_ok_and(|rel| glob.is_match(rel))
        })
        .cloned()
        .collect())
}

/// Compiled set of exclusion globs.
///
/// A path is excluded if any glob matches its path relative to the walk root
/// or its bare file name, so `*.cs` excludes sources at any depth.
pub struct ExcludeSet<'t> {
    globs: Vec<Glob<'t>>,
}

impl<'t> ExcludeSet<'t> {
    /// Compiles `patterns`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern that fails to compile.
    pub fn new(patterns: &'t [String]) -> Result<Self> {
        let globs = patterns
            .iter()
            .map(|p| {
                Glob::new(p).map_err(|e| anyhow::anyhow!("invalid glob pattern '{p}': {e}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { globs })
    }

    #[must_use]
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let name = relative.file_name().map(Path::new);
        self.globs.iter().any(|glob| {
            glob.is_match(relative) || name.is_some_and(|name| glob.is_match(name))
        })
    }
}
