// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities with parallel traversal and async copy.
//!
//! ```text
//! walk:  parallel_walk()  ignore::WalkParallel (multi-core)
//!        find_files()     glob pattern matching
//!        ExcludeSet       compiled exclusion globs
//!        WalkOptions      max_depth, hidden, gitignore, skip_dirs
//! copy:  copy_file_if_newer()  tokio::fs, dry-run aware
//!        ensure_dir()          create if missing
//!        remove_dir()          delete tree
//! ```

pub mod copy;
pub mod walk;
