// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:  parallel_walk(), find_files(), ExcludeSet, WalkOptions
//!   copy:  copy_file_if_newer(), ensure_dir(), remove_dir()
//! ```

pub mod fs;
