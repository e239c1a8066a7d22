// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   new, validate, info, bump, install, config (options/configs)
//! ```

pub mod bump;
pub mod config;
pub mod info;
pub mod install;
pub mod new;
pub mod validate;
