// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! New mod project generation.
//!
//! ```text
//! ScaffoldOptions --plan()--> ScaffoldPlan --write(dry)--> <dest>/<name>/
//!                                                  mod.yaml
//!                                                  mod_info.yaml
//!                                                  <Ident>.csproj
//!                                                  <Ident>Patches.cs
//!                                                  .gitignore
//! ```
//!
//! Planning is pure; only `write` touches the filesystem.

pub mod templates;


use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{Result, ScaffoldError};
use crate::manifest::{MOD_FILE, MOD_INFO_FILE, Mod, ModInfo, ModProject};
use templates::TemplateVars;

/// Inputs for a new project, already merged with config defaults.
#[derive(Debug, Clone, Builder)]
pub struct ScaffoldOptions {
    /// Project name; also the directory name.
    #[builder(into)]
    name: String,
    /// Parent directory of the project.
    #[builder(into, default = PathBuf::from("."))]
    dest: PathBuf,
    #[builder(into)]
    title: Option<String>,
    #[builder(into)]
    static_id: Option<String>,
    #[builder(into)]
    description: Option<String>,
    /// Author prefix; empty is treated as none.
    #[builder(into)]
    author: Option<String>,
    /// Contents of `mod_info.yaml`.
    info: ModInfo,
    #[builder(default = false)]
    force: bool,
}

/// A fully resolved project, ready to be written.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    root: PathBuf,
    ident: String,
    namespace: String,
    project: ModProject,
    force: bool,
}

impl ScaffoldOptions {
    /// Resolves identifiers and manifests.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a single folder name, yields no
    /// C# identifier, or if the resulting manifests fail validation.
    pub fn plan(&self) -> Result<ScaffoldPlan> {
        if !is_folder_name(&self.name) {
            return Err(ScaffoldError::InvalidName {
                name: self.name.clone(),
                reason: "must be a single folder name",
            }
            .into());
        }
        let ident = pascal_ident(&self.name)?;
        let author = self.author.as_deref().filter(|a| !a.trim().is_empty());

        let namespace = match author {
            Some(author) => format!("{}.{ident}", pascal_ident(author)?),
            None => ident.clone(),
        };
        let static_id = self.static_id.clone().unwrap_or_else(|| match author {
            Some(author) => format!("{author}.{ident}"),
            None => ident.clone(),
        });
        let title = self.title.clone().unwrap_or_else(|| self.name.clone());
        let description = self
            .description
            .clone()
            .unwrap_or_else(|| format!("{title} mod for Oxygen Not Included"));

        let root = self.dest.join(&self.name);
        let project = ModProject::new(
            &root,
            Mod::new(title, static_id, description),
            self.info.clone(),
        );

        let report = project.validate();
        if let Some(first) = report.errors().first() {
            anyhow::bail!("generated manifests are invalid: {first}");
        }

        Ok(ScaffoldPlan {
            root,
            ident,
            namespace,
            project,
            force: self.force,
        })
    }
}

impl ScaffoldPlan {
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub const fn project(&self) -> &ModProject {
        &self.project
    }

    /// Relative file names and contents of the project.
    ///
    /// # Errors
    ///
    /// Returns an error if a manifest fails to serialize.
    pub fn files(&self) -> Result<Vec<(String, String)>> {
        let vars = TemplateVars {
            ident: &self.ident,
            namespace: &self.namespace,
            static_id: &self.project.definition.static_id,
            version: &self.project.info.version,
        };

        Ok(vec![
            (
                MOD_FILE.to_string(),
                self.project.definition.to_yaml_string()?,
            ),
            (MOD_INFO_FILE.to_string(), self.project.info.to_yaml_string()?),
            (format!("{}.csproj", self.ident), templates::csproj(&vars)),
            (
                format!("{}Patches.cs", self.ident),
                templates::patches_cs(&vars),
            ),
            (".gitignore".to_string(), templates::GITIGNORE.to_string()),
        ])
    }

    /// Writes the project, or only logs the plan when `dry_run` is set.
    ///
    /// Returns the paths written (or that would be written).
    ///
    /// # Errors
    ///
    /// Returns an error if the destination exists and is not empty (without
    /// `force`), or if any write fails.
    pub async fn write(&self, dry_run: bool) -> Result<Vec<PathBuf>> {
        if !self.force && dir_has_entries(&self.root).await? {
            return Err(ScaffoldError::DestinationExists(self.root.display().to_string()).into());
        }

        if dry_run {
            info!(path = %self.root.display(), "[DRY-RUN] would create project directory");
        } else {
            tokio::fs::create_dir_all(&self.root)
                .await
                .with_context(|| format!("failed to create {}", self.root.display()))?;
        }

        let mut written = Vec::new();
        for (name, content) in self.files()? {
            let path = self.root.join(&name);
            if dry_run {
                info!(path = %path.display(), bytes = content.len(), "[DRY-RUN] would write");
            } else {
                debug!(path = %path.display(), bytes = content.len(), "Writing");
                tokio::fs::write(&path, content)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            written.push(path);
        }

        Ok(written)
    }
}

async fn dir_has_entries(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let mut entries = tokio::fs::read_dir(path)
        .await
        .with_context(|| format!("failed to read directory {}", path.display()))?;
    Ok(entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", path.display()))?
        .is_some())
}

/// The project folder is created as `<dest>/<name>`, so `name` must not
/// climb out of `dest` or nest below it.
fn is_folder_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    !name.contains(['/', '\\'])
        && matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
}

/// Converts a project name into a PascalCase C# identifier.
///
/// `airlock-door` → `AirlockDoor`, `2048 tiles` → `_2048Tiles`.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] if `name` has no ASCII alphanumerics.
pub fn pascal_ident(name: &str) -> Result<String> {
    let words = Regex::new("[A-Za-z0-9]+").context("failed to compile identifier regex")?;

    let mut ident: String = words
        .find_iter(name)
        .map(|word| {
            let word = word.as_str();
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect();

    if ident.is_empty() {
        return Err(ScaffoldError::InvalidName {
            name: name.to_string(),
            reason: "must contain at least one ASCII letter or digit",
        }
        .into());
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    Ok(ident)
}
