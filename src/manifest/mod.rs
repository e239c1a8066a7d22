// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod manifests read by the game's mod loader.
//!
//! ```text
//! <project>/
//!   mod.yaml        Mod      { title, staticID, description }
//!   mod_info.yaml   ModInfo  { supportedContent = "all",
//!                              minimumSupportedBuild, version, APIVersion }
//!
//! from_yaml_str   serde schema check (required fields, types)
//! validate        semantic check (blank values, id charset, version)
//! ```

pub mod version;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use serde::de::{self, DeserializeOwned, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{FsError, ManifestError, OniError, OniResult};
use version::ModVersion;

/// File name of the [`Mod`] manifest.
pub const MOD_FILE: &str = "mod.yaml";

/// File name of the [`ModInfo`] manifest.
pub const MOD_INFO_FILE: &str = "mod_info.yaml";

/// Value of `supportedContent` when none is given.
pub const DEFAULT_SUPPORTED_CONTENT: &str = "all";

/// Content identifiers the game recognises in `supportedContent`.
pub const KNOWN_CONTENT: &[&str] = &["all", "vanilla_id", "expansion1_id"];

fn default_supported_content() -> String {
    DEFAULT_SUPPORTED_CONTENT.to_string()
}

/// YAML reads `null`, `~` and an empty value as a string otherwise.
fn non_null_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .ok_or_else(|| de::Error::invalid_type(Unexpected::Option, &"a string"))
}

/// Mod metadata (`mod.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mod {
    /// Display name.
    #[serde(deserialize_with = "non_null_string")]
    pub title: String,
    /// Stable identifier.
    #[serde(rename = "staticID", deserialize_with = "non_null_string")]
    pub static_id: String,
    /// Free text description.
    #[serde(deserialize_with = "non_null_string")]
    pub description: String,
}

/// Build and version metadata (`mod_info.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModInfo {
    /// Content the mod supports (`all`, `vanilla_id`, `expansion1_id`).
    #[serde(
        default = "default_supported_content",
        deserialize_with = "non_null_string"
    )]
    pub supported_content: String,
    /// Oldest game build the mod loads on.
    #[serde(deserialize_with = "non_null_string")]
    pub minimum_supported_build: String,
    /// Mod version.
    #[serde(deserialize_with = "non_null_string")]
    pub version: String,
    /// Mod API version.
    #[serde(rename = "APIVersion", deserialize_with = "non_null_string")]
    pub api_version: String,
}

impl Mod {
    pub fn new(
        title: impl Into<String>,
        static_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            static_id: static_id.into(),
            description: description.into(),
        }
    }

    /// Parses a `mod.yaml` document.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Invalid`] if a required field is missing or
    /// has the wrong type.
    pub fn from_yaml_str(content: &str) -> OniResult<Self> {
        parse_yaml(content, MOD_FILE)
    }

    /// Serializes to a `mod.yaml` document.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Invalid`] if serialization fails.
    pub fn to_yaml_string(&self) -> OniResult<String> {
        render_yaml(self, MOD_FILE)
    }

    /// Checks field values beyond presence.
    pub fn validate(&self, report: &mut Validation) {
        require_non_blank(report, MOD_FILE, "title", &self.title);
        require_non_blank(report, MOD_FILE, "description", &self.description);

        if require_non_blank(report, MOD_FILE, "staticID", &self.static_id)
            && !is_valid_static_id(&self.static_id)
        {
            report.error(ManifestError::InvalidField {
                file: MOD_FILE.to_string(),
                field: "staticID".to_string(),
                message: format!(
                    "'{}' may only contain ASCII letters, digits, '_', '.' and '-', and must not start with '.'",
                    self.static_id
                ),
            });
        }
    }
}

impl ModInfo {
    /// Creates a `ModInfo` supporting all content.
    pub fn new(
        minimum_supported_build: impl Into<String>,
        version: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            supported_content: default_supported_content(),
            minimum_supported_build: minimum_supported_build.into(),
            version: version.into(),
            api_version: api_version.into(),
        }
    }

    #[must_use]
    pub fn with_supported_content(mut self, supported_content: impl Into<String>) -> Self {
        self.supported_content = supported_content.into();
        self
    }

    /// Parses a `mod_info.yaml` document.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Invalid`] if a required field is missing or
    /// has the wrong type.
    pub fn from_yaml_str(content: &str) -> OniResult<Self> {
        parse_yaml(content, MOD_INFO_FILE)
    }

    /// Serializes to a `mod_info.yaml` document.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Invalid`] if serialization fails.
    pub fn to_yaml_string(&self) -> OniResult<String> {
        render_yaml(self, MOD_INFO_FILE)
    }

    /// Checks field values beyond presence.
    ///
    /// Unrecognised content identifiers only produce a warning since newer
    /// game releases may add DLC ids.
    pub fn validate(&self, report: &mut Validation) {
        require_non_blank(
            report,
            MOD_INFO_FILE,
            "minimumSupportedBuild",
            &self.minimum_supported_build,
        );
        require_non_blank(report, MOD_INFO_FILE, "APIVersion", &self.api_version);

        if require_non_blank(report, MOD_INFO_FILE, "version", &self.version)
            && let Err(e) = ModVersion::parse(&self.version)
        {
            report.error(ManifestError::InvalidField {
                file: MOD_INFO_FILE.to_string(),
                field: "version".to_string(),
                message: e.to_string(),
            });
        }

        if require_non_blank(
            report,
            MOD_INFO_FILE,
            "supportedContent",
            &self.supported_content,
        ) {
            for id in self.supported_content.split(',').map(str::trim) {
                if !KNOWN_CONTENT.contains(&id) {
                    report.warn(format!(
                        "{MOD_INFO_FILE}: unrecognised supportedContent '{id}' (expected one of {})",
                        KNOWN_CONTENT.join(", ")
                    ));
                }
            }
        }
    }
}

/// Outcome of [`ModProject::validate`].
#[derive(Debug, Default)]
pub struct Validation {
    errors: Vec<ManifestError>,
    warnings: Vec<String>,
}

impl Validation {
    pub fn error(&mut self, error: ManifestError) {
        self.errors.push(error);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    #[must_use]
    pub fn errors(&self) -> &[ManifestError] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// True when there are no errors, and no warnings either if `strict`.
    #[must_use]
    pub fn passes(&self, strict: bool) -> bool {
        self.errors.is_empty() && (!strict || self.warnings.is_empty())
    }
}

/// A mod project directory with both manifests loaded.
#[derive(Debug, Clone)]
pub struct ModProject {
    root: PathBuf,
    /// Contents of `mod.yaml`.
    pub definition: Mod,
    /// Contents of `mod_info.yaml`.
    pub info: ModInfo,
}

impl ModProject {
    pub fn new(root: impl Into<PathBuf>, definition: Mod, info: ModInfo) -> Self {
        Self {
            root: root.into(),
            definition,
            info,
        }
    }

    /// Loads `mod.yaml` and `mod_info.yaml` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::NotFound`] if either file is missing, or
    /// [`ManifestError::Invalid`] if either fails to parse.
    pub fn load(dir: impl AsRef<Path>) -> OniResult<Self> {
        let dir = dir.as_ref();
        debug!(path = %dir.display(), "Loading mod project");

        let definition = read_manifest(&dir.join(MOD_FILE), MOD_FILE)?;
        let info = read_manifest(&dir.join(MOD_INFO_FILE), MOD_INFO_FILE)?;

        Ok(Self::new(dir, definition, info))
    }

    /// Writes both manifests into the project root.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self) -> OniResult<()> {
        self.write_file(MOD_FILE, &self.definition.to_yaml_string()?)?;
        self.write_file(MOD_INFO_FILE, &self.info.to_yaml_string()?)
    }

    fn write_file(&self, name: &str, content: &str) -> OniResult<()> {
        let path = self.root.join(name);
        debug!(path = %path.display(), "Writing manifest");
        std::fs::write(&path, content).map_err(|e| FsError::from_io(&path, e).into())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Runs semantic checks on both manifests.
    #[must_use]
    pub fn validate(&self) -> Validation {
        let mut report = Validation::default();
        self.definition.validate(&mut report);
        self.info.validate(&mut report);
        report
    }
}

fn read_manifest<T: DeserializeOwned>(path: &Path, file: &str) -> OniResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| -> OniError {
        match e.kind() {
            std::io::ErrorKind::NotFound => ManifestError::NotFound {
                path: path.display().to_string(),
            }
            .into(),
            _ => FsError::from_io(path, e).into(),
        }
    })?;
    parse_yaml(&content, file)
}

fn parse_yaml<T: DeserializeOwned>(content: &str, file: &str) -> OniResult<T> {
    serde_yaml::from_str(content).map_err(|e| {
        ManifestError::Invalid {
            file: file.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn render_yaml<T: Serialize>(value: &T, file: &str) -> OniResult<String> {
    serde_yaml::to_string(value).map_err(|e| {
        ManifestError::Invalid {
            file: file.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Records an error if `value` is blank. Returns whether it was non-blank.
fn require_non_blank(report: &mut Validation, file: &str, field: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        report.error(ManifestError::InvalidField {
            file: file.to_string(),
            field: field.to_string(),
            message: "must not be blank".to_string(),
        });
        false
    } else {
        true
    }
}

/// `staticID` charset: ASCII alphanumerics plus `_`, `.` and `-`.
///
/// A leading `.` is rejected so the id can never name `.`, `..` or a hidden
/// directory once joined onto the mods folder.
#[must_use]
pub fn is_valid_static_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
