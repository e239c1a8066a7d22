// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotted numeric mod versions.
//!
//! ```text
//! "1"        Patch --> 1.0.1
//! "1.2.3"    Minor --> 1.3.0
//! "1.2.3.4"  Minor --> 1.3.0.0
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ManifestError;

/// Most components a mod version may have (`major.minor.patch.build`).
const MAX_PARTS: usize = 4;

/// Component incremented by [`ModVersion::bump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPart {
    Major,
    Minor,
    #[default]
    Patch,
}

impl VersionPart {
    const fn index(self) -> usize {
        match self {
            Self::Major => 0,
            Self::Minor => 1,
            Self::Patch => 2,
        }
    }
}

/// A version made of one to four unsigned components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModVersion {
    parts: Vec<u32>,
}

impl ModVersion {
    /// Parses `1`, `1.2`, `1.2.3` or `1.2.3.4`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidVersion`] for empty components,
    /// anything but ASCII digits (whitespace included), components above
    /// `u32::MAX`, or more than four components.
    pub fn parse(s: &str) -> Result<Self, ManifestError> {
        let invalid = || ManifestError::InvalidVersion(s.to_string());

        let parts = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                part.parse::<u32>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;

        if parts.len() > MAX_PARTS {
            return Err(invalid());
        }

        Ok(Self { parts })
    }

    #[must_use]
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// Returns the next version for `part`.
    ///
    /// Lower components are reset to zero and the result has at least three
    /// components. A fourth (build) component is kept and zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::VersionOverflow`] if the bumped component is
    /// already `u32::MAX`.
    pub fn bump(&self, part: VersionPart) -> Result<Self, ManifestError> {
        let mut parts = self.parts.clone();
        if parts.len() < 3 {
            parts.resize(3, 0);
        }

        let idx = part.index();
        parts[idx] = parts[idx]
            .checked_add(1)
            .ok_or_else(|| ManifestError::VersionOverflow(self.to_string()))?;
        for lower in &mut parts[idx + 1..] {
            *lower = 0;
        }

        Ok(Self { parts })
    }
}

impl FromStr for ModVersion {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ModVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in &self.parts {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
            first = false;
        }
        Ok(())
    }
}
