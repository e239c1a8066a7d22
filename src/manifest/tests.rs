// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::version::{ModVersion, VersionPart};
use super::{Mod, ModInfo, ModProject, is_valid_static_id};
use crate::error::{ManifestError, OniError};

fn sample_info() -> ModInfo {
    ModInfo::new("469112", "1.0.0", "2")
}

fn expect_invalid(result: Result<impl std::fmt::Debug, OniError>) -> String {
    match result {
        Err(OniError::Manifest(err)) => match *err {
            ManifestError::Invalid { message, .. } => message,
            other => panic!("expected Invalid, got {other:?}"),
        },
        other => panic!("expected manifest error, got {other:?}"),
    }
}

// =============================================================================
// Mod
// =============================================================================

#[test]
fn test_mod_new_round_trips_values() {
    let m = Mod::new("Duplicant Agent", "LIghtJUNction.DuplicantAgent", "Chat with dupes");
    assert_eq!(m.title, "Duplicant Agent");
    assert_eq!(m.static_id, "LIghtJUNction.DuplicantAgent");
    assert_eq!(m.description, "Chat with dupes");

    let yaml = m.to_yaml_string().unwrap();
    assert_eq!(Mod::from_yaml_str(&yaml).unwrap(), m);
}

#[test]
fn test_mod_yaml_uses_game_keys() {
    let m = Mod::new("No Splash", "NoSplashScreen", "Skips the splash");
    insta::assert_snapshot!(m.to_yaml_string().unwrap(), @r"
    title: No Splash
    staticID: NoSplashScreen
    description: Skips the splash
    ");
}

#[test]
fn test_mod_missing_each_required_field() {
    let cases = [
        ("staticID: a\ndescription: b\n", "title"),
        ("title: a\ndescription: b\n", "staticID"),
        ("title: a\nstaticID: b\n", "description"),
    ];
    for (doc, field) in cases {
        let message = expect_invalid(Mod::from_yaml_str(doc));
        assert!(
            message.contains(&format!("missing field `{field}`")),
            "{field}: {message}"
        );
    }
}

#[test]
fn test_mod_wrong_type_is_rejected() {
    let doc = "title: [a, b]\nstaticID: x\ndescription: y\n";
    let message = expect_invalid(Mod::from_yaml_str(doc));
    assert!(message.contains("title") || message.contains("invalid type"), "{message}");
}

#[test]
fn test_mod_ignores_unknown_keys() {
    let doc = "title: a\nstaticID: b\ndescription: c\nauthor: someone\n";
    assert_eq!(Mod::from_yaml_str(doc).unwrap(), Mod::new("a", "b", "c"));
}

#[test]
fn test_mod_validate_blank_and_charset() {
    let mut report = super::Validation::default();
    Mod::new("  ", "bad id!", "ok").validate(&mut report);

    let fields: Vec<_> = report
        .errors()
        .iter()
        .map(|e| match e {
            ManifestError::InvalidField { field, .. } => field.as_str(),
            _ => "",
        })
        .collect();
    assert_eq!(fields, vec!["title", "staticID"]);
}

#[test]
fn test_static_id_charset() {
    assert!(is_valid_static_id("PeterHan.NoSplashScreen"));
    assert!(is_valid_static_id("my-mod_2"));
    assert!(!is_valid_static_id(""));
    assert!(!is_valid_static_id("has space"));
    assert!(!is_valid_static_id("ümlaut"));
    assert!(!is_valid_static_id("."));
    assert!(!is_valid_static_id(".."));
    assert!(!is_valid_static_id(".hidden"));
    assert!(is_valid_static_id("Mod.v2.."));
}

// =============================================================================
// ModInfo
// =============================================================================

#[test]
fn test_mod_info_defaults_supported_content() {
    assert_eq!(sample_info().supported_content, "all");

    let doc = "minimumSupportedBuild: '469112'\nversion: 1.0.0\nAPIVersion: '2'\n";
    let info = ModInfo::from_yaml_str(doc).unwrap();
    assert_eq!(info.supported_content, "all");
    assert_eq!(info.minimum_supported_build, "469112");
    assert_eq!(info.version, "1.0.0");
    assert_eq!(info.api_version, "2");
}

#[test]
fn test_null_values_are_rejected() {
    for doc in [
        "title: null\nstaticID: x\ndescription: y\n",
        "title: ~\nstaticID: x\ndescription: y\n",
        "title: a\nstaticID:\ndescription: y\n",
    ] {
        let message = expect_invalid(Mod::from_yaml_str(doc));
        assert!(message.contains("invalid type"), "{doc}: {message}");
    }

    let doc = "supportedContent: null\nminimumSupportedBuild: '1'\nversion: '1'\nAPIVersion: '2'\n";
    let message = expect_invalid(ModInfo::from_yaml_str(doc));
    assert!(message.contains("invalid type"), "{message}");

    // Quoted, these are ordinary strings
    let doc = "title: 'null'\nstaticID: x\ndescription: '~'\n";
    assert_eq!(Mod::from_yaml_str(doc).unwrap(), Mod::new("null", "x", "~"));
}

#[test]
fn test_mod_info_missing_each_required_field() {
    let cases = [
        ("version: '1'\nAPIVersion: '2'\n", "minimumSupportedBuild"),
        ("minimumSupportedBuild: '1'\nAPIVersion: '2'\n", "version"),
        ("minimumSupportedBuild: '1'\nversion: '1'\n", "APIVersion"),
    ];
    for (doc, field) in cases {
        let message = expect_invalid(ModInfo::from_yaml_str(doc));
        assert!(
            message.contains(&format!("missing field `{field}`")),
            "{field}: {message}"
        );
    }
}

#[test]
fn test_mod_info_round_trip_keeps_numeric_strings() {
    let info = sample_info().with_supported_content("expansion1_id");
    let yaml = info.to_yaml_string().unwrap();
    assert!(yaml.contains("supportedContent: expansion1_id"), "{yaml}");
    assert!(yaml.contains("APIVersion:"), "{yaml}");
    assert_eq!(ModInfo::from_yaml_str(&yaml).unwrap(), info);
}

#[test]
fn test_mod_info_validate() {
    let mut report = super::Validation::default();
    sample_info().validate(&mut report);
    assert!(report.passes(true));

    let mut report = super::Validation::default();
    ModInfo::new("469112", "one", "2")
        .with_supported_content("all,future_dlc")
        .validate(&mut report);
    assert_eq!(report.errors().len(), 1);
    assert_eq!(report.warnings().len(), 1);
    assert!(!report.passes(false));
}

#[test]
fn test_unknown_content_is_only_a_warning() {
    let mut report = super::Validation::default();
    sample_info()
        .with_supported_content("expansion2_id")
        .validate(&mut report);
    assert!(report.errors().is_empty());
    assert!(report.passes(false));
    assert!(!report.passes(true));
}

// =============================================================================
// ModProject
// =============================================================================

#[test]
fn test_project_save_then_load() {
    let temp = tempfile::tempdir().unwrap();
    let project = ModProject::new(
        temp.path(),
        Mod::new("Research Queue", "ResearchQueue", "Queue research"),
        sample_info(),
    );
    project.save().unwrap();

    let loaded = ModProject::load(temp.path()).unwrap();
    assert_eq!(loaded.definition, project.definition);
    assert_eq!(loaded.info, project.info);
    assert!(loaded.validate().passes(true));
}

#[test]
fn test_project_load_missing_manifest() {
    let temp = tempfile::tempdir().unwrap();
    let err = ModProject::load(temp.path()).unwrap_err();
    match err {
        OniError::Manifest(inner) => {
            assert!(matches!(*inner, ManifestError::NotFound { ref path } if path.ends_with("mod.yaml")));
        }
        other => panic!("expected manifest error, got {other:?}"),
    }
}

// =============================================================================
// Versions
// =============================================================================

#[test]
fn test_version_parse() {
    assert_eq!(ModVersion::parse("1.2.3").unwrap().parts(), &[1, 2, 3]);
    assert_eq!(ModVersion::parse("7").unwrap().parts(), &[7]);
    for bad in [
        "", "1.", ".1", "1.a", "v1.0", "1.2.3.4.5", "-1", " 1.0.0", "1.0.0\n", "4294967296",
    ] {
        assert!(ModVersion::parse(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn test_version_bump() {
    let bump = |v: &str, part| {
        ModVersion::parse(v)
            .unwrap()
            .bump(part)
            .unwrap()
            .to_string()
    };
    assert_eq!(bump("1", VersionPart::Patch), "1.0.1");
    assert_eq!(bump("1.2.3", VersionPart::Patch), "1.2.4");
    assert_eq!(bump("1.2.3", VersionPart::Minor), "1.3.0");
    assert_eq!(bump("1.2.3", VersionPart::Major), "2.0.0");
    assert_eq!(bump("1.2.3.4", VersionPart::Minor), "1.3.0.0");
    assert_eq!(bump("0.9", VersionPart::Minor), "0.10.0");
}

#[test]
fn test_version_bump_overflow_is_an_error() {
    let top = ModVersion::parse("1.4294967295").unwrap();
    let err = top.bump(VersionPart::Minor).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"cannot bump version '1.4294967295': component would overflow"
    );

    // Only the bumped component has to have room
    assert_eq!(
        top.bump(VersionPart::Major).unwrap().to_string(),
        "2.0.0"
    );
}

#[test]
fn test_version_error_display() {
    insta::assert_snapshot!(
        ModVersion::parse("x.y").unwrap_err().to_string(),
        @"invalid version 'x.y': expected 1 to 4 dot-separated numbers"
    );
}
