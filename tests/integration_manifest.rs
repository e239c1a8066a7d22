// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for manifest loading and the project commands.
//!
//! Uses manifests shaped like the ones published mods ship with.

use oni_mods::cli::project::{BumpArgs, BumpPart, InfoArgs, ValidateArgs};
use oni_mods::cmd::bump::run_bump_command;
use oni_mods::cmd::info::{format_info, info_json, run_info_command};
use oni_mods::cmd::validate::run_validate_command;
use oni_mods::error::{ManifestError, OniError};
use oni_mods::manifest::ModProject;
use std::path::Path;

const MOD_YAML: &str = "\
title: \"Sweep By Type\"
description: \"Sweepers can be restricted to specific item types.\"
staticID: SweepByType
";

// Build numbers are written unquoted by most mods
const MOD_INFO_YAML: &str = "\
supportedContent: ALL
minimumSupportedBuild: 469112
version: 1.4.2
APIVersion: 2
";

fn write_project(dir: &Path, mod_yaml: &str, mod_info_yaml: &str) {
    std::fs::write(dir.join("mod.yaml"), mod_yaml).unwrap();
    std::fs::write(dir.join("mod_info.yaml"), mod_info_yaml).unwrap();
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn manifest_load_published_layout() {
    let temp = tempfile::tempdir().unwrap();
    write_project(temp.path(), MOD_YAML, MOD_INFO_YAML);

    let project = ModProject::load(temp.path()).unwrap();
    assert_eq!(project.definition.static_id, "SweepByType");
    assert_eq!(project.info.minimum_supported_build, "469112");
    assert_eq!(project.info.api_version, "2");

    // "ALL" is not a known id, so only strict validation fails
    let report = project.validate();
    assert!(report.errors().is_empty());
    assert_eq!(report.warnings().len(), 1);
}

#[test]
fn manifest_missing_info_field_names_it() {
    let temp = tempfile::tempdir().unwrap();
    write_project(temp.path(), MOD_YAML, "version: 1.0.0\nAPIVersion: 2\n");

    let err = ModProject::load(temp.path()).unwrap_err();
    let inner = match err {
        OniError::Manifest(inner) => inner,
        other => panic!("expected manifest error, got {other:?}"),
    };
    let ManifestError::Invalid { file, message } = *inner else {
        panic!("expected invalid manifest");
    };
    assert_eq!(file, "mod_info.yaml");
    assert!(message.contains("minimumSupportedBuild"), "{message}");
}

#[test]
fn manifest_missing_files_reported() {
    let temp = tempfile::tempdir().unwrap();
    let err = ModProject::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("mod.yaml"), "{err}");
}

// =============================================================================
// validate / info / bump
// =============================================================================

#[test]
fn validate_command_strictness() {
    let temp = tempfile::tempdir().unwrap();
    write_project(temp.path(), MOD_YAML, MOD_INFO_YAML);

    let args = |strict| ValidateArgs {
        dir: temp.path().to_path_buf(),
        strict,
    };
    run_validate_command(&args(false)).unwrap();
    let err = run_validate_command(&args(true)).unwrap_err();
    assert!(err.to_string().contains("0 error(s) and 1 warning(s)"), "{err}");
}

#[test]
fn validate_command_rejects_blank_title() {
    let temp = tempfile::tempdir().unwrap();
    write_project(
        temp.path(),
        "title: \"\"\nstaticID: X\ndescription: d\n",
        MOD_INFO_YAML,
    );
    let args = ValidateArgs {
        dir: temp.path().to_path_buf(),
        strict: false,
    };
    assert!(run_validate_command(&args).is_err());
}

#[test]
fn info_command_renders_both_manifests() {
    let temp = tempfile::tempdir().unwrap();
    write_project(temp.path(), MOD_YAML, MOD_INFO_YAML);
    let project = ModProject::load(temp.path()).unwrap();

    insta::assert_snapshot!(format_info(&project).join("\n"), @r"
    title                 = Sweep By Type
    staticID              = SweepByType
    description           = Sweepers can be restricted to specific item types.
    supportedContent      = ALL
    minimumSupportedBuild = 469112
    version               = 1.4.2
    APIVersion            = 2
    ");

    let json = info_json(&project);
    assert_eq!(json["mod"]["staticID"], "SweepByType");
    assert_eq!(json["modInfo"]["APIVersion"], "2");
    assert_eq!(json["modInfo"]["supportedContent"], "ALL");

    run_info_command(&InfoArgs {
        dir: temp.path().to_path_buf(),
        json: true,
    })
    .unwrap();
}

#[test]
fn bump_command_rewrites_version() {
    let temp = tempfile::tempdir().unwrap();
    write_project(temp.path(), MOD_YAML, MOD_INFO_YAML);
    let args = |part| BumpArgs {
        dir: temp.path().to_path_buf(),
        part,
    };

    run_bump_command(&args(BumpPart::Minor), false).unwrap();
    assert_eq!(ModProject::load(temp.path()).unwrap().info.version, "1.5.0");

    run_bump_command(&args(BumpPart::Patch), true).unwrap();
    assert_eq!(ModProject::load(temp.path()).unwrap().info.version, "1.5.0");

    run_bump_command(&args(BumpPart::Major), false).unwrap();
    let project = ModProject::load(temp.path()).unwrap();
    assert_eq!(project.info.version, "2.0.0");
    assert_eq!(project.definition.title, "Sweep By Type");
}

#[test]
fn bump_command_rejects_non_numeric_version() {
    let temp = tempfile::tempdir().unwrap();
    write_project(
        temp.path(),
        MOD_YAML,
        "minimumSupportedBuild: 1\nversion: v1-beta\nAPIVersion: 2\n",
    );
    let err = run_bump_command(
        &BumpArgs {
            dir: temp.path().to_path_buf(),
            part: BumpPart::Patch,
        },
        false,
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid version 'v1-beta'"), "{err}");
}
