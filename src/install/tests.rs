// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{InstallPlan, InstallReport};
use crate::config::types::InstallConfig;
use crate::manifest::{Mod, ModInfo, ModProject};
use std::path::Path;
use tempfile::TempDir;

fn project_in(temp: &TempDir) -> ModProject {
    let root = temp.path().join("project");
    std::fs::create_dir_all(root.join("anim/assets")).unwrap();
    std::fs::create_dir_all(root.join("bin/Release")).unwrap();
    std::fs::create_dir_all(root.join("obj")).unwrap();

    let project = ModProject::new(
        &root,
        Mod::new("Airlock Door", "PeterHan.AirlockDoor", "Doors"),
        ModInfo::new("469112", "1.0.0", "2"),
    );
    project.save().unwrap();

    std::fs::write(root.join("AirlockDoorPatches.cs"), "class X {}").unwrap();
    std::fs::write(root.join("AirlockDoor.csproj"), "<Project/>").unwrap();
    std::fs::write(root.join(".gitignore"), "bin/\nobj/\n").unwrap();
    std::fs::write(root.join("anim/assets/door.png"), "png").unwrap();
    std::fs::write(root.join("bin/Release/AirlockDoor.dll"), "dll").unwrap();
    std::fs::write(root.join("obj/project.assets.json"), "{}").unwrap();
    project
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap()
        .to_string_lossy()
        .replace('\\', "/")
}

#[test]
fn test_collect_default_excludes() {
    let temp = tempfile::tempdir().unwrap();
    let project = project_in(&temp);
    let mods = temp.path().join("mods");

    let plan = InstallPlan::collect(&project, &mods, &InstallConfig::default()).unwrap();

    assert_eq!(plan.target(), mods.join("PeterHan.AirlockDoor"));
    let targets: Vec<_> = plan
        .files()
        .map(|(_, dst)| relative(plan.target(), dst))
        .collect();
    assert_eq!(targets, vec!["anim/assets/door.png", "mod.yaml", "mod_info.yaml"]);
}

#[test]
fn test_collect_flattens_includes() {
    let temp = tempfile::tempdir().unwrap();
    let project = project_in(&temp);
    let config = InstallConfig {
        include: vec!["bin/Release/*.dll".to_string()],
        ..InstallConfig::default()
    };

    let plan = InstallPlan::collect(&project, temp.path(), &config).unwrap();

    let (src, dst) = plan
        .files()
        .find(|(_, dst)| dst.ends_with("AirlockDoor.dll"))
        .unwrap();
    assert_eq!(dst, plan.target().join("AirlockDoor.dll"));
    assert!(src.ends_with("bin/Release/AirlockDoor.dll"));
    assert_eq!(plan.len(), 4);
}

#[test]
fn test_collect_rejects_invalid_project() {
    let temp = tempfile::tempdir().unwrap();
    let mut project = project_in(&temp);
    project.definition.static_id = "has spaces".to_string();

    let err = InstallPlan::collect(&project, temp.path(), &InstallConfig::default()).unwrap_err();
    assert!(err.to_string().contains("refusing to install invalid project"));
}

#[test]
fn test_collect_rejects_static_id_outside_mods_dir() {
    let temp = tempfile::tempdir().unwrap();
    let mut project = project_in(&temp);
    let mods = temp.path().join("mods");
    std::fs::create_dir_all(mods.join("OtherMod")).unwrap();

    for id in ["..", ".", ".hidden"] {
        project.definition.static_id = id.to_string();
        assert!(
            InstallPlan::collect(&project, &mods, &InstallConfig::default()).is_err(),
            "{id} accepted"
        );
    }
    assert!(mods.join("OtherMod").is_dir());
}

#[cfg(unix)]
#[test]
fn test_collect_fails_on_unreadable_entries() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().unwrap();
    let project = project_in(&temp);
    let locked = project.root().join("anim/locked");
    std::fs::create_dir(&locked).unwrap();
    std::fs::write(locked.join("sprite.png"), "png").unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop root
    let readable = std::fs::read_dir(&locked).is_ok();
    let result = InstallPlan::collect(&project, &temp.path().join("mods"), &InstallConfig::default());
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }

    let err = result.unwrap_err();
    assert!(err.to_string().contains("could not be read"), "{err}");
}

#[tokio::test]
async fn test_execute_copies_then_skips_unchanged() {
    let temp = tempfile::tempdir().unwrap();
    let project = project_in(&temp);
    let mods = temp.path().join("mods");
    let plan = InstallPlan::collect(&project, &mods, &InstallConfig::default()).unwrap();

    let first = plan.execute(false, false).await.unwrap();
    assert_eq!(
        first,
        InstallReport {
            copied: 3,
            unchanged: 0
        }
    );
    assert!(plan.target().join("anim/assets/door.png").is_file());
    assert!(!plan.target().join("AirlockDoorPatches.cs").exists());

    let second = plan.execute(false, false).await.unwrap();
    assert_eq!(second.copied, 0);
    assert_eq!(second.unchanged, 3);
}

#[tokio::test]
async fn test_execute_dry_run_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let project = project_in(&temp);
    let mods = temp.path().join("mods");
    let plan = InstallPlan::collect(&project, &mods, &InstallConfig::default()).unwrap();

    let report = plan.execute(true, true).await.unwrap();
    assert_eq!(report.copied, 3);
    assert!(!mods.exists());
}

#[tokio::test]
async fn test_execute_clean_removes_stale_files() {
    let temp = tempfile::tempdir().unwrap();
    let project = project_in(&temp);
    let mods = temp.path().join("mods");
    let plan = InstallPlan::collect(&project, &mods, &InstallConfig::default()).unwrap();

    std::fs::create_dir_all(plan.target()).unwrap();
    std::fs::write(plan.target().join("stale.txt"), "old").unwrap();

    plan.execute(true, false).await.unwrap();
    assert!(!plan.target().join("stale.txt").exists());
    assert!(plan.target().join("mod.yaml").is_file());
}
