// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, open_log_file};

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::new(0).unwrap(), LogLevel::SILENT);
    assert_eq!(LogLevel::new(6).unwrap(), LogLevel::DUMP);
    assert_eq!(LogLevel::TRACE.as_u8(), 5);
    assert!(LogLevel::new(7).is_err());
    assert!(LogLevel::INFO < LogLevel::DEBUG);
}

#[test]
fn test_filter_strings_scope_to_crate() {
    let filters: Vec<_> = (0..=6)
        .map(|n| LogLevel::new(n).unwrap().to_filter_string())
        .collect();
    assert_eq!(
        filters,
        vec![
            "off",
            "error",
            "warn",
            "warn,oni_mods=info",
            "warn,oni_mods=debug",
            "warn,oni_mods=trace",
            "trace",
        ]
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(config.show_timestamps());
}

#[test]
fn test_log_level_serde_checks_range() {
    let ok: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(ok, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&LogLevel::WARN).unwrap(), "2");

    let err = serde_json::from_str::<LogLevel>("9").unwrap_err();
    assert!(err.to_string().contains("log level must be 0-6"), "{err}");
}

#[test]
fn test_open_log_file_creates_parent() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("logs/nested/oni-mods.log");

    open_log_file(&path).unwrap();
    assert!(path.is_file());
}
