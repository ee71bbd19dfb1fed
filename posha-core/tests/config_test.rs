use std::io::Write;

use posha_core::config::*;
use posha_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = PoshaConfig::from_toml("").unwrap();

    assert_eq!(config.storage.db_path, "posha.db");
    assert!(config.storage.wal_mode);
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    assert_eq!(
        config.profile.default_preferences,
        vec!["Minimalist".to_string(), "Sustainable".to_string()]
    );
    assert_eq!(config.profile.default_skin_tone, "Medium");

    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/var/lib/posha/wardrobe.db"
wal_mode = false

[profile]
default_preferences = ["Athleisure"]
"#;
    let config = PoshaConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, "/var/lib/posha/wardrobe.db");
    assert!(!config.storage.wal_mode);
    // Untouched keys keep defaults.
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.profile.default_preferences, vec!["Athleisure".to_string()]);
    assert_eq!(config.profile.default_skin_tone, "Medium");
}

#[test]
fn config_rejects_malformed_toml() {
    let err = PoshaConfig::from_toml("[storage\ndb_path = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validate_rejects_unknown_log_level() {
    let mut config = PoshaConfig::default();
    config.observability.log_level = "loud".into();
    let err = config.validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "observability.log_level")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validate_rejects_empty_db_path_and_blank_skin_tone() {
    let mut config = PoshaConfig::default();
    config.storage.db_path = "  ".into();
    assert!(config.validate().is_err());

    let mut config = PoshaConfig::default();
    config.profile.default_skin_tone = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn from_file_reads_toml_and_reports_missing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[observability]\nlog_level = \"debug\"").unwrap();
    let config = PoshaConfig::from_file(file.path()).unwrap();
    assert_eq!(config.observability.log_level, "debug");

    let missing = std::path::Path::new("/nonexistent/posha.toml");
    let err = PoshaConfig::from_file(missing).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
