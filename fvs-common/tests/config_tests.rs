//! Tests for runtime configuration resolution
//!
//! Tests that touch `FVS_ROOT_FOLDER` are marked `#[serial]` so they never
//! race on the process environment.

use fvs_common::config::{
    resolve_root_folder, CliOverrides, RootFolderInitializer, ServerSettings, TomlConfig,
    DATABASE_FILE, DEFAULT_HOST, DEFAULT_PORT, ROOT_FOLDER_ENV,
};
use fvs_common::SurveyVariant;
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
#[serial]
fn test_cli_argument_wins_over_env_and_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/from-env");
    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/from-toml")),
        ..Default::default()
    };

    let resolved = resolve_root_folder(Some(Path::new("/tmp/from-cli")), ROOT_FOLDER_ENV, &toml);
    env::remove_var(ROOT_FOLDER_ENV);

    assert_eq!(resolved, PathBuf::from("/tmp/from-cli"));
}

#[test]
#[serial]
fn test_env_wins_over_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/from-env");
    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/from-toml")),
        ..Default::default()
    };

    let resolved = resolve_root_folder(None, ROOT_FOLDER_ENV, &toml);
    env::remove_var(ROOT_FOLDER_ENV);

    assert_eq!(resolved, PathBuf::from("/tmp/from-env"));
}

#[test]
#[serial]
fn test_toml_then_default() {
    env::remove_var(ROOT_FOLDER_ENV);
    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/from-toml")),
        ..Default::default()
    };
    assert_eq!(
        resolve_root_folder(None, ROOT_FOLDER_ENV, &toml),
        PathBuf::from("/tmp/from-toml")
    );

    let fallback = resolve_root_folder(None, ROOT_FOLDER_ENV, &TomlConfig::default());
    assert!(!fallback.as_os_str().is_empty());
}

#[test]
fn test_parse_full_toml() {
    let config = TomlConfig::parse(
        r#"
        root_folder = "/srv/fvs"
        host = "0.0.0.0"
        port = 8080
        survey = "section-c"
        "#,
    )
    .unwrap();

    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/fvs")));
    assert_eq!(config.host.as_deref(), Some("0.0.0.0"));
    assert_eq!(config.port, Some(8080));
    assert_eq!(config.survey.as_deref(), Some("section-c"));
}

#[test]
fn test_malformed_toml_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();

    assert_eq!(TomlConfig::load_or_default(Some(path.as_path())), TomlConfig::default());
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    assert_eq!(TomlConfig::load_or_default(Some(path.as_path())), TomlConfig::default());
    assert_eq!(TomlConfig::load_or_default(None), TomlConfig::default());
}

#[test]
#[serial]
fn test_server_settings_defaults() {
    env::remove_var(ROOT_FOLDER_ENV);
    let settings = ServerSettings::resolve(CliOverrides::default(), &TomlConfig::default());

    assert_eq!(settings.host, DEFAULT_HOST);
    assert_eq!(settings.port, DEFAULT_PORT);
    assert_eq!(settings.survey, SurveyVariant::SectionA);
    assert_eq!(settings.bind_address(), format!("{}:{}", DEFAULT_HOST, DEFAULT_PORT));
}

#[test]
#[serial]
fn test_server_settings_cli_over_toml_and_bad_survey_name() {
    env::remove_var(ROOT_FOLDER_ENV);
    let toml = TomlConfig {
        host: Some("0.0.0.0".to_string()),
        port: Some(9000),
        survey: Some("no-such-survey".to_string()),
        ..Default::default()
    };
    let cli = CliOverrides {
        port: Some(9100),
        ..Default::default()
    };

    let settings = ServerSettings::resolve(cli, &toml);

    assert_eq!(settings.host, "0.0.0.0");
    assert_eq!(settings.port, 9100);
    assert_eq!(settings.survey, SurveyVariant::default());
}

#[test]
fn test_root_folder_initializer_creates_directory() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("fvs-root");
    let initializer = RootFolderInitializer::new(root.clone());

    initializer.ensure_directory_exists().unwrap();

    assert!(root.is_dir());
    assert_eq!(initializer.database_path(), root.join(DATABASE_FILE));
}
