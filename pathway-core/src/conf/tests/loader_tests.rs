use crate::conf::{BuiltinDeviceKind, ConfigError, load_config};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp config");
    file.write_all(yaml.as_bytes())
        .expect("failed to write temp config");
    file
}

#[test]
fn loads_a_device_chain_in_order() {
    // Arrange
    let file = write_config(
        r#"
devices:
  - name: clean
    builtin: clean_path
  - name: access-log
    builtin: structured_logging
    config:
      level: debug
"#,
    );

    // Act
    let config = load_config(file.path()).unwrap();

    // Assert
    assert_eq!(config.devices.len(), 2);
    assert_eq!(config.devices[0].name, "clean");
    assert_eq!(config.devices[0].builtin, BuiltinDeviceKind::CleanPath);
    assert_eq!(config.devices[1].builtin, BuiltinDeviceKind::StructuredLogging);
}

#[test]
fn devices_are_enabled_by_default() {
    // Arrange
    let file = write_config(
        r#"
devices:
  - name: clean
    builtin: clean_path
"#,
    );

    // Act
    let config = load_config(file.path()).unwrap();

    // Assert
    assert!(config.devices[0].enabled);
}

#[test]
fn a_device_can_be_disabled() {
    // Arrange
    let file = write_config(
        r#"
devices:
  - name: clean
    builtin: clean_path
    enabled: false
"#,
    );

    // Act
    let config = load_config(file.path()).unwrap();

    // Assert
    assert!(!config.devices[0].enabled);
}

#[test]
fn empty_device_list_is_valid() {
    // Arrange
    let file = write_config("devices: []\n");

    // Act
    let config = load_config(file.path()).unwrap();

    // Assert
    assert!(config.devices.is_empty());
}

#[test]
fn unknown_builtin_fails_parsing() {
    // Arrange
    let file = write_config(
        r#"
devices:
  - name: mystery
    builtin: not_a_device
"#,
    );

    // Act
    let result = load_config(file.path());

    // Assert
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn duplicate_device_names_are_rejected() {
    // Arrange
    let file = write_config(
        r#"
devices:
  - name: clean
    builtin: clean_path
  - name: clean
    builtin: structured_logging
"#,
    );

    // Act
    let result = load_config(file.path());

    // Assert
    match result {
        Err(ConfigError::DuplicateDevice { name }) => assert_eq!(name, "clean"),
        other => panic!("Expected DuplicateDevice, got {:?}", other),
    }
}

#[test]
fn missing_file_reports_the_path() {
    // Arrange
    let path = std::path::Path::new("/nonexistent/pathway.yaml");

    // Act
    let result = load_config(path);

    // Assert
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}
