//! Integration tests for loading configuration files

use quill::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config_file() {
    let file = write_config(
        r#"
paging:
  default_page_size: 25
  max_page_size: 200
validation:
  max_name_length: 40
  max_title_length: 120
  max_content_length: 5000
  max_username_length: 20
  max_email_length: 100
logging:
  level: "quill=debug"
  with_target: true
"#,
    );

    let config = QuillConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.paging.default_page_size, 25);
    assert_eq!(config.paging.max_page_size, 200);
    assert_eq!(config.validation.max_title_length, 120);
    assert_eq!(config.validation.max_email_length, 100);
    assert_eq!(config.logging.level, "quill=debug");
    assert!(config.logging.with_target);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("{}\n");
    let config = QuillConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config, QuillConfig::default());
}

#[test]
fn test_missing_file_reports_path() {
    let err = QuillConfig::from_yaml_file("/definitely/not/here/quill.yaml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here/quill.yaml"));
}

#[test]
fn test_parse_error_names_the_file() {
    let file = write_config("paging:\n  default_page_size: lots\n");
    let path = file.path().to_str().unwrap().to_string();

    let err = QuillConfig::from_yaml_file(&path).unwrap_err();
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::ParseError { file: Some(name), .. }) => assert_eq!(name, &path),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_inconsistent_page_sizes_are_rejected() {
    let file = write_config("paging:\n  default_page_size: 30\n  max_page_size: 10\n");

    let err = QuillConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    assert!(matches!(
        config_err,
        ConfigError::InvalidValue { field, .. } if field == "paging.default_page_size"
    ));

    let wrapped = QuillError::from(config_err.clone());
    assert_eq!(wrapped.error_code(), "CONFIG_ERROR");
}
