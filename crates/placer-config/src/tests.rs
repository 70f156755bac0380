//! Tests for placer configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        best_option_count = 5
        count_before_solve = false
        progress_interval = 100
    "#;

    let config = PlacerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.best_option_count, 5);
    assert!(!config.count_before_solve);
    assert_eq!(config.progress_interval, 100);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        best_option_count: 3
    "#;

    let config = PlacerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.best_option_count, 3);
    assert!(config.count_before_solve);
    assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
}

#[test]
fn test_empty_document_gives_defaults() {
    let config = PlacerConfig::from_toml_str("").unwrap();
    assert_eq!(config, PlacerConfig::default());
}

#[test]
fn test_zero_best_option_count_rejected() {
    let err = PlacerConfig::from_toml_str("best_option_count = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let config = PlacerConfig::load("does-not-exist/placer.toml").unwrap_or_default();
    assert_eq!(config.best_option_count, 1);
}

#[test]
fn test_builder() {
    let config = PlacerConfig::new()
        .with_best_option_count(4)
        .with_count_before_solve(false)
        .with_progress_interval(0);

    assert_eq!(config.best_option_count, 4);
    assert!(!config.count_before_solve);
    assert_eq!(config.progress_interval, 0);
    assert!(config.validate().is_ok());
}
