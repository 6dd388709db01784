//! Unit tests for the startup check

use super::*;
use tempfile::TempDir;

#[test]
fn test_default_config_passes() {
    let capabilities = check(&StatsConfig::default()).unwrap();
    assert!(!capabilities.sqlite_version.is_empty());
}

#[test]
fn test_db_in_existing_directory_passes() {
    let temp_dir = TempDir::new().unwrap();
    let config = StatsConfig::default().with_db_path(temp_dir.path().join("football_stats.db"));
    assert!(check(&config).is_ok());
}

#[test]
fn test_missing_db_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = StatsConfig::default()
        .with_db_path(temp_dir.path().join("does-not-exist").join("football_stats.db"));

    match check(&config) {
        Err(StatsError::DependencyMissing { what }) => {
            assert!(what.contains("database directory"));
        }
        other => panic!("Expected DependencyMissing, got {other:?}"),
    }
}

#[test]
fn test_invalid_source_url_fails() {
    let config = StatsConfig::default().with_source_url("not a url");
    assert!(matches!(
        check(&config),
        Err(StatsError::DependencyMissing { .. })
    ));
}

#[test]
fn test_non_http_scheme_fails() {
    let config = StatsConfig::default().with_source_url("ftp://fbref.com/stats");
    match check(&config) {
        Err(StatsError::DependencyMissing { what }) => assert!(what.contains("ftp")),
        other => panic!("Expected DependencyMissing, got {other:?}"),
    }
}
