// Config loading and validation tests

use hoststat::config::AppConfig;
use hoststat::{Metric, Platform};

const VALID_CONFIG: &str = r#"
[sampling]
platform = "freebsd"
path = "/var"
command_timeout_ms = 2000
snapshot_timeout_ms = 10000
metrics = ["uptime", "memory", "load_average", "io_stat"]

[output]
pretty = true
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.sampling.platform, Some(Platform::FreeBsd));
    assert_eq!(config.sampling.path, "/var");
    assert_eq!(config.sampling.command_timeout_ms, 2000);
    assert_eq!(config.sampling.snapshot_timeout_ms, 10000);
    assert_eq!(
        config.sampling.metrics,
        vec![Metric::Uptime, Metric::Memory, Metric::LoadAverage, Metric::IoStat]
    );
    assert!(config.output.pretty);
}

#[test]
fn test_config_defaults_from_empty() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.sampling.platform, None);
    assert!(config.sampling.path.is_empty());
    assert_eq!(config.sampling.command_timeout_ms, 5000);
    assert_eq!(config.sampling.metrics.len(), Metric::ALL.len());
    assert!(!config.output.pretty);
}

#[test]
fn test_config_validation_rejects_command_timeout_zero() {
    let bad = VALID_CONFIG.replace("command_timeout_ms = 2000", "command_timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("command_timeout_ms"));
}

#[test]
fn test_config_validation_rejects_snapshot_timeout_zero() {
    let bad = VALID_CONFIG.replace("snapshot_timeout_ms = 10000", "snapshot_timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("snapshot_timeout_ms"));
}

#[test]
fn test_config_validation_rejects_empty_metrics() {
    let bad = VALID_CONFIG.replace(
        r#"metrics = ["uptime", "memory", "load_average", "io_stat"]"#,
        "metrics = []",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("sampling.metrics"));
}

#[test]
fn test_config_validation_rejects_path_with_spaces() {
    let bad = VALID_CONFIG.replace("path = \"/var\"", "path = \"/var /tmp\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("sampling.path"));
}

#[test]
fn test_config_rejects_unknown_platform() {
    let bad = VALID_CONFIG.replace("platform = \"freebsd\"", "platform = \"plan9\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_rejects_unknown_metric() {
    let bad = VALID_CONFIG.replace("\"io_stat\"", "\"cpu\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_load_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("hoststat.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    let config = AppConfig::load_from_path(path.to_str().unwrap()).unwrap();
    assert_eq!(config.sampling.path, "/var");
}
