//! Configuration Integration Tests

use std::path::PathBuf;

use meeting_tasks::storage::config::ConfigService;
use meeting_tasks::{AppConfig, AppError, ConfigOverrides, Pipeline};

#[test]
fn test_file_then_overrides() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "model": "gpt-4o-mini",
            "user_aliases": ["Sato", "Sato-san"],
            "output_root": "runs",
            "renderer": {"program": "node", "args": ["render.js"], "working_dir": "tools/render"}
        }"#,
    )
    .unwrap();

    let config = ConfigService::resolve(
        Some(&path),
        ConfigOverrides {
            aliases: vec!["Tanaka".to_string()],
            ..Default::default()
        },
    )
    .unwrap()
    .into_config();

    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.user_aliases, vec!["Tanaka"]);
    assert_eq!(config.output_root, PathBuf::from("runs"));
    assert_eq!(config.renderer.program, "node");
    assert!(config.renderer.enabled);
    assert_eq!(config.request_timeout_secs, 120);
}

#[test]
fn test_written_config_resolves_unchanged() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.json");
    let config = AppConfig {
        proxy_url: Some("socks5://127.0.0.1:1080".to_string()),
        max_tokens: Some(1024),
        ..AppConfig::default()
    };
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = ConfigService::resolve(Some(&path), ConfigOverrides::default())
        .unwrap()
        .into_config();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_override_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    let err = ConfigService::resolve(
        Some(&path),
        ConfigOverrides {
            model: Some(String::new()),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_pipeline_from_config_builds_without_api_key() {
    let config = AppConfig {
        api_key_env: "MEETING_TASKS_INTEGRATION_NO_KEY".to_string(),
        ..AppConfig::default()
    };
    assert!(Pipeline::from_config(config).is_ok());
}

#[tokio::test]
async fn test_missing_api_key_fails_before_network() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("meeting.txt");
    std::fs::write(&input, "Nagai, please write the report.").unwrap();

    let config = AppConfig {
        api_key_env: "MEETING_TASKS_INTEGRATION_NO_KEY".to_string(),
        base_url: Some("http://127.0.0.1:9/v1/chat/completions".to_string()),
        output_root: temp.path().join("output"),
        ..AppConfig::default()
    };
    let err = Pipeline::from_config(config)
        .unwrap()
        .run(&input)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "AuthenticationFailed");
    assert!(err.to_string().contains("MEETING_TASKS_INTEGRATION_NO_KEY"));
    assert!(!temp.path().join("output").exists());
}
