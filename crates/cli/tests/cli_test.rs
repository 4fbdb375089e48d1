//! End-to-end tests of the settings binary.

use std::process::{Command, Output};

const VARS: &[&str] = &[
    "APP_PORT",
    "DATABASE_URL",
    "REDIS_URL",
    "LOG_LEVEL",
    "MONGO_URL",
    "EVENT_STORE_URL",
    "RUST_LOG",
];

fn run(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_settings"));
    for name in VARS {
        cmd.env_remove(name);
    }
    cmd.envs(vars.iter().copied()).args(args);
    cmd.output().expect("failed to run settings binary")
}

#[test]
fn test_show_defaults_as_json() {
    let output = run(&["show", "--json"], &[]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "app_port": 5000,
            "database_url": "",
            "redis_url": "",
            "log_level": "info",
        })
    );
}

#[test]
fn test_show_overrides() {
    let output = run(&["show"], &[("APP_PORT", "8080"), ("LOG_LEVEL", "debug")]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|line| line == "app_port=8080"));
    assert!(stdout.lines().any(|line| line == "log_level=debug"));
}

#[test]
fn test_invalid_port_prevents_start() {
    let output = run(&["show"], &[("APP_PORT", "notanumber")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("APP_PORT"));
    assert!(stderr.contains("notanumber"));
}

#[test]
fn test_check_warns_about_missing_urls() {
    let output = run(&["check"], &[("MONGO_URL", "mongodb://mongo:27017")]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DATABASE_URL"));
    assert!(stderr.contains("EVENT_STORE_URL"));
    assert!(!stderr.contains("MONGO_URL"));
}

#[test]
fn test_check_warns_under_unusable_log_level() {
    let output = run(&["check"], &[("LOG_LEVEL", "verbose-ish")]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unusable log level"));
    assert!(stderr.contains("DATABASE_URL"));
    assert!(stderr.contains("REDIS_URL"));
}

#[test]
fn test_verbose_logs_defaulted_variables() {
    let output = run(&["-v", "show"], &[]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Environment variable not set, using default"));
    assert!(stderr.contains("APP_PORT"));
}
