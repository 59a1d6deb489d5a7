//! Tests for the binary's command-line behavior.

mod common;

use std::process::{Command, Output};

use common::mock_backend::{MockBackend, MockResponse};
use common::{closed_endpoint, temp_config};

fn productfeed_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_productfeed"))
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        productfeed_cmd()
            .args(args)
            .env_remove("PRODUCTFEED_LOG")
            .output()
            .expect("Failed to execute command")
    })
    .await
    .unwrap()
}

fn isolated_config() -> (tempfile::TempDir, String) {
    let (dir, path) = temp_config("");
    (dir, path.to_string_lossy().into_owned())
}

#[test]
fn test_help_lists_subcommands() {
    let output = productfeed_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("products"));
    assert!(stdout.contains("counter"));
    assert!(stdout.contains("--config"));
}

#[tokio::test]
async fn test_counter_prints_result() {
    let (_dir, config) = isolated_config();
    let output = run(vec![
        "--config".into(),
        config,
        "counter".into(),
        "inc".into(),
        "inc".into(),
        "dec".into(),
    ])
    .await;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Counter: 1\n");
}

#[tokio::test]
async fn test_products_prints_list() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"userId":1,"id":1,"title":"A","body":"b"},{"userId":1,"id":2,"title":"C","body":"d"}]"#,
        ))
        .await;

    let (_dir, config) = isolated_config();
    let output = run(vec![
        "--config".into(),
        config,
        "products".into(),
        "--endpoint".into(),
        backend.url("/posts?userId=1"),
    ])
    .await;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "#1 A\n    b\n#2 C\n    d\n"
    );
}

#[tokio::test]
async fn test_products_failure_exits_with_error() {
    let (_dir, config) = isolated_config();
    let output = run(vec![
        "--config".into(),
        config,
        "products".into(),
        "--endpoint".into(),
        closed_endpoint(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Error! "));
}

#[test]
fn test_invalid_endpoint_reports_config_error() {
    let (_dir, config) = isolated_config();
    let output = productfeed_cmd()
        .args(["--config", &config, "products", "--endpoint", "ftp://example.com/x"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must use http or https"), "{}", stderr);
}

#[test]
fn test_invalid_config_reports_error() {
    let (_dir, path) = temp_config("[store]\nchannel_capacity = 0\n");
    let output = productfeed_cmd()
        .args(["--config", path.to_str().unwrap(), "counter"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("channel_capacity must be greater than 0"));
}
