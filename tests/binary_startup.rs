//! Runs the compiled binary to check that `PORT` drives the listening socket.

use std::net::TcpListener as StdTcpListener;
use std::process::Stdio;
use std::time::Duration;

use serde_json::Value;
use tokio::process::{Child, Command};

const BIN: &str = env!("CARGO_BIN_EXE_hello-probe");

fn free_port() -> u16 {
    let listener = StdTcpListener::bind("0.0.0.0:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn spawn_with_port(port: u16) -> Child {
    Command::new(BIN)
        .env("PORT", port.to_string())
        .env("APP_ENV", "production")
        .env("RUST_LOG", "warn")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .unwrap()
}

async fn wait_until_ready(port: u16) -> reqwest::Response {
    let url = format!("http://127.0.0.1:{port}/");
    for _ in 0..100 {
        if let Ok(response) = reqwest::get(&url).await {
            return response;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("server never answered on port {port}");
}

#[tokio::test]
async fn test_binary_serves_on_configured_port() {
    let port = free_port();
    let mut child = spawn_with_port(port);

    let response = wait_until_ready(port).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["project"], "py-hello");
    assert_eq!(json["language"], "python");

    child.kill().await.unwrap();
}

#[tokio::test]
async fn test_binary_exits_non_zero_when_port_is_taken() {
    let held = StdTcpListener::bind("0.0.0.0:0").unwrap();
    let port = held.local_addr().unwrap().port();

    let child = spawn_with_port(port);
    let output = tokio::time::timeout(Duration::from_secs(10), child.wait_with_output())
        .await
        .expect("binary kept running on an occupied port")
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("failed to bind 0.0.0.0:{port}")),
        "stderr was {stderr:?}"
    );

    drop(held);
}

#[test]
fn test_container_image_runs_in_production_mode() {
    let dockerfile = include_str!("../Dockerfile");
    let runtime_stage = dockerfile
        .rsplit("FROM ")
        .next()
        .unwrap();

    assert!(runtime_stage.contains("ENV APP_ENV=production"));
    assert!(runtime_stage.contains("ENV PORT=5000"));
}
