//! CLI binary tests.
//!
//! These run the compiled `codeteacher` binary and check its output and exit
//! status, with a wiremock server standing in for the execution proxy.

use serde_json::json;
use std::io::Write;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn codeteacher() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codeteacher"));
    cmd.env_remove("VPT_PROXY_URL")
        .env_remove("CODETEACHER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

async fn proxy_responding(js: ResponseTemplate, py: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    for (language, template) in [("javascript", js), ("python", py)] {
        Mock::given(method("POST"))
            .and(path("/run"))
            .and(body_partial_json(json!({ "language": language })))
            .respond_with(template)
            .mount(&server)
            .await;
    }
    server
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test]
async fn test_version() {
    let output = codeteacher().arg("version").output().await.unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("codeteacher"));
}

#[tokio::test]
async fn test_check_all_passed() {
    let server = proxy_responding(
        ResponseTemplate::new(200).set_body_string("hello from js"),
        ResponseTemplate::new(200).set_body_string("hello from py"),
    )
    .await;

    let output = codeteacher()
        .args(["check", "--base-url", &server.uri()])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let transcript = stdout(&output);
    assert!(transcript.starts_with("Integration runner started"));
    assert!(transcript.contains("All integration checks passed"));
}

#[tokio::test]
async fn test_check_reads_proxy_url_from_env() {
    let server = proxy_responding(
        ResponseTemplate::new(200).set_body_string("hello from js"),
        ResponseTemplate::new(200).set_body_string("hello from py"),
    )
    .await;

    let output = codeteacher()
        .arg("check")
        .env("VPT_PROXY_URL", server.uri())
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
}

#[tokio::test]
async fn test_check_failed_exits_2() {
    let server = proxy_responding(
        ResponseTemplate::new(200).set_body_string("hello from js"),
        ResponseTemplate::new(500),
    )
    .await;

    let output = codeteacher()
        .args(["check", "--base-url", &server.uri()])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let transcript = stdout(&output);
    assert!(transcript.contains("PY status: 500"));
    assert!(transcript.contains("One or more checks failed"));
}

#[tokio::test]
async fn test_check_unreachable_exits_3() {
    // Bind and drop a listener to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let output = codeteacher()
        .args(["check", "--base-url", &format!("http://127.0.0.1:{}", port)])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Integration runner error"));
}

#[tokio::test]
async fn test_check_unusable_proxy_url_exits_3() {
    let output = codeteacher()
        .arg("check")
        .env("VPT_PROXY_URL", "localhost:4000")
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Integration runner error"));
}

#[tokio::test]
async fn test_check_zero_timeout_exits_3() {
    let output = codeteacher()
        .args(["check", "--timeout-ms", "0"])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
}

#[tokio::test]
async fn test_check_timeout_exits_3() {
    let server = proxy_responding(
        ResponseTemplate::new(200)
            .set_body_string("hello from js")
            .set_delay(Duration::from_secs(5)),
        ResponseTemplate::new(200).set_body_string("hello from py"),
    )
    .await;

    let output = codeteacher()
        .args(["check", "--base-url", &server.uri(), "--timeout-ms", "200"])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
}

#[tokio::test]
async fn test_practice_json_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let snippet = dir.path().join("snippet.js");
    std::fs::File::create(&snippet)
        .unwrap()
        .write_all(br#"console.log("hi", 1); throw new Error("bad");"#)
        .unwrap();

    let output = codeteacher()
        .args(["practice", "--json"])
        .arg(&snippet)
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    let lines: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        lines,
        json!([
            { "text": "hi 1", "is_error": false },
            { "text": "Error: bad", "is_error": true },
        ])
    );
}

#[tokio::test]
async fn test_practice_runs_class_declarations() {
    let dir = tempfile::TempDir::new().unwrap();
    let snippet = dir.path().join("classes.js");
    std::fs::write(
        &snippet,
        r#"class Dog { bark() { return "woof"; } } console.log(new Dog().bark());"#,
    )
    .unwrap();

    let output = codeteacher()
        .args(["practice", "--json"])
        .arg(&snippet)
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    let lines: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(lines, json!([{ "text": "woof", "is_error": false }]));
}

#[tokio::test]
async fn test_practice_unsupported_language() {
    let output = codeteacher()
        .args(["practice", "--language", "python"])
        .stdin(Stdio::null())
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output)
        .contains("Interactive practice is currently available for JavaScript lessons only."));
}
