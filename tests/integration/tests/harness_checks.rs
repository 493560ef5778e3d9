//! Harness runs built from configuration against a fake proxy.

use codeteacher_core::config::{CheckConfig, Config};
use codeteacher_harness::{run_checks, RunClient, EXIT_CHECK_FAILED, EXIT_PASSED};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Echo the submitted code back, the way a proxy that runs `print`-style
/// snippets would.
fn echo_code(request: &Request) -> ResponseTemplate {
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    let code = body["code"].as_str().unwrap_or_default();
    let printed = code
        .split('"')
        .nth(1)
        .unwrap_or_default()
        .to_string();
    ResponseTemplate::new(200).set_body_string(printed)
}

#[tokio::test]
async fn test_default_checks_against_echo_proxy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(echo_code)
        .expect(2)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.harness.base_url = server.uri();
    config.validate().unwrap();

    let client = RunClient::from_config(&config.harness).unwrap();
    let report = run_checks(&client, &config.harness.checks).await.unwrap();

    assert_eq!(report.exit_code(), EXIT_PASSED);
}

#[tokio::test]
async fn test_checks_are_sent_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(echo_code)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.harness.base_url = server.uri();
    config.harness.checks = vec![
        CheckConfig::new("go", r#"fmt.Println("one")"#, "one"),
        CheckConfig::new("ruby", r#"puts "two""#, "three"),
    ];

    let client = RunClient::from_config(&config.harness).unwrap();
    let report = run_checks(&client, &config.harness.checks).await.unwrap();
    assert_eq!(report.exit_code(), EXIT_CHECK_FAILED);

    let requests = server.received_requests().await.unwrap();
    let languages: Vec<String> = requests
        .iter()
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            body["language"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(languages, vec!["go", "ruby"]);
    assert!(report.transcript().contains(&"RUBY OK: false".to_string()));
}
