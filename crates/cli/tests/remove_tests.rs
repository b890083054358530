//! End-to-end tests for removing downtimes.

mod common;

use common::*;
use icinga_client::testing::load_fixture;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_remove_downtime_by_name() {
    let server = MockServer::start().await;
    let fixture = load_fixture("actions/remove_downtime.json");

    Mock::given(method("POST"))
        .and(path("/v1/actions/remove-downtime"))
        .and(header("Authorization", BASIC_AUTH_HEADER))
        .and(header("X-HTTP-Method-Override", "POST"))
        .and(body_json(json!({
            "type": "Downtime",
            "downtime": DOWNTIME_NAME
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&server)
        .await;

    let output = downtime_cmd_with_url(&server.uri())
        .args([
            "--state",
            "absent",
            "--object-type",
            "Downtime",
            "--name",
            DOWNTIME_NAME,
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let envelope = envelope(&output.stdout);
    assert_eq!(envelope["changed"], true);
    assert_eq!(envelope["results"], fixture["results"]);
}

#[tokio::test]
async fn test_remove_downtimes_by_filter_with_vars() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/actions/remove-downtime"))
        .and(body_json(json!({
            "type": "Host",
            "filter": "host.name==h",
            "filter_vars": {"h": "test-host.local"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let output = downtime_cmd_with_url(&server.uri())
        .args([
            "--state",
            "absent",
            "--filters",
            "host.name==h",
            "--filter-vars",
            r#"{"h": "test-host.local"}"#,
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        envelope(&output.stdout),
        json!({"changed": true, "results": []})
    );
}
