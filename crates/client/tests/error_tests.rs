//! Error handling tests for the downtime endpoints.
//!
//! # Invariants
//! - A non-2xx response becomes `ClientError::ApiError` carrying the request URL
//! - The message is the `status` text of the Icinga error body when present
//! - Each failing call is attempted exactly once

mod common;

use common::*;
use wiremock::matchers::{method, path};

fn remove_request() -> RemoveDowntimeRequest {
    RemoveDowntimeRequest::new(ObjectType::Downtime).name(Some("missing!downtime".to_string()))
}

#[tokio::test]
async fn test_not_found_uses_icinga_status_message() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("actions/no_objects_found.json");

    Mock::given(method("POST"))
        .and(path("/v1/actions/remove-downtime"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.remove_downtime(&remove_request()).await.unwrap_err();

    match &err {
        ClientError::ApiError {
            status,
            url,
            message,
        } => {
            assert_eq!(*status, 404);
            assert!(url.ends_with("/v1/actions/remove-downtime"));
            assert_eq!(message, "No objects found.");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        format!(
            "Request \"{}/v1/actions/remove-downtime\" failed with status 404: No objects found.",
            mock_server.uri()
        )
    );
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/actions/remove-downtime"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized. Please check your user credentials."))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.remove_downtime(&remove_request()).await.unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(401));
    assert!(
        err.to_string()
            .ends_with("failed with status 401: Unauthorized. Please check your user credentials.")
    );
}

#[tokio::test]
async fn test_bad_request_keeps_raw_body_when_not_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/actions/remove-downtime"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid filter"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.remove_downtime(&remove_request()).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::ApiError { status: 400, ref message, .. } if message == "Invalid filter"
    ));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/actions/remove-downtime"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": 500, "status": "Internal error"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.remove_downtime(&remove_request()).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(!err.is_transport_error());
}

#[tokio::test]
async fn test_invalid_json_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/actions/remove-downtime"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.remove_downtime(&remove_request()).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on port 1
    let client = test_client("http://127.0.0.1:1");
    let err = client.remove_downtime(&remove_request()).await.unwrap_err();

    assert!(err.is_transport_error(), "unexpected error: {:?}", err);
    assert_eq!(err.status(), None);
}
