//! Integration tests for response classification.
//!
//! These tests drive real HTTP responses from a mock server through the
//! dispatcher and check the error (or pass-through) each one produces.

use mailchimp_api::{
    Credentials, ErrorKind, HostUrl, HttpError, MailchimpClient, MailchimpConfig, MailchimpError,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates an API-key client whose requests go to the mock server.
async fn client_for(server: &MockServer) -> MailchimpClient {
    let config = MailchimpConfig::builder()
        .credentials(Credentials::api_key("user", "abc-us6").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();

    MailchimpClient::new(&config).await.unwrap()
}

async fn respond_to_get_lists(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/3.0/lists/"))
        .respond_with(template)
        .mount(server)
        .await;
}

// ============================================================================
// Classified Errors
// ============================================================================

#[tokio::test]
async fn test_every_documented_status_maps_to_its_kind() {
    for kind in ErrorKind::KNOWN {
        let code = kind.code().unwrap();
        let server = MockServer::start().await;
        respond_to_get_lists(
            &server,
            ResponseTemplate::new(code).set_body_json(json!({
                "type": "https://mailchimp.com/developer/marketing/docs/errors/",
                "title": "Some Title",
                "status": code,
                "detail": format!("detail for {code}"),
                "instance": "995c5cb0-3280-4a6e-808b-3b096d0bb219"
            })),
        )
        .await;

        let client = client_for(&server).await;
        let error = client.get_lists().await.unwrap_err();

        assert_eq!(error.kind(), Some(kind), "status {code}");
        let api_error = error.api_error().unwrap();
        assert_eq!(api_error.detail, format!("detail for {code}"));
        assert_eq!(api_error.title.as_deref(), Some("Some Title"));
        assert_eq!(
            api_error.instance.as_deref(),
            Some("995c5cb0-3280-4a6e-808b-3b096d0bb219")
        );
    }
}

#[tokio::test]
async fn test_unmapped_status_is_unexpected_with_code_and_detail() {
    let server = MockServer::start().await;
    respond_to_get_lists(
        &server,
        ResponseTemplate::new(422)
            .set_body_json(json!({"status": 422, "detail": "Invalid Resource"})),
    )
    .await;

    let client = client_for(&server).await;
    let error = client.get_lists().await.unwrap_err();

    assert_eq!(error.kind(), Some(ErrorKind::Unexpected));
    assert_eq!(error.to_string(), "Error: 422. Message Invalid Resource");
}

#[tokio::test]
async fn test_numeric_string_status_is_classified() {
    let server = MockServer::start().await;
    respond_to_get_lists(
        &server,
        ResponseTemplate::new(404)
            .set_body_json(json!({"status": "404", "detail": "Nope"})),
    )
    .await;

    let client = client_for(&server).await;
    let error = client.get_lists().await.unwrap_err();
    assert_eq!(error.kind(), Some(ErrorKind::ResourceNotFound));
}

#[tokio::test]
async fn test_request_id_header_is_attached_to_api_error() {
    let server = MockServer::start().await;
    respond_to_get_lists(
        &server,
        ResponseTemplate::new(401)
            .insert_header("X-Request-Id", "req-abc-123")
            .set_body_json(json!({"status": 401, "detail": "Your API key may be invalid."})),
    )
    .await;

    let client = client_for(&server).await;
    let error = client.get_lists().await.unwrap_err();

    let api_error = error.api_error().unwrap();
    assert_eq!(api_error.kind, ErrorKind::ApiKeyMissing);
    assert_eq!(api_error.request_id.as_deref(), Some("req-abc-123"));
}

// ============================================================================
// Pass-through and Fallbacks
// ============================================================================

#[tokio::test]
async fn test_success_body_is_returned_unchanged() {
    let body = json!({
        "lists": [{"id": "57afe96172", "name": "Hats"}],
        "total_items": 1,
        "_links": []
    });

    let server = MockServer::start().await;
    respond_to_get_lists(&server, ResponseTemplate::new(200).set_body_json(body.clone())).await;

    let client = client_for(&server).await;
    assert_eq!(client.get_lists().await.unwrap(), body);
}

#[tokio::test]
async fn test_error_body_without_status_and_detail_passes_through() {
    let body = json!({"error": "not a problem document"});

    let server = MockServer::start().await;
    respond_to_get_lists(&server, ResponseTemplate::new(400).set_body_json(body.clone())).await;

    let client = client_for(&server).await;
    assert_eq!(client.get_lists().await.unwrap(), body);
}

#[tokio::test]
async fn test_non_json_error_body_is_generic_response_error() {
    let server = MockServer::start().await;
    respond_to_get_lists(
        &server,
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    )
    .await;

    let client = client_for(&server).await;
    match client.get_lists().await {
        Err(MailchimpError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 502);
            assert_eq!(e.message, "<html>Bad Gateway</html>");
            assert_eq!(e.to_string(), "Error: 502. Message <html>Bad Gateway</html>");
        }
        other => panic!("expected a generic response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockServer::start().await;
    respond_to_get_lists(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let client = client_for(&server).await;
    assert!(matches!(
        client.get_lists().await,
        Err(MailchimpError::Http(HttpError::Decode { code: 200, .. }))
    ));
}

#[tokio::test]
async fn test_network_error_passes_through_unchanged() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;
    drop(server);

    assert!(matches!(
        client.get_lists().await,
        Err(MailchimpError::Http(HttpError::Network(_)))
    ));
}
