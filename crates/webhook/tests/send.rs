use mkfly_webhook::{SubmissionResult, WebhookClient, WebhookConfig, WebhookError};
use serde_json::json;
use time::macros::datetime;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn client(url: impl Into<String>) -> anyhow::Result<WebhookClient> {
    Ok(WebhookClient::new(&WebhookConfig {
        url: url.into(),
        timeout_secs: None,
    })?)
}

#[tokio::test]
async fn test_send_success() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/mkfly"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "nombre": "Test User",
            "empresa": "Test Company",
            "correo": "test@example.com",
            "telefono": "+1234567890",
            "mensaje": "This is a test message",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(format!("{}/webhook/mkfly", server.uri()))?;
    let submission = mkfly_webhook::test_submission()?;

    assert_eq!(client.send(&submission).await, SubmissionResult::Success);

    Ok(())
}

#[tokio::test]
async fn test_send_server_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(server.uri())?;
    let submission = mkfly_webhook::test_submission()?;

    let result = client.send(&submission).await;
    assert_eq!(
        result,
        SubmissionResult::ServerError {
            status: 500,
            status_text: "Internal Server Error".to_owned(),
            body: "oops".to_owned(),
        }
    );
    assert_eq!(
        result.to_string(),
        "server error: 500 Internal Server Error. Detail: oops"
    );

    Ok(())
}

#[tokio::test]
async fn test_send_unregistered_status_has_empty_text() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(599).set_body_string("edge"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(server.uri())?;
    let submission = mkfly_webhook::test_submission()?;

    assert_eq!(
        client.send(&submission).await,
        SubmissionResult::ServerError {
            status: 599,
            status_text: String::new(),
            body: "edge".to_owned(),
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_send_transport_error() -> anyhow::Result<()> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = client(format!("http://{addr}/webhook"))?;
    let submission = mkfly_webhook::test_submission()?;

    let result = client.send(&submission).await;
    assert!(
        matches!(result, SubmissionResult::TransportError { .. }),
        "{result:?}"
    );

    Ok(())
}

#[tokio::test]
async fn test_send_test_payload() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "nombre": "Test User",
            "empresa": "Test Company",
            "correo": "test@example.com",
            "telefono": "+1234567890",
            "mensaje": "This is a test message",
            "tipo": "test",
            "timestamp": "2025-03-01T12:30:00Z",
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(server.uri())?;
    let submission = mkfly_webhook::test_submission()?;

    let result = client
        .send_test(&submission, datetime!(2025-03-01 12:30:00 UTC))
        .await;
    assert!(result.is_success());

    Ok(())
}

#[test]
fn test_rejects_invalid_url() {
    assert!(matches!(
        client("not a url").unwrap_err().downcast_ref::<WebhookError>(),
        Some(WebhookError::InvalidUrl { .. })
    ));
    assert!(matches!(
        client("ftp://example.com/hook")
            .unwrap_err()
            .downcast_ref::<WebhookError>(),
        Some(WebhookError::InvalidUrl { .. })
    ));
}
