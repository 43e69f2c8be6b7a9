//! Submission flow tests against a mock form relay.

mod common;

use broadsheet::config::FormConfig;
use broadsheet::submit::{
    ContactPayload, FormSubmitter, REJECTED_MESSAGE, SUCCESS_MESSAGE, UNREACHABLE_MESSAGE,
};
use common::mock_relay::MockRelay;

fn payload() -> ContactPayload {
    ContactPayload {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello from the terminal".to_string(),
    }
}

fn form_config(endpoint_url: String) -> FormConfig {
    FormConfig {
        endpoint_url,
        connect_timeout_seconds: 1,
    }
}

#[tokio::test]
async fn accepted_submission_yields_success_result() {
    let relay = MockRelay::start().await;
    relay.enqueue_status(200).await;

    let submitter = FormSubmitter::new(&form_config(relay.endpoint_url())).unwrap();
    let result = submitter.submit(&payload()).await;

    assert!(result.success);
    assert_eq!(result.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn request_is_json_post_with_all_fields() {
    let relay = MockRelay::start().await;
    relay.enqueue_status(200).await;

    let submitter = FormSubmitter::new(&form_config(relay.endpoint_url())).unwrap();
    submitter.submit(&payload()).await;

    let requests = relay.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.header("content-type"), Some("application/json"));

    let body = req.json_body();
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["message"], "Hello from the terminal");
}

#[tokio::test]
async fn created_status_counts_as_success() {
    let relay = MockRelay::start().await;
    relay.enqueue_status(201).await;

    let submitter = FormSubmitter::new(&form_config(relay.endpoint_url())).unwrap();
    let result = submitter.submit(&payload()).await;

    assert!(result.success);
}

#[tokio::test]
async fn rejected_submission_yields_failure_result() {
    let relay = MockRelay::start().await;
    relay.enqueue_status(422).await;

    let submitter = FormSubmitter::new(&form_config(relay.endpoint_url())).unwrap();
    let result = submitter.submit(&payload()).await;

    assert!(!result.success);
    assert_eq!(result.message, REJECTED_MESSAGE);
}

#[tokio::test]
async fn server_error_yields_failure_result() {
    let relay = MockRelay::start().await;
    relay.enqueue_status(500).await;

    let submitter = FormSubmitter::new(&form_config(relay.endpoint_url())).unwrap();
    let result = submitter.submit(&payload()).await;

    assert!(!result.success);
    assert_eq!(result.message, REJECTED_MESSAGE);
}

#[tokio::test]
async fn unreachable_endpoint_yields_transport_result() {
    // Bind a port to find a free one, then drop it so nothing listens.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let submitter =
        FormSubmitter::new(&form_config(format!("http://{}/f/test-form", addr))).unwrap();
    let result = submitter.submit(&payload()).await;

    assert!(!result.success);
    assert_eq!(result.message, UNREACHABLE_MESSAGE);
}
