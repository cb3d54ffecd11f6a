//! End-to-end sends against a local webhook receiver.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::Value;
use teams_sink::{
    DeliveryError, MessageRequest, SinkError, UrlValidator, WebhookClient, WebhookUrlValidator,
    pipeline,
};

type Received = Arc<Mutex<Vec<Value>>>;

/// The real validator only admits https Teams hosts; the receiver is plain http.
struct AcceptAll;

impl UrlValidator for AcceptAll {
    fn validate(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

async fn accept(State(received): State<Received>, Json(card): Json<Value>) -> &'static str {
    received.lock().unwrap().push(card);
    "1"
}

async fn reject(
    State(received): State<Received>,
    Json(card): Json<Value>,
) -> (StatusCode, &'static str) {
    received.lock().unwrap().push(card);
    (StatusCode::BAD_REQUEST, "Summary or Text is required.")
}

async fn throttled(State(received): State<Received>, Json(card): Json<Value>) -> &'static str {
    received.lock().unwrap().push(card);
    "Webhook message delivery failed with error: Microsoft Teams endpoint returned HTTP error 429"
}

async fn workflow(State(received): State<Received>, Json(card): Json<Value>) -> StatusCode {
    received.lock().unwrap().push(card);
    StatusCode::ACCEPTED
}

async fn spawn_receiver() -> (SocketAddr, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/webhook", post(accept))
        .route("/broken", post(reject))
        .route("/throttled", post(throttled))
        .route("/workflow", post(workflow))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, received)
}

fn client() -> WebhookClient {
    WebhookClient::new().unwrap()
}

#[tokio::test]
async fn inline_body_without_color_or_title() {
    let (addr, received) = spawn_receiver().await;
    let request = MessageRequest {
        body_text: "hello".to_string(),
        webhook_url: format!("http://{addr}/webhook"),
        ..MessageRequest::default()
    };

    let message = pipeline::run(&request, &AcceptAll, &client()).await.unwrap();
    assert_eq!(message.body_text, "hello");
    assert_eq!(message.color_value, "");
    assert_eq!(message.title, "");

    let cards = received.lock().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["@type"], "MessageCard");
    assert_eq!(cards[0]["text"], "hello");
    assert!(cards[0].get("themeColor").is_none());
    assert!(cards[0].get("title").is_none());
}

#[tokio::test]
async fn file_body_with_named_color() {
    let (addr, received) = spawn_receiver().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.md");
    std::fs::write(&path, "report ready").unwrap();

    let request = MessageRequest {
        body_text: "ignored inline text".to_string(),
        body_file_path: path.display().to_string(),
        color_input: "red".to_string(),
        webhook_url: format!("http://{addr}/webhook"),
        ..MessageRequest::default()
    };

    let message = pipeline::run(&request, &AcceptAll, &client()).await.unwrap();
    assert_eq!(message.body_text, "report ready");
    assert_eq!(message.color_value, "#ff0000");

    let cards = received.lock().unwrap();
    assert_eq!(cards[0]["text"], "report ready");
    assert_eq!(cards[0]["themeColor"], "#ff0000");
}

#[tokio::test]
async fn no_body_never_reaches_the_receiver() {
    let (addr, received) = spawn_receiver().await;
    let request = MessageRequest {
        webhook_url: format!("http://{addr}/webhook"),
        ..MessageRequest::default()
    };

    let result = pipeline::run(&request, &AcceptAll, &client()).await;
    assert!(matches!(result, Err(SinkError::MissingBody)));
    assert!(received.lock().unwrap().is_empty());

    let mut stderr = Vec::<u8>::new();
    assert_eq!(pipeline::report(&result, &mut Vec::<u8>::new(), &mut stderr), 1);
    assert!(String::from_utf8_lossy(&stderr).contains("No body provided"));
}

#[tokio::test]
async fn override_url_is_used_and_validated() {
    let (addr, received) = spawn_receiver().await;

    let request = MessageRequest {
        body_text: "hi".to_string(),
        webhook_url_override: format!("http://{addr}/webhook"),
        ..MessageRequest::default()
    };
    let message = pipeline::run(&request, &AcceptAll, &client()).await.unwrap();
    assert_eq!(message.destination_url, format!("http://{addr}/webhook"));
    assert_eq!(received.lock().unwrap().len(), 1);

    let rejected = MessageRequest {
        body_text: "hi".to_string(),
        webhook_url: format!("http://{addr}/webhook"),
        webhook_url_override: "https://not-a-teams-host.example/hook".to_string(),
        ..MessageRequest::default()
    };
    let validator = WebhookUrlValidator::new().unwrap();
    let result = pipeline::run(&rejected, &validator, &client()).await;

    assert!(matches!(result, Err(SinkError::InvalidWebhookUrl { .. })));
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn error_status_is_a_delivery_failure() {
    let (addr, received) = spawn_receiver().await;
    let request = MessageRequest {
        body_text: "hi".to_string(),
        webhook_url: format!("http://{addr}/broken"),
        ..MessageRequest::default()
    };

    let err = pipeline::run(&request, &AcceptAll, &client()).await.unwrap_err();
    assert!(matches!(err, SinkError::Delivery { .. }));
    assert!(err.to_string().contains("Summary or Text is required."));
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_webhook_is_a_delivery_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let request = MessageRequest {
        body_text: "hi".to_string(),
        webhook_url: format!("http://{addr}/webhook"),
        ..MessageRequest::default()
    };

    let result = pipeline::run(&request, &AcceptAll, &client()).await;
    assert!(matches!(result, Err(SinkError::Delivery { .. })));
}

#[tokio::test]
async fn success_status_with_error_body_is_a_delivery_failure() {
    let (addr, received) = spawn_receiver().await;
    let request = MessageRequest {
        body_text: "hi".to_string(),
        webhook_url: format!("http://{addr}/throttled"),
        ..MessageRequest::default()
    };

    let err = pipeline::run(&request, &AcceptAll, &client()).await.unwrap_err();
    assert!(matches!(
        err,
        SinkError::Delivery {
            source: DeliveryError::UnexpectedResponse { .. }
        }
    ));
    assert!(err.to_string().contains("HTTP error 429"));
    assert_eq!(pipeline::report(&Err(err), &mut Vec::<u8>::new(), &mut Vec::<u8>::new()), 1);
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn accepted_without_body_counts_as_delivered() {
    let (addr, received) = spawn_receiver().await;
    let request = MessageRequest {
        body_text: "hi".to_string(),
        webhook_url: format!("http://{addr}/workflow"),
        ..MessageRequest::default()
    };

    let result = pipeline::run(&request, &AcceptAll, &client()).await;
    assert!(result.is_ok());
    assert_eq!(received.lock().unwrap().len(), 1);
}
