//! Adapter behavior against a fake InfluxDB listening on loopback.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::time::{Duration, UNIX_EPOCH};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};
use tokio::sync::mpsc;

use monit_core::{DataPoint, MonitError, Sink, Tags};
use monit_influx::{recorder_from_url, InfluxSink};

#[derive(Debug)]
struct Captured {
    query: HashMap<String, String>,
    auth: Option<String>,
    body: String,
}

#[derive(Clone)]
struct Fake {
    tx: mpsc::UnboundedSender<Captured>,
    status: StatusCode,
    reply: &'static str,
}

async fn write(
    State(fake): State<Fake>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let _ = fake.tx.send(Captured { query, auth, body });
    (fake.status, fake.reply)
}

async fn spawn_fake(
    status: StatusCode,
    reply: &'static str,
) -> (String, mpsc::UnboundedReceiver<Captured>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = Router::new()
        .route("/ping", get(|| async { StatusCode::NO_CONTENT }))
        .route("/write", post(write))
        .with_state(Fake { tx, status, reply });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://user:pass@{addr}"), rx)
}

/// Loopback address with nothing listening on it.
async fn dead_addr() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn request_point() -> DataPoint {
    let mut tags = Tags::new();
    tags.insert("path".into(), "/users/:id".into());
    tags.insert("request_method".into(), "GET".into());
    tags.insert("response_code".into(), "200".into());
    DataPoint::new(
        "request",
        2.0,
        tags,
        UNIX_EPOCH + Duration::from_millis(1_700_000_000_000),
    )
}

#[tokio::test]
async fn submit_posts_single_line_to_database() {
    let (base, mut rx) = spawn_fake(StatusCode::NO_CONTENT, "").await;
    let sink = InfluxSink::connect(&format!("{base}/mydb")).await.unwrap();
    assert_eq!(sink.config().database(), "mydb");
    assert_eq!(sink.config().username(), Some("user"));

    sink.submit(&request_point()).await.unwrap();

    let got = rx.recv().await.unwrap();
    assert_eq!(got.query.get("db").map(String::as_str), Some("mydb"));
    assert_eq!(got.query.get("precision").map(String::as_str), Some("ns"));
    assert_eq!(got.auth.as_deref(), Some("Basic dXNlcjpwYXNz"));
    assert_eq!(
        got.body,
        "request,path=/users/:id,request_method=GET,response_code=200 value=2 1700000000000000000"
    );
}

#[tokio::test]
async fn rejected_write_surfaces_backend_message() {
    let (base, _rx) = spawn_fake(
        StatusCode::NOT_FOUND,
        r#"{"error":"database not found: \"nope\""}"#,
    )
    .await;
    let sink = InfluxSink::connect(&format!("{base}/nope")).await.unwrap();

    match sink.submit(&request_point()).await {
        Err(MonitError::Rejected { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "database not found: \"nope\"");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn sink_write_swallows_backend_errors() {
    let (base, mut rx) = spawn_fake(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let sink = InfluxSink::connect(&format!("{base}/mydb")).await.unwrap();

    assert!(sink.write(request_point()).await.is_ok());
    assert!(sink.write(request_point()).await.is_ok());
    assert!(rx.recv().await.is_some());
    assert!(rx.recv().await.is_some());
}

#[tokio::test]
async fn unreachable_backend_still_yields_sink() {
    let base = dead_addr().await;
    let sink = InfluxSink::connect(&format!("{base}/mydb")).await.unwrap();

    assert!(sink.ping().await.is_err());
    assert_eq!(
        sink.submit(&request_point()).await.unwrap_err().kind(),
        "transport"
    );
    assert!(sink.write(request_point()).await.is_ok());
}

#[tokio::test]
async fn recorder_disabled_for_missing_or_bad_url() {
    for raw in [None, Some(""), Some("  "), Some("nonsense"), Some("/mydb")] {
        let rec = recorder_from_url(raw).await;
        assert!(!rec.is_enabled(), "{raw:?}");
        rec.record_simple("jobs", 1.0);
    }
}

#[tokio::test]
async fn recorder_enabled_for_valid_url_and_delivers() {
    let (base, mut rx) = spawn_fake(StatusCode::NO_CONTENT, "").await;
    let rec = recorder_from_url(Some(&format!("{base}/mydb"))).await;
    assert!(rec.is_enabled());

    rec.record_simple("signups", 3_i64);

    let got = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(got.body.starts_with("signups value=3i "), "{}", got.body);
}
