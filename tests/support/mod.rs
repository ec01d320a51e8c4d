// Shared stub of the simulation service, booted once per integration test binary.
#![allow(dead_code)]

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde_json::{Value, json};
use std::{
    // `Arc` shares the published URL slot with the stub thread; `OnceLock` writes it once.
    sync::{Arc, OnceLock},
    // Sleep durations are used in readiness polling loops.
    time::Duration,
};

// Base URL of the stub, published once its listener is bound.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// One-time guard so the stub boots once per test binary.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Position served by `/drone_info`; tests assert the drone target lands here.
pub const DRONE_POSITION: [f32; 3] = [12.5, 40.0, -7.0];

// Ensure the stub service is running and return its base URL.
pub fn ensure_stub_service() -> &'static str {
    // Boot exactly once even when several tests race to call this.
    SERVER_READY.get_or_init(|| {
        // Slot the stub thread fills with its bound URL.
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Own OS thread and runtime so the stub outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("stub runtime");
            runtime.block_on(async move {
                // Ephemeral port so a real simulation service on 8585 is never hit.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral stub port");
                let addr = listener.local_addr().expect("get local addr");
                // Publish the address before serving so callers can start polling.
                let _ = published_url_thread.set(format!("http://{}", addr));
                // Serve until the test process exits.
                axum::serve(listener, stub_app()).await.expect("stub failed");
            });
        });
        // Block until the URL is known and the port accepts connections.
        wait_for_url_and_readiness(published_url);
    });

    // Shared URL for every test in this binary.
    SERVER_URL
        .get()
        .expect("stub url should be initialized")
        .as_str()
}

// An address nothing listens on, for transport failures.
pub fn unreachable_url() -> String {
    // Bind then drop so the port is free and refuses connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}", addr)
}

fn stub_app() -> Router {
    Router::new()
        .route("/drone_info", get(drone_info))
        .route("/agents_info", get(agents_info))
        .route("/vision", post(vision))
        .route("/broken", get(broken))
        .route("/garbled", get(garbled))
}

async fn drone_info() -> Json<Value> {
    Json(json!({
        "current_position": DRONE_POSITION,
        "detection": "NO",
        "panoramic": false,
        "time_counter": 3,
        "drone_override": false
    }))
}

async fn agents_info() -> Json<Value> {
    Json(json!({
        "channel": {"subject": [""], "content": ""},
        "guard": {"drone_override": false, "callTheCops": true, "personal_time": 3},
        "cameras": [
            {"id": 0, "locked": true, "alert_checks": 1, "detection": "YES"},
            {"id": 1, "locked": false, "alert_checks": 0, "detection": null}
        ],
        "drone": {"position": [0, 40, 0], "panoramic": false}
    }))
}

// Mirrors the simulation's check: a missing or non-base64 image is a 400.
async fn vision(Json(payload): Json<Value>) -> (StatusCode, Json<Value>) {
    let Some(image) = payload
        .get("image")
        .and_then(Value::as_str)
        .filter(|i| !i.is_empty())
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing 'image' in request body"})),
        );
    };
    if BASE64_STANDARD.decode(image).is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "image is not base64"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"message": "Vision processing successful", "result": "NO"})),
    )
}

// Upstream failure with a body the client should surface.
async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "simulation offline")
}

// 200 with a body that is not JSON.
async fn garbled() -> &'static str {
    "<html>not json</html>"
}

// Wait for URL publication, then for the stub socket to accept TCP connections.
fn wait_for_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    // Poll until the stub thread publishes its URL.
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        // Avoid a tight loop while the stub thread starts.
        std::thread::sleep(Duration::from_millis(10));
    };

    // Persist globally so every test gets the same endpoint.
    let _ = SERVER_URL.set(base_url.clone());

    // Raw TCP readiness checks need host:port without the scheme.
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry briefly to avoid racing the bind/accept.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    // Fail fast if the stub never started accepting.
    panic!("stub service did not become ready in time");
}
