mod support;

use drone_sync::frameworks::config::{FRAME_INTERVAL, RuntimeSettings};
use drone_sync::use_cases::shutdown;
use std::time::Duration;

fn settings(base_url: &str) -> RuntimeSettings {
    RuntimeSettings {
        state_service_url: base_url.to_string(),
        drone_poll_interval: Duration::from_millis(50),
        agents_poll_interval: Duration::from_millis(50),
        fetch_timeout: Duration::from_millis(500),
        tracked_cameras: 2,
        drone_speed: 5.0,
        camera_id: "runtime-test".to_string(),
        camera_stream_interval: Duration::from_millis(100),
        camera_frame_path: None,
        frame_interval: FRAME_INTERVAL,
    }
}

#[tokio::test]
async fn runtime_runs_until_shutdown() {
    let base_url = support::ensure_stub_service();
    let (shutdown_tx, shutdown_rx) = shutdown::channel();

    let runtime = drone_sync::run(settings(base_url), shutdown_rx);
    let stop = async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        shutdown_tx.send_replace(true);
    };
    let (result, ()) = tokio::time::timeout(Duration::from_secs(5), async {
        tokio::join!(runtime, stop)
    })
    .await
    .expect("runtime should stop after shutdown");

    assert!(result.is_ok());
}

#[tokio::test]
async fn runtime_honors_shutdown_requested_before_start() {
    let base_url = support::ensure_stub_service();
    let (shutdown_tx, shutdown_rx) = shutdown::channel();
    shutdown_tx.send_replace(true);

    let result = tokio::time::timeout(
        Duration::from_secs(2),
        drone_sync::run(settings(base_url), shutdown_rx),
    )
    .await
    .expect("runtime should stop when shutdown was requested before start");

    assert!(result.is_ok());
}
