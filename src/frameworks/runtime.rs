// Framework bootstrap for the scene client runtime.

use crate::domain::ActorSet;
use crate::domain::tuning::{CameraSweepTuning, DRONE_SPAWN, DroneTuning};
use crate::frameworks::config::RuntimeSettings;
use crate::interface_adapters::clients::state::{AGENTS_INFO_PATH, DRONE_INFO_PATH};
use crate::interface_adapters::clients::{HttpSnapshotSource, VisionClient};
use crate::interface_adapters::frames::FileFrameSource;
use crate::interface_adapters::scene::HeadlessScene;
use crate::use_cases::shutdown;
use crate::use_cases::{FrameStepper, FrameStreamer, RemoteStateSynchronizer, spawn_initial_actors};

use std::io::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinSet;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs the synchronizers, the frame stepper and (if a frame path is set) the frame
/// streamer until `shutdown` holds `true`. A request made before the call is honored.
pub async fn run(settings: RuntimeSettings, shutdown: watch::Receiver<bool>) -> Result<()> {
    let base_url = settings.state_service_url.as_str();
    let drone_source = HttpSnapshotSource::new(base_url, DRONE_INFO_PATH, settings.fetch_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize drone client: {e}")))?;
    let agents_source = HttpSnapshotSource::new(base_url, AGENTS_INFO_PATH, settings.fetch_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize agents client: {e}")))?;
    tracing::debug!(
        state_service_url = %base_url,
        fetch_timeout_ms = settings.fetch_timeout.as_millis(),
        "state clients configured"
    );

    // Cameras are pre-placed; the drone and guard are instantiated once.
    let initial_yaws = vec![0.0_f32; settings.tracked_cameras];
    let scene = Arc::new(HeadlessScene::with_cameras(&initial_yaws));
    spawn_initial_actors(scene.as_ref());

    // Each synchronizer owns its own actor set.
    let mut drone_actors = ActorSet::new(0);
    drone_actors.drone.target_position = DRONE_SPAWN;
    let drone_sync =
        RemoteStateSynchronizer::new("drone", drone_source, scene.clone(), drone_actors);
    let agents_sync = RemoteStateSynchronizer::new(
        "agents",
        agents_source,
        scene.clone(),
        ActorSet::new(settings.tracked_cameras),
    );

    let stepper = FrameStepper::new(
        drone_sync.subscribe(),
        agents_sync.subscribe(),
        DRONE_SPAWN,
        initial_yaws,
        DroneTuning {
            speed: settings.drone_speed,
        },
        CameraSweepTuning::default(),
    );

    let mut tasks = JoinSet::new();

    let drone_shutdown = shutdown.clone();
    let drone_interval = settings.drone_poll_interval;
    tasks.spawn(async move {
        let stats = drone_sync.run(drone_interval, drone_shutdown).await;
        tracing::info!(?stats, "drone synchronizer finished");
    });

    let agents_shutdown = shutdown.clone();
    let agents_interval = settings.agents_poll_interval;
    tasks.spawn(async move {
        let stats = agents_sync.run(agents_interval, agents_shutdown).await;
        tracing::info!(?stats, "agents synchronizer finished");
    });

    tasks.spawn(stepper.run(settings.frame_interval, scene.clone(), shutdown.clone()));

    match settings.camera_frame_path {
        Some(path) => {
            let vision = VisionClient::new(base_url, settings.fetch_timeout).map_err(|e| {
                std::io::Error::other(format!("failed to initialize vision client: {e}"))
            })?;
            tracing::debug!(
                path = %path.display(),
                url = %vision.url,
                "frame streaming configured"
            );
            let streamer = FrameStreamer::new(
                settings.camera_id.clone(),
                FileFrameSource::new(path),
                vision,
            );
            let streamer_shutdown = shutdown.clone();
            let streamer_interval = settings.camera_stream_interval;
            tasks.spawn(async move {
                let stats = streamer.run(streamer_interval, streamer_shutdown).await;
                tracing::info!(?stats, "frame streamer finished");
            });
        }
        None => {
            tracing::error!("no camera frame source configured; frame streaming disabled");
        }
    }

    tracing::info!(state_service_url = %base_url, "scene client running");

    // Report task failures rather than propagating panics.
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            tracing::error!(error = %e, "scene task failed");
        }
    }
    Ok(())
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = RuntimeSettings::from_env();
    let (shutdown_tx, shutdown_rx) = shutdown::channel();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            return;
        }
        tracing::info!("shutdown requested");
        shutdown_tx.send_replace(true);

        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("second interrupt, exiting immediately");
            std::process::exit(130);
        }
    });

    run(settings, shutdown_rx).await.inspect_err(|e| {
        tracing::error!(error = %e, "scene client failed");
    })
}
