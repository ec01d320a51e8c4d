use std::{env, path::PathBuf, str::FromStr, time::Duration};

// Runtime constants and env-driven settings (not scene tuning).

pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 60);

pub fn state_service_url() -> String {
    env::var("STATE_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8585".to_string())
}

pub fn drone_poll_interval() -> Duration {
    millis_or("DRONE_POLL_INTERVAL_MS", 1000)
}

pub fn agents_poll_interval() -> Duration {
    millis_or("AGENTS_POLL_INTERVAL_MS", 1000)
}

pub fn fetch_timeout() -> Duration {
    millis_or("FETCH_TIMEOUT_MS", 1500)
}

pub fn tracked_cameras() -> usize {
    parse_or(env::var("TRACKED_CAMERAS").ok(), 4)
}

pub fn drone_speed() -> f32 {
    parse_or(env::var("DRONE_SPEED").ok(), 5.0)
}

pub fn camera_id() -> String {
    env::var("CAMERA_ID").unwrap_or_else(|_| "default_id".to_string())
}

pub fn camera_stream_interval() -> Duration {
    millis_or("CAMERA_STREAM_INTERVAL_MS", 5000)
}

// Unset disables frame streaming.
pub fn camera_frame_path() -> Option<PathBuf> {
    env::var_os("CAMERA_FRAME_PATH")
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

fn millis_or(key: &str, default: u64) -> Duration {
    Duration::from_millis(parse_or(env::var(key).ok(), default))
}

// Missing or unparseable values fall back to the default.
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Settings for one client run, resolved once at startup.
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    pub state_service_url: String,
    pub drone_poll_interval: Duration,
    pub agents_poll_interval: Duration,
    pub fetch_timeout: Duration,
    pub tracked_cameras: usize,
    pub drone_speed: f32,
    pub camera_id: String,
    pub camera_stream_interval: Duration,
    pub camera_frame_path: Option<PathBuf>,
    pub frame_interval: Duration,
}

impl RuntimeSettings {
    pub fn from_env() -> Self {
        Self {
            state_service_url: state_service_url(),
            drone_poll_interval: drone_poll_interval(),
            agents_poll_interval: agents_poll_interval(),
            fetch_timeout: fetch_timeout(),
            tracked_cameras: tracked_cameras(),
            drone_speed: drone_speed(),
            camera_id: camera_id(),
            camera_stream_interval: camera_stream_interval(),
            camera_frame_path: camera_frame_path(),
            frame_interval: FRAME_INTERVAL,
        }
    }
}
