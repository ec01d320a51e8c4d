// Domain-level errors surfaced by the external collaborators.

use std::fmt;
use std::path::PathBuf;

/// Failure to fetch a state document. Always recovered by waiting for the next tick.
#[derive(Debug)]
pub enum FetchError {
    Transport(String),
    Timeout,
    Upstream { status: u16, body: String },
    Body(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(err) => write!(f, "state transport error: {err}"),
            FetchError::Timeout => write!(f, "state request timed out"),
            FetchError::Upstream { status, body } => {
                if body.is_empty() {
                    write!(f, "state upstream error {status}")
                } else {
                    write!(f, "state upstream error {status}: {body}")
                }
            }
            FetchError::Body(err) => write!(f, "state response body error: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Failure to deliver a captured frame.
#[derive(Debug)]
pub enum UploadError {
    Transport(String),
    Timeout,
    Upstream { status: u16, body: String },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Transport(err) => write!(f, "upload transport error: {err}"),
            UploadError::Timeout => write!(f, "upload timed out"),
            UploadError::Upstream { status, body } => {
                write!(f, "upload rejected with {status}: {body}")
            }
        }
    }
}

impl std::error::Error for UploadError {}

/// Failure to capture a frame from the camera source.
#[derive(Debug)]
pub enum CaptureError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Empty,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Io { path, source } => {
                write!(f, "frame capture from {} failed: {source}", path.display())
            }
            CaptureError::Empty => write!(f, "captured frame is empty"),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Io { source, .. } => Some(source),
            CaptureError::Empty => None,
        }
    }
}
