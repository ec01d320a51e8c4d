// The clients defined here are reqwest clients for the simulation service.

pub mod state;
pub mod vision;

pub use state::HttpSnapshotSource;
pub use vision::VisionClient;

use crate::domain::{FetchError, UploadError};

// Upstream bodies are logged verbatim; keep them bounded.
const MAX_LOGGED_BODY: usize = 2048;

pub(crate) fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_LOGGED_BODY {
        let mut cut = MAX_LOGGED_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    body
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UploadError::Timeout
        } else {
            UploadError::Transport(err.to_string())
        }
    }
}
