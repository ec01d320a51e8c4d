// Periodic capture-and-upload of camera frames to the vision endpoint.

use super::shutdown;
use crate::domain::UploadError;
use crate::domain::ports::{FrameSource, FrameUpload, FrameUploader};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub captured: u64,
    pub uploaded: u64,
    pub capture_failures: u64,
    pub upload_failures: u64,
}

pub struct FrameStreamer<F, U> {
    camera_id: String,
    source: F,
    uploader: U,
    stats: StreamStats,
}

impl<F, U> FrameStreamer<F, U>
where
    F: FrameSource,
    U: FrameUploader,
{
    pub fn new(camera_id: impl Into<String>, source: F, uploader: U) -> Self {
        Self {
            camera_id: camera_id.into(),
            source,
            uploader,
            stats: StreamStats::default(),
        }
    }

    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    /// Captures one frame and delivers it. Returns true when the upload was accepted.
    pub async fn send_frame(&mut self) -> bool {
        let jpeg = match self.source.capture().await {
            Ok(jpeg) => jpeg,
            Err(err) => {
                self.stats.capture_failures += 1;
                error!(camera_id = %self.camera_id, error = %err, "frame capture failed");
                return false;
            }
        };
        self.stats.captured += 1;

        let frame = FrameUpload {
            camera_id: self.camera_id.clone(),
            image: BASE64_STANDARD.encode(&jpeg),
        };
        debug!(
            camera_id = %self.camera_id,
            jpeg_bytes = jpeg.len(),
            base64_len = frame.image.len(),
            "frame encoded"
        );

        match self.uploader.upload(&frame).await {
            Ok(()) => {
                self.stats.uploaded += 1;
                debug!(camera_id = %self.camera_id, "frame accepted");
                true
            }
            Err(UploadError::Upstream { status, body }) => {
                self.stats.upload_failures += 1;
                error!(
                    camera_id = %self.camera_id,
                    image_len = frame.image.len(),
                    status,
                    body = %body,
                    "frame upload rejected"
                );
                false
            }
            Err(err) => {
                self.stats.upload_failures += 1;
                error!(
                    camera_id = %self.camera_id,
                    image_len = frame.image.len(),
                    error = %err,
                    "frame upload failed"
                );
                false
            }
        }
    }

    /// Waits `interval`, sends a frame, and repeats until shutdown is requested.
    pub async fn run(
        mut self,
        interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> StreamStats {
        info!(
            camera_id = %self.camera_id,
            interval_ms = interval.as_millis(),
            "frame streamer started"
        );
        loop {
            tokio::select! {
                _ = shutdown::requested(&mut shutdown) => break,
                _ = tokio::time::sleep(interval) => {}
            }
            self.send_frame().await;
        }
        self.stats
    }
}
