use super::truncate_body;
use crate::domain::UploadError;
use crate::domain::ports::{FrameUpload, FrameUploader};
use crate::interface_adapters::protocol::VisionRequest;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const VISION_PATH: &str = "/vision";

// Thin reqwest client posting captured frames to the vision endpoint.
#[derive(Clone)]
pub struct VisionClient {
    http: Client,
    pub url: String,
}

impl VisionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: format!("{}{}", base_url.trim_end_matches('/'), VISION_PATH),
        })
    }
}

#[async_trait]
impl FrameUploader for VisionClient {
    async fn upload(&self, frame: &FrameUpload) -> Result<(), UploadError> {
        let res = self
            .http
            .post(&self.url)
            .json(&VisionRequest::from(frame))
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(UploadError::Upstream {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        debug!(url = %self.url, response = %body, "vision response");
        Ok(())
    }
}
