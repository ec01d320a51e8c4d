use super::truncate_body;
use crate::domain::FetchError;
use crate::domain::ports::SnapshotSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::trace;

pub const DRONE_INFO_PATH: &str = "/drone_info";
pub const AGENTS_INFO_PATH: &str = "/agents_info";

// Thin reqwest client that GETs one state document per fetch.
#[derive(Clone)]
pub struct HttpSnapshotSource {
    http: Client,
    pub url: String,
}

impl HttpSnapshotSource {
    pub fn new(base_url: &str, path: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
        })
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let res = self.http.get(&self.url).send().await?;
        let status = res.status();

        // Keep the upstream status and body for the failure log.
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let bytes = res
            .bytes()
            .await
            .map_err(|err| FetchError::Body(err.to_string()))?;
        trace!(url = %self.url, len = bytes.len(), "state document fetched");
        Ok(bytes.to_vec())
    }
}
