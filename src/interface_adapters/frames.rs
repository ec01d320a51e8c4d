// Frame source backed by a JPEG on disk, for running without a renderer.

use crate::domain::CaptureError;
use crate::domain::ports::FrameSource;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileFrameSource {
    path: PathBuf,
}

impl FileFrameSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FrameSource for FileFrameSource {
    // Re-read every capture so an external renderer can overwrite the file.
    async fn capture(&self) -> Result<Vec<u8>, CaptureError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CaptureError::Io {
                path: self.path.clone(),
                source,
            })?;
        if bytes.is_empty() {
            return Err(CaptureError::Empty);
        }
        Ok(bytes)
    }
}
