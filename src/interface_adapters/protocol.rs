// Wire DTOs for requests sent to the simulation service.
// State documents are decoded field by field in `use_cases::decode`, not through DTOs.

use crate::domain::ports::FrameUpload;
use serde::Serialize;

/// Body of `POST /vision`.
#[derive(Debug, Serialize)]
pub struct VisionRequest<'a> {
    pub id: &'a str,
    /// Base64-encoded JPEG.
    pub image: &'a str,
}

impl<'a> From<&'a FrameUpload> for VisionRequest<'a> {
    fn from(frame: &'a FrameUpload) -> Self {
        Self {
            id: &frame.camera_id,
            image: &frame.image,
        }
    }
}
