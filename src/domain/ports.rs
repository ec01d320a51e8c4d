use async_trait::async_trait;

use crate::domain::errors::{CaptureError, FetchError, UploadError};
use crate::domain::state::{ActorId, ActorKind, Vec3};

// Port for fetching one raw state document from the simulation service.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;
}

// Port for the scene that renders actors. Calls are synchronous and happen inside a tick.
// `set_position` carries the authoritative remote position (the drone's target).
pub trait ActorSink: Send + Sync {
    fn set_position(&self, actor: ActorId, position: Vec3);
    fn set_locked(&self, camera: usize, locked: bool);
    fn spawn(&self, kind: ActorKind, position: Vec3);
}

// Port for per-frame transform writes made by the movement step.
pub trait TransformSink: Send + Sync {
    fn move_actor(&self, actor: ActorId, position: Vec3);
    fn rotate_camera(&self, camera: usize, yaw_degrees: f32);
}

// Port for grabbing an encoded (JPEG) frame from a camera.
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn capture(&self) -> Result<Vec<u8>, CaptureError>;
}

/// Payload delivered for each captured frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpload {
    pub camera_id: String,
    /// Base64 (standard alphabet) of the JPEG bytes.
    pub image: String,
}

// Port for delivering frames to the vision endpoint.
#[async_trait]
pub trait FrameUploader: Send + Sync {
    async fn upload(&self, frame: &FrameUpload) -> Result<(), UploadError>;
}
