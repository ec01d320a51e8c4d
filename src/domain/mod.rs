// Domain layer: actor state, decoded snapshots and per-frame rules.

pub mod errors;
pub mod ports;
pub mod snapshot;
pub mod state;
pub mod systems;
pub mod tuning;

pub use errors::{CaptureError, FetchError, UploadError};
pub use snapshot::{DecodeError, RemoteSnapshot};
pub use state::{ActorId, ActorKind, ActorSet, CameraState, DroneState, PoliceDispatch, Vec3};
