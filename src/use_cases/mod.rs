// Use cases layer: synchronization, per-frame stepping and frame streaming workflows.

pub mod decode;
pub mod frame;
pub mod scene;
pub mod shutdown;
pub mod stream;
pub mod sync;
#[cfg(test)]
pub(crate) mod test_support;

pub use decode::decode;
pub use frame::{FrameStepper, SceneTransforms};
pub use scene::spawn_initial_actors;
pub use stream::{FrameStreamer, StreamStats};
pub use sync::{RemoteStateSynchronizer, SyncStats, TickOutcome, apply};
