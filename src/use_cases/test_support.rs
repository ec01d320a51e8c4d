use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::subscriber::DefaultGuard;

use crate::domain::ports::{
    ActorSink, FrameSource, FrameUpload, FrameUploader, SnapshotSource, TransformSink,
};
use crate::domain::{ActorId, ActorKind, CaptureError, FetchError, UploadError, Vec3};

// Calls observed by the recording sink, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SinkCall {
    SetPosition(ActorId, Vec3),
    SetLocked(usize, bool),
    Spawn(ActorKind, Vec3),
    Move(ActorId, Vec3),
    Rotate(usize, f32),
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    calls: Mutex<Vec<SinkCall>>,
}

impl RecordingSink {
    pub(crate) fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().expect("sink mutex poisoned").clone()
    }

    pub(crate) fn spawns_of(&self, kind: ActorKind) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, SinkCall::Spawn(spawned, _) if *spawned == kind))
            .count()
    }

    fn record(&self, call: SinkCall) {
        self.calls.lock().expect("sink mutex poisoned").push(call);
    }
}

impl ActorSink for RecordingSink {
    fn set_position(&self, actor: ActorId, position: Vec3) {
        self.record(SinkCall::SetPosition(actor, position));
    }

    fn set_locked(&self, camera: usize, locked: bool) {
        self.record(SinkCall::SetLocked(camera, locked));
    }

    fn spawn(&self, kind: ActorKind, position: Vec3) {
        self.record(SinkCall::Spawn(kind, position));
    }
}

impl TransformSink for RecordingSink {
    fn move_actor(&self, actor: ActorId, position: Vec3) {
        self.record(SinkCall::Move(actor, position));
    }

    fn rotate_camera(&self, camera: usize, yaw_degrees: f32) {
        self.record(SinkCall::Rotate(camera, yaw_degrees));
    }
}

// Replays a fixed list of fetch results; fails once the script runs out.
pub(crate) struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Vec<u8>, FetchError>>>,
}

impl ScriptedSource {
    pub(crate) fn new(responses: Vec<Result<Vec<u8>, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }

    pub(crate) fn documents(documents: &[&str]) -> Self {
        Self::new(
            documents
                .iter()
                .map(|document| Ok(document.as_bytes().to_vec()))
                .collect(),
        )
    }

    pub(crate) fn failing(times: usize) -> Self {
        Self::new(
            (0..times)
                .map(|_| Err(FetchError::Transport("connection refused".to_string())))
                .collect(),
        )
    }
}

#[async_trait]
impl SnapshotSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let mut guard = self.responses.lock().expect("script mutex poisoned");
        guard
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("script exhausted".to_string())))
    }
}

pub(crate) struct StaticFrameSource(pub(crate) Vec<u8>);

#[async_trait]
impl FrameSource for StaticFrameSource {
    async fn capture(&self) -> Result<Vec<u8>, CaptureError> {
        if self.0.is_empty() {
            return Err(CaptureError::Empty);
        }
        Ok(self.0.clone())
    }
}

#[derive(Default)]
pub(crate) struct RecordingUploader {
    uploads: Mutex<Vec<FrameUpload>>,
    reject_with: Option<u16>,
}

impl RecordingUploader {
    pub(crate) fn rejecting(status: u16) -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            reject_with: Some(status),
        }
    }

    pub(crate) fn uploads(&self) -> Vec<FrameUpload> {
        self.uploads.lock().expect("uploads mutex poisoned").clone()
    }
}

#[async_trait]
impl FrameUploader for RecordingUploader {
    async fn upload(&self, frame: &FrameUpload) -> Result<(), UploadError> {
        self.uploads
            .lock()
            .expect("uploads mutex poisoned")
            .push(frame.clone());
        match self.reject_with {
            Some(status) => Err(UploadError::Upstream {
                status,
                body: "vision unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

// Buffers formatted log lines so tests can assert on what was emitted.
#[derive(Clone, Default)]
pub(crate) struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    // Routes this thread's events at INFO and above into the buffer until the guard drops.
    pub(crate) fn install(&self) -> DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn count(&self, needle: &str) -> usize {
        let buffer = self.buffer.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer)
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
