// Poll-fetch-apply loop reconciling local actors against a remote state endpoint.

use super::decode::decode;
use super::shutdown;
use crate::domain::ports::{ActorSink, SnapshotSource};
use crate::domain::tuning::POLICE_CAR_SPAWN;
use crate::domain::{ActorId, ActorKind, ActorSet, RemoteSnapshot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Result of a single fetch-decode-apply iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The document decoded; `rejected_fields` fields were skipped.
    Applied { rejected_fields: usize },
    FetchFailed,
    DecodeFailed,
}

/// Running counters for one synchronizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub ticks: u64,
    pub applied: u64,
    pub fetch_failures: u64,
    pub decode_failures: u64,
    pub rejected_fields: u64,
}

/// Owns one actor set and keeps it in step with a remote snapshot source.
pub struct RemoteStateSynchronizer<S> {
    name: &'static str,
    source: S,
    sink: Arc<dyn ActorSink>,
    actors: ActorSet,
    // Single-writer publication of the actor set for the per-frame step.
    state_tx: watch::Sender<ActorSet>,
    stats: SyncStats,
}

impl<S> RemoteStateSynchronizer<S>
where
    S: SnapshotSource,
{
    pub fn new(
        name: &'static str,
        source: S,
        sink: Arc<dyn ActorSink>,
        actors: ActorSet,
    ) -> Self {
        let (state_tx, _state_rx) = watch::channel(actors.clone());
        Self {
            name,
            source,
            sink,
            actors,
            state_tx,
            stats: SyncStats::default(),
        }
    }

    /// Read-only view of the actor set, updated after every tick.
    pub fn subscribe(&self) -> watch::Receiver<ActorSet> {
        self.state_tx.subscribe()
    }

    pub fn actors(&self) -> &ActorSet {
        &self.actors
    }

    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    /// Runs one fetch-decode-apply iteration. Errors are logged, never returned.
    pub async fn tick(&mut self) -> TickOutcome {
        self.stats.ticks += 1;

        let bytes = match self.source.fetch().await {
            Ok(bytes) => bytes,
            Err(err) => {
                self.stats.fetch_failures += 1;
                warn!(sync = self.name, error = %err, "state fetch failed");
                return TickOutcome::FetchFailed;
            }
        };

        let snapshot = match decode(&bytes) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.stats.decode_failures += 1;
                error!(sync = self.name, error = %err, "state snapshot rejected");
                return TickOutcome::DecodeFailed;
            }
        };

        for rejected in &snapshot.rejected {
            warn!(sync = self.name, error = %rejected, "snapshot field skipped");
        }
        let rejected_fields = snapshot.rejected.len();
        self.stats.rejected_fields += rejected_fields as u64;

        apply(&snapshot, &mut self.actors, self.sink.as_ref());
        self.stats.applied += 1;

        let actors = &self.actors;
        self.state_tx.send_if_modified(|published| {
            if published == actors {
                return false;
            }
            *published = actors.clone();
            true
        });

        TickOutcome::Applied { rejected_fields }
    }

    /// Waits `interval`, ticks, and repeats until shutdown is requested.
    pub async fn run(
        mut self,
        interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> SyncStats {
        info!(
            sync = self.name,
            interval_ms = interval.as_millis(),
            "synchronizer started"
        );
        loop {
            tokio::select! {
                _ = shutdown::requested(&mut shutdown) => break,
                _ = tokio::time::sleep(interval) => {}
            }
            self.tick().await;
        }

        info!(sync = self.name, ticks = self.stats.ticks, "synchronizer stopped");
        self.stats
    }
}

/// Overwrites every actor attribute that is present in `snapshot` and mirrors the change
/// into `sink`. Absent fields leave state untouched.
pub fn apply(snapshot: &RemoteSnapshot, actors: &mut ActorSet, sink: &dyn ActorSink) {
    if let Some(position) = snapshot.position {
        actors.drone.target_position = position;
        sink.set_position(ActorId::Drone, position);
        debug!(%position, "drone target updated");
    }

    if let Some(panoramic) = snapshot.panoramic_mode {
        actors.drone.panoramic = panoramic;
        debug!(panoramic, "panoramic mode");
    }

    if let Some(override_mode) = snapshot.override_mode {
        actors.drone.override_mode = override_mode;
        debug!(override_mode, "drone override mode");
    }

    if let Some(locks) = &snapshot.camera_locks {
        // zip stops at the shorter side; excess on either side is ignored.
        for (index, (camera, lock)) in actors.cameras.iter_mut().zip(locks).enumerate() {
            if let Some(locked) = *lock {
                camera.locked = locked;
                sink.set_locked(index, locked);
                debug!(camera = index, locked, "camera lock status");
            }
        }
    }

    if snapshot.guard_calls_police == Some(true) && actors.police.dispatch() {
        sink.spawn(ActorKind::PoliceCar, POLICE_CAR_SPAWN);
        info!(position = %POLICE_CAR_SPAWN, "police car dispatched");
    }

    if let Some(detection) = &snapshot.detection {
        debug!(%detection, "drone detection result");
    }
    if let Some(time_counter) = snapshot.time_counter {
        debug!(time_counter, "drone time counter");
    }
}
