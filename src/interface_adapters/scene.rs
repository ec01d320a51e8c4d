// Headless stand-in for the engine scene: records actor mutations and logs them.

use crate::domain::ports::{ActorSink, TransformSink};
use crate::domain::{ActorId, ActorKind, Vec3};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneActor {
    pub position: Vec3,
    /// Latest authoritative position reported by a synchronizer.
    pub remote_position: Option<Vec3>,
    pub yaw_degrees: f32,
    pub locked: bool,
}

#[derive(Debug, Default)]
struct SceneGraph {
    actors: HashMap<ActorId, SceneActor>,
    spawns: HashMap<ActorKind, u32>,
}

#[derive(Debug, Default)]
pub struct HeadlessScene {
    graph: Mutex<SceneGraph>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-places the tracked cameras, which exist before any synchronizer runs.
    pub fn with_cameras(initial_yaws: &[f32]) -> Self {
        let scene = Self::default();
        {
            let mut graph = scene.graph();
            for (index, yaw) in initial_yaws.iter().enumerate() {
                graph.actors.insert(
                    ActorId::Camera(index),
                    SceneActor {
                        yaw_degrees: *yaw,
                        ..SceneActor::default()
                    },
                );
            }
        }
        scene
    }

    pub fn actor(&self, actor: ActorId) -> Option<SceneActor> {
        self.graph().actors.get(&actor).copied()
    }

    pub fn spawn_count(&self, kind: ActorKind) -> u32 {
        self.graph().spawns.get(&kind).copied().unwrap_or(0)
    }

    // A poisoned lock only means a logging call panicked; the graph is still usable.
    fn graph(&self) -> MutexGuard<'_, SceneGraph> {
        self.graph.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn actor_id(kind: ActorKind) -> ActorId {
    match kind {
        ActorKind::Drone => ActorId::Drone,
        ActorKind::Guard => ActorId::Guard,
        ActorKind::PoliceCar => ActorId::PoliceCar,
    }
}

impl ActorSink for HeadlessScene {
    fn set_position(&self, actor: ActorId, position: Vec3) {
        let mut graph = self.graph();
        match graph.actors.get_mut(&actor) {
            Some(entry) => entry.remote_position = Some(position),
            None => {
                debug!(?actor, %position, "position for actor not in scene");
                return;
            }
        }
        debug!(?actor, %position, "actor position updated");
    }

    fn set_locked(&self, camera: usize, locked: bool) {
        let mut graph = self.graph();
        let Some(entry) = graph.actors.get_mut(&ActorId::Camera(camera)) else {
            debug!(camera, "lock for camera not in scene");
            return;
        };
        entry.locked = locked;
        debug!(camera, locked, "camera lock status");
    }

    fn spawn(&self, kind: ActorKind, position: Vec3) {
        let mut graph = self.graph();
        *graph.spawns.entry(kind).or_insert(0) += 1;
        graph.actors.insert(
            actor_id(kind),
            SceneActor {
                position,
                ..SceneActor::default()
            },
        );
        info!(?kind, %position, "actor instantiated");
    }
}

impl TransformSink for HeadlessScene {
    fn move_actor(&self, actor: ActorId, position: Vec3) {
        if let Some(entry) = self.graph().actors.get_mut(&actor) {
            entry.position = position;
            trace!(?actor, %position, "actor moved");
        }
    }

    fn rotate_camera(&self, camera: usize, yaw_degrees: f32) {
        if let Some(entry) = self.graph().actors.get_mut(&ActorId::Camera(camera)) {
            entry.yaw_degrees = yaw_degrees;
            trace!(camera, yaw_degrees, "camera rotated");
        }
    }
}
