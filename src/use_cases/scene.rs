use crate::domain::ActorKind;
use crate::domain::ports::ActorSink;
use crate::domain::tuning::{DRONE_SPAWN, GUARD_SPAWN};

/// Instantiates the drone and the guard. Called once, before any synchronizer runs.
pub fn spawn_initial_actors(sink: &dyn ActorSink) {
    sink.spawn(ActorKind::Drone, DRONE_SPAWN);
    sink.spawn(ActorKind::Guard, GUARD_SPAWN);
}
