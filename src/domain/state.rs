// Domain-level actor state owned by a synchronizer.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance(self, other: Vec3) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Kinds of actor the scene can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Drone,
    Guard,
    PoliceCar,
}

/// Addressable actors in the scene. Cameras are pre-placed and addressed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorId {
    Drone,
    Guard,
    PoliceCar,
    Camera(usize),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DroneState {
    pub target_position: Vec3,
    pub panoramic: bool,
    pub override_mode: bool,
}

impl DroneState {
    // The drone only patrols toward its target outside panoramic/override modes.
    pub fn should_move(&self) -> bool {
        !self.panoramic && !self.override_mode
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    pub locked: bool,
}

/// One-way dispatch state for the police car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoliceDispatch {
    #[default]
    Idle,
    Dispatched,
}

impl PoliceDispatch {
    /// Moves to `Dispatched`. Returns true only on the transition itself.
    pub fn dispatch(&mut self) -> bool {
        match self {
            PoliceDispatch::Idle => {
                *self = PoliceDispatch::Dispatched;
                true
            }
            PoliceDispatch::Dispatched => false,
        }
    }

    pub fn spawned(&self) -> bool {
        matches!(self, PoliceDispatch::Dispatched)
    }
}

/// The actor set a single synchronizer owns and mutates in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActorSet {
    pub drone: DroneState,
    pub cameras: Vec<CameraState>,
    pub police: PoliceDispatch,
}

impl ActorSet {
    pub fn new(tracked_cameras: usize) -> Self {
        Self {
            drone: DroneState::default(),
            cameras: vec![CameraState::default(); tracked_cameras],
            police: PoliceDispatch::Idle,
        }
    }
}
