// Scene tuning for the drone and the pre-placed cameras.
// Keep this separate from runtime configuration (endpoints, poll intervals).

use super::state::Vec3;

pub const DRONE_SPAWN: Vec3 = Vec3::new(0.0, 40.0, 0.0);
pub const GUARD_SPAWN: Vec3 = Vec3::new(-58.0, 0.0, -42.0);
pub const POLICE_CAR_SPAWN: Vec3 = Vec3::new(-20.0, 0.0, -20.0);

#[derive(Debug, Clone, Copy)]
pub struct DroneTuning {
    /// Maximum approach speed toward the target position, in units per second.
    pub speed: f32,
}

impl Default for DroneTuning {
    fn default() -> Self {
        Self { speed: 5.0 }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CameraSweepTuning {
    /// Angular frequency of the side-to-side sweep.
    pub speed: f32,

    /// Max yaw offset from the resting angle, in degrees.
    pub range_degrees: f32,
}

impl Default for CameraSweepTuning {
    fn default() -> Self {
        Self {
            speed: 1.0,
            range_degrees: 30.0,
        }
    }
}
