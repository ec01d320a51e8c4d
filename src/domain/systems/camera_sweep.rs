use crate::domain::state::CameraState;
use crate::domain::tuning::CameraSweepTuning;

/// Yaw (degrees) of a camera at `elapsed` seconds. Locked cameras rest at `initial_yaw`.
pub fn camera_yaw(
    camera: &CameraState,
    initial_yaw: f32,
    elapsed: f64,
    tuning: CameraSweepTuning,
) -> f32 {
    if camera.locked {
        return initial_yaw;
    }
    let phase = (elapsed * f64::from(tuning.speed)).sin() as f32;
    initial_yaw + phase * tuning.range_degrees
}
