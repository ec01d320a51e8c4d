use crate::domain::state::{DroneState, Vec3};

/// Steps `current` toward `target` by at most `max_delta`, landing exactly on the target
/// when it is within reach.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let distance = current.distance(target);
    if distance <= max_delta || distance == 0.0 {
        return target;
    }

    let scale = max_delta / distance;
    Vec3::new(
        current.x + (target.x - current.x) * scale,
        current.y + (target.y - current.y) * scale,
        current.z + (target.z - current.z) * scale,
    )
}

pub fn tick_drone(position: Vec3, drone: &DroneState, speed: f32, dt: f32) -> Vec3 {
    if !drone.should_move() {
        return position;
    }
    move_towards(position, drone.target_position, speed * dt)
}
