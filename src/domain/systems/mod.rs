pub mod camera_sweep;
pub mod drone_movement;
