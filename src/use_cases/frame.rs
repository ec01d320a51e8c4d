// Per-frame application of synchronized actor state to scene transforms.
//
// Reads the latest published actor sets; never writes them.

use super::shutdown;
use crate::domain::ports::TransformSink;
use crate::domain::systems::{camera_sweep, drone_movement};
use crate::domain::tuning::{CameraSweepTuning, DroneTuning};
use crate::domain::{ActorId, ActorSet, Vec3};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneTransforms {
    pub drone_position: Vec3,
    pub camera_yaws: Vec<f32>,
}

pub struct FrameStepper {
    drone_rx: watch::Receiver<ActorSet>,
    agents_rx: watch::Receiver<ActorSet>,
    drone_tuning: DroneTuning,
    sweep_tuning: CameraSweepTuning,
    initial_yaws: Vec<f32>,
    // Seconds since start; f64 keeps the sweep smooth over long runs.
    elapsed: f64,
    transforms: SceneTransforms,
}

impl FrameStepper {
    /// `drone_rx` feeds drone movement, `agents_rx` feeds camera locks. One camera is
    /// stepped per entry in `initial_yaws`.
    pub fn new(
        drone_rx: watch::Receiver<ActorSet>,
        agents_rx: watch::Receiver<ActorSet>,
        drone_start: Vec3,
        initial_yaws: Vec<f32>,
        drone_tuning: DroneTuning,
        sweep_tuning: CameraSweepTuning,
    ) -> Self {
        let transforms = SceneTransforms {
            drone_position: drone_start,
            camera_yaws: initial_yaws.clone(),
        };
        Self {
            drone_rx,
            agents_rx,
            drone_tuning,
            sweep_tuning,
            initial_yaws,
            elapsed: 0.0,
            transforms,
        }
    }

    pub fn transforms(&self) -> &SceneTransforms {
        &self.transforms
    }

    /// Advances the scene by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> &SceneTransforms {
        self.elapsed += f64::from(dt);

        let drone = self.drone_rx.borrow().drone.clone();
        self.transforms.drone_position = drone_movement::tick_drone(
            self.transforms.drone_position,
            &drone,
            self.drone_tuning.speed,
            dt,
        );

        let agents = self.agents_rx.borrow();
        for (index, (yaw, initial)) in self
            .transforms
            .camera_yaws
            .iter_mut()
            .zip(&self.initial_yaws)
            .enumerate()
        {
            // Cameras the agents snapshot does not track keep sweeping.
            let camera = agents.cameras.get(index).copied().unwrap_or_default();
            *yaw = camera_sweep::camera_yaw(&camera, *initial, self.elapsed, self.sweep_tuning);
        }

        &self.transforms
    }

    /// Steps at a fixed frame interval and writes transforms into `sink` until shutdown.
    pub async fn run(
        mut self,
        frame_interval: Duration,
        sink: Arc<dyn TransformSink>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut interval = tokio::time::interval(frame_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let dt = frame_interval.as_secs_f32();

        info!(frame_ms = frame_interval.as_millis(), "frame stepper started");
        loop {
            tokio::select! {
                _ = shutdown::requested(&mut shutdown) => break,
                _ = interval.tick() => {}
            }

            let previous = self.transforms.clone();
            let current = self.step(dt);

            if current.drone_position != previous.drone_position {
                sink.move_actor(ActorId::Drone, current.drone_position);
            }
            for (camera, (yaw, before)) in current
                .camera_yaws
                .iter()
                .zip(&previous.camera_yaws)
                .enumerate()
            {
                if yaw != before {
                    sink.rotate_camera(camera, *yaw);
                }
            }
        }
        debug!(elapsed = self.elapsed, "frame stepper stopped");
    }
}
