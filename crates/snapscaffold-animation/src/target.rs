//! Spring animation between two values.

use crate::spring::{SpringSimulation, SpringSpec};
use crate::NANOS_PER_SECOND;

/// Velocities below `visibility_threshold * VELOCITY_THRESHOLD_FACTOR` per
/// second move less than the threshold within one 16ms frame.
const VELOCITY_THRESHOLD_FACTOR: f32 = 62.5;
const MAX_DURATION_NANOS: u64 = 60_000_000_000;
const DURATION_STEP_NANOS: u64 = 1_000_000;

/// A float spring animation from `initial_value` toward `target_value`.
///
/// Values are sampled by play time. Once the spring is within the visibility
/// threshold the animation reports finished and returns the exact target.
#[derive(Clone, Debug)]
pub struct TargetAnimation {
    spec: SpringSpec,
    simulation: SpringSimulation,
    initial_value: f32,
    target_value: f32,
    initial_velocity: f32,
    duration_nanos: u64,
}

impl TargetAnimation {
    pub fn new(
        spec: SpringSpec,
        initial_value: f32,
        target_value: f32,
        initial_velocity: f32,
    ) -> Self {
        let simulation = spec.simulation();
        let mut animation = Self {
            spec,
            simulation,
            initial_value,
            target_value,
            initial_velocity,
            duration_nanos: 0,
        };
        animation.duration_nanos = animation.estimate_duration_nanos();
        animation
    }

    pub fn initial_value(&self) -> f32 {
        self.initial_value
    }

    pub fn target_value(&self) -> f32 {
        self.target_value
    }

    pub fn duration_nanos(&self) -> u64 {
        self.duration_nanos
    }

    pub fn is_finished_at(&self, play_time_nanos: u64) -> bool {
        play_time_nanos >= self.duration_nanos
    }

    pub fn value_at(&self, play_time_nanos: u64) -> f32 {
        if self.is_finished_at(play_time_nanos) {
            return self.target_value;
        }
        let (displacement, _) = self.sample(play_time_nanos);
        self.target_value + displacement
    }

    pub fn velocity_at(&self, play_time_nanos: u64) -> f32 {
        if self.is_finished_at(play_time_nanos) {
            return 0.0;
        }
        self.sample(play_time_nanos).1
    }

    fn sample(&self, play_time_nanos: u64) -> (f32, f32) {
        self.simulation.update_values(
            self.initial_value - self.target_value,
            self.initial_velocity,
            play_time_nanos as f64 / NANOS_PER_SECOND,
        )
    }

    fn is_at_rest(&self, displacement: f32, velocity: f32) -> bool {
        let threshold = self.spec.visibility_threshold;
        displacement.abs() < threshold && velocity.abs() < threshold * VELOCITY_THRESHOLD_FACTOR
    }

    fn estimate_duration_nanos(&self) -> u64 {
        let mut t = 0;
        while t < MAX_DURATION_NANOS {
            let (displacement, velocity) = self.sample(t);
            if self.is_at_rest(displacement, velocity) {
                return t;
            }
            t += DURATION_STEP_NANOS;
        }
        log::warn!(
            "spring {:?} did not settle within {}s; clamping duration",
            self.spec,
            MAX_DURATION_NANOS / 1_000_000_000
        );
        MAX_DURATION_NANOS
    }
}
