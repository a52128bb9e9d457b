//! Exponential decay for fling continuation.

use crate::NANOS_PER_SECOND;

const EXPONENTIAL_DECAY_FRICTION: f32 = -4.2;

/// Velocity decays as `v(t) = v0 * e^(friction * t)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialDecay {
    friction: f32,
    abs_velocity_threshold: f32,
}

impl ExponentialDecay {
    pub fn new(friction_multiplier: f32, abs_velocity_threshold: f32) -> Self {
        Self {
            friction: EXPONENTIAL_DECAY_FRICTION * friction_multiplier.max(0.0001),
            abs_velocity_threshold: abs_velocity_threshold.abs().max(0.0001),
        }
    }

    pub fn value_at(&self, initial_value: f32, initial_velocity: f32, play_time_nanos: u64) -> f32 {
        let t = (play_time_nanos as f64 / NANOS_PER_SECOND) as f32;
        initial_value - initial_velocity / self.friction
            + initial_velocity / self.friction * (self.friction * t).exp()
    }

    pub fn velocity_at(&self, initial_velocity: f32, play_time_nanos: u64) -> f32 {
        let t = (play_time_nanos as f64 / NANOS_PER_SECOND) as f32;
        initial_velocity * (self.friction * t).exp()
    }

    pub fn duration_nanos(&self, initial_velocity: f32) -> u64 {
        if initial_velocity.abs() <= self.abs_velocity_threshold {
            return 0;
        }
        let seconds = (self.abs_velocity_threshold / initial_velocity.abs()).ln() / self.friction;
        (seconds as f64 * NANOS_PER_SECOND) as u64
    }

    pub fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        initial_value - initial_velocity / self.friction
    }
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self::new(1.0, 0.1)
    }
}

/// A decay animation started from a fixed value and velocity.
#[derive(Clone, Debug)]
pub struct DecayAnimation {
    decay: ExponentialDecay,
    initial_value: f32,
    initial_velocity: f32,
    duration_nanos: u64,
}

impl DecayAnimation {
    pub fn new(decay: ExponentialDecay, initial_value: f32, initial_velocity: f32) -> Self {
        Self {
            duration_nanos: decay.duration_nanos(initial_velocity),
            decay,
            initial_value,
            initial_velocity,
        }
    }

    pub fn duration_nanos(&self) -> u64 {
        self.duration_nanos
    }

    pub fn is_finished_at(&self, play_time_nanos: u64) -> bool {
        play_time_nanos >= self.duration_nanos
    }

    pub fn value_at(&self, play_time_nanos: u64) -> f32 {
        let t = play_time_nanos.min(self.duration_nanos);
        self.decay.value_at(self.initial_value, self.initial_velocity, t)
    }

    pub fn velocity_at(&self, play_time_nanos: u64) -> f32 {
        if self.is_finished_at(play_time_nanos) {
            return 0.0;
        }
        self.decay.velocity_at(self.initial_velocity, play_time_nanos)
    }

    pub fn target_value(&self) -> f32 {
        self.decay.target_value(self.initial_value, self.initial_velocity)
    }
}
