//! Programmatic animated scrolling.

use snapscaffold_animation::{SpringSpec, TargetAnimation};
use snapscaffold_core::ChildJob;

use crate::scrollable::ScrollableState;

/// Difference between a requested and a consumed delta past which the
/// container is treated as having hit its bounds.
const BOUND_TOLERANCE: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    Running,
    Finished,
    Cancelled,
}

/// An `animate_scroll_by` in flight.
///
/// Each [`step`](Self::step) samples the spring at the frame time and feeds
/// the difference from the previous sample into the container. The animation
/// ends when the spring settles, when the container stops consuming, or when
/// its job is cancelled.
#[derive(Debug)]
pub struct ScrollAnimation {
    animation: TargetAnimation,
    job: ChildJob,
    start_nanos: Option<u64>,
    applied: f32,
}

impl ScrollAnimation {
    pub fn new(delta: f32, spec: SpringSpec, job: ChildJob) -> Self {
        Self {
            animation: TargetAnimation::new(spec, 0.0, delta, 0.0),
            job,
            start_nanos: None,
            applied: 0.0,
        }
    }

    pub fn delta(&self) -> f32 {
        self.animation.target_value()
    }

    /// Total distance applied to the container so far.
    pub fn applied(&self) -> f32 {
        self.applied
    }

    pub fn job(&self) -> &ChildJob {
        &self.job
    }

    pub fn step(&mut self, target: &dyn ScrollableState, frame_time_nanos: u64) -> AnimationStatus {
        if !self.job.is_active() {
            return AnimationStatus::Cancelled;
        }
        let start = *self.start_nanos.get_or_insert(frame_time_nanos);
        let play_time = frame_time_nanos.saturating_sub(start);

        let value = self.animation.value_at(play_time);
        let delta = value - self.applied;
        let consumed = if delta != 0.0 {
            target.consume_scroll_delta(delta)
        } else {
            0.0
        };
        self.applied += consumed;
        log::trace!(
            "scroll animation t={}ms value={value:.2} consumed={consumed:.2}",
            play_time / 1_000_000
        );

        if (delta - consumed).abs() > BOUND_TOLERANCE {
            return AnimationStatus::Finished;
        }
        if self.animation.is_finished_at(play_time) {
            return AnimationStatus::Finished;
        }
        AnimationStatus::Running
    }
}
