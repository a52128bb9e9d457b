//! Settle animation toward a resolved resting point.

use snapscaffold_animation::SpringSpec;
use snapscaffold_core::Job;
use snapscaffold_foundation::{AnimationStatus, ScrollAnimation};

use super::{CollapsibleAreaValue, ScrollableSource, SnapAreaState};

#[derive(Debug)]
struct ActiveSnap {
    target: CollapsibleAreaValue,
    animation: ScrollAnimation,
}

/// Owns the single in-flight settle animation.
///
/// Launching a new target supersedes the previous one; the animation runs
/// under a child of the caller's scope so cancelling the scope stops it
/// before its next write.
#[derive(Debug)]
pub struct SnapDriver {
    spec: SpringSpec,
    active: Option<ActiveSnap>,
}

impl SnapDriver {
    pub fn new(spec: SpringSpec) -> Self {
        Self { spec, active: None }
    }

    /// Scroll delta that brings the snap area to rest at `target`, given the
    /// pixels already scrolled into it.
    pub fn settle_delta(target: CollapsibleAreaValue, offset: f32, height: f32) -> Option<f32> {
        match target {
            CollapsibleAreaValue::Expanded => Some(-offset),
            CollapsibleAreaValue::Collapsed => Some(height - offset),
            CollapsibleAreaValue::Neutral => None,
        }
    }

    /// Starts settling toward `target`, cancelling any animation in flight.
    ///
    /// Returns false when there is nothing to animate: a `Neutral` target, an
    /// index+offset container already past its first item, or an area
    /// already at rest.
    pub fn launch(
        &mut self,
        target: CollapsibleAreaValue,
        state: &SnapAreaState,
        scope: &Job,
    ) -> bool {
        self.cancel(state.source());
        let Some(offset) = state.scroll_position().offset_within_snap_area() else {
            log::debug!("snap to {target:?} skipped: first item scrolled past");
            return false;
        };
        let Some(delta) = Self::settle_delta(target, offset, state.snap_area_height_px()) else {
            return false;
        };
        if delta == 0.0 || !delta.is_finite() {
            return false;
        }
        log::debug!("snap to {target:?}: animate_scroll_by({delta:.1})");
        let animation = state.source().animate_by(delta, self.spec, scope.child());
        self.active = Some(ActiveSnap { target, animation });
        true
    }

    /// Cancels the animation in flight, if any.
    pub fn cancel(&mut self, source: &ScrollableSource) {
        if let Some(active) = self.active.take() {
            active.animation.job().cancel();
            source.scrollable().set_scroll_in_progress(false);
            log::debug!(
                "snap to {:?} cancelled after {:.1}px",
                active.target,
                active.animation.applied()
            );
        }
    }

    /// Advances the animation to `frame_time_nanos`. Returns true while it
    /// still needs frames.
    pub fn on_frame(&mut self, source: &ScrollableSource, frame_time_nanos: u64) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if source.is_dragged() {
            self.cancel(source);
            return false;
        }
        match active.animation.step(source.scrollable(), frame_time_nanos) {
            AnimationStatus::Running => true,
            status => {
                log::debug!(
                    "snap to {:?} {status:?} after {:.1}px",
                    active.target,
                    active.animation.applied()
                );
                self.active = None;
                source.scrollable().set_scroll_in_progress(false);
                false
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_target(&self) -> Option<CollapsibleAreaValue> {
        self.active.as_ref().map(|active| active.target)
    }
}
