//! Per-frame observation loops of a snap area.

use snapscaffold_core::{EffectRestart, KeyedEffect, SnapshotFlow};

use super::{
    CollapsibleAreaValue, ScrollDirection, ScrollDirectionTracker, SnapAreaState, SnapDriver,
};

/// Runs the two long-lived loops of a snap area once per frame.
///
/// 1. Direction tracking observes the container position, conflated to the
///    latest value since the previous frame.
/// 2. The settle loop is keyed on the snap area height. It resolves the
///    current [`CollapsibleAreaValue`] and, on every change, cancels the
///    animation in flight and launches the new target. A height change
///    restarts the loop, cancelling everything launched under the old key.
///
/// # Example
///
/// ```rust,ignore
/// let mut controller = SnapController::new(state.clone());
/// loop {
///     let needs_frame = controller.on_frame(clock.frame_time_nanos());
///     if !needs_frame { break; }
/// }
/// ```
pub struct SnapController {
    state: SnapAreaState,
    position_flow: SnapshotFlow<(usize, f32)>,
    tracker: ScrollDirectionTracker<(usize, f32)>,
    settle_effect: KeyedEffect<u32>,
    resolved: Option<CollapsibleAreaValue>,
    driver: SnapDriver,
}

impl SnapController {
    pub fn new(state: SnapAreaState) -> Self {
        let source = state.source().clone();
        let driver = SnapDriver::new(state.config().snap_spring);
        Self {
            position_flow: SnapshotFlow::new(move || source.current_index_and_offset()),
            tracker: ScrollDirectionTracker::new(),
            settle_effect: KeyedEffect::new(),
            resolved: None,
            driver,
            state,
        }
    }

    pub fn state(&self) -> &SnapAreaState {
        &self.state
    }

    pub fn direction(&self) -> ScrollDirection {
        self.tracker.direction()
    }

    /// Value resolved on the latest frame.
    pub fn value(&self) -> CollapsibleAreaValue {
        self.resolved.unwrap_or_default()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Processes one frame. Returns true while a settle animation still
    /// needs frames.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        if let Some(position) = self.position_flow.poll() {
            self.tracker.observe(position);
        }

        let height = self.state.snap_area_height_px();
        if let EffectRestart::Restarted(_) = self.settle_effect.ensure(height.to_bits()) {
            log::debug!("settle loop keyed on height {height}");
            self.driver.cancel(self.state.source());
            self.resolved = None;
        }

        let value = self.state.resolve(self.tracker.direction());
        if self.resolved != Some(value) {
            log::debug!("snap value {:?} -> {value:?}", self.resolved);
            self.resolved = Some(value);
            self.driver.cancel(self.state.source());
            if value != CollapsibleAreaValue::Neutral {
                self.driver.launch(value, &self.state, self.settle_effect.job());
            }
        }

        self.driver.on_frame(self.state.source(), frame_time_nanos)
    }

    /// Stops both loops; the next frame starts them afresh.
    pub fn dispose(&mut self) {
        self.driver.cancel(self.state.source());
        self.settle_effect.dispose();
        self.position_flow.reset();
        self.tracker.reset();
        self.resolved = None;
    }
}

impl std::fmt::Debug for SnapController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapController")
            .field("state", &self.state)
            .field("direction", &self.tracker.direction())
            .field("resolved", &self.resolved)
            .field("driver", &self.driver)
            .finish()
    }
}

impl Drop for SnapController {
    fn drop(&mut self) {
        self.driver.cancel(self.state.source());
        self.settle_effect.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapscaffold_foundation::{ScrollState, ScrollableState, Velocity};

    const FRAME: u64 = 16_000_000;

    fn setup(initial: i32) -> (ScrollState, SnapAreaState, SnapController) {
        let scroll = ScrollState::new(initial);
        scroll.set_max_value(1_000);
        let state = SnapAreaState::new(200.0, true, scroll.clone());
        let controller = SnapController::new(state.clone());
        (scroll, state, controller)
    }

    fn pump(controller: &mut SnapController, mut t: u64) -> u64 {
        while controller.on_frame(t) {
            t += FRAME;
            assert!(t < 10_000_000_000, "never idle");
        }
        t
    }

    #[test]
    fn idle_without_fling() {
        let (scroll, _state, mut controller) = setup(0);
        controller.on_frame(0);
        scroll.consume_scroll_delta(150.0);
        assert!(!controller.on_frame(FRAME));
        assert_eq!(controller.direction(), ScrollDirection::Down);
        assert_eq!(controller.value(), CollapsibleAreaValue::Neutral);
        assert_eq!(scroll.value(), 150);
    }

    #[test]
    fn fast_fling_collapses() {
        let (scroll, state, mut controller) = setup(0);
        controller.on_frame(0);
        scroll.consume_scroll_delta(150.0);
        controller.on_frame(FRAME);

        state.on_fling_will_start(Velocity::vertical(-3000.0));
        state.on_fling_did_finish(Velocity::vertical(-3000.0));
        assert!(controller.on_frame(2 * FRAME));
        assert_eq!(controller.value(), CollapsibleAreaValue::Collapsed);

        pump(&mut controller, 3 * FRAME);
        assert_eq!(scroll.value(), 200);
        assert_eq!(state.scroll_offset(), 1.0);
        assert_eq!(controller.value(), CollapsibleAreaValue::Neutral);
    }

    #[test]
    fn upward_movement_springs_back_open() {
        let (scroll, state, mut controller) = setup(150);
        controller.on_frame(0);
        scroll.consume_scroll_delta(-20.0);
        state.on_fling_did_finish(Velocity::vertical(3000.0));

        assert!(controller.on_frame(FRAME));
        assert_eq!(controller.direction(), ScrollDirection::Up);
        assert_eq!(controller.value(), CollapsibleAreaValue::Expanded);
        pump(&mut controller, 2 * FRAME);
        assert_eq!(scroll.value(), 0);
    }

    #[test]
    fn height_change_restarts_settle() {
        let (scroll, state, mut controller) = setup(100);
        state.on_fling_did_finish(Velocity::vertical(-3000.0));
        controller.on_frame(0);
        controller.on_frame(FRAME);
        assert!(controller.is_animating());

        state.set_snap_area_height_px(300.0);
        let t = pump(&mut controller, 2 * FRAME);
        assert!(t > 2 * FRAME);
        assert_eq!(scroll.value(), 300);
    }

    #[test]
    fn drag_cancels_settle() {
        let (scroll, state, mut controller) = setup(100);
        state.on_fling_did_finish(Velocity::vertical(-3000.0));
        controller.on_frame(0);
        controller.on_frame(FRAME);
        assert!(controller.is_animating());

        scroll.interaction_source().start_drag();
        assert!(!controller.on_frame(2 * FRAME));
        assert_eq!(controller.value(), CollapsibleAreaValue::Neutral);
        assert!(!controller.is_animating());
    }

    #[test]
    fn disabling_snap_cancels_settle() {
        let (_scroll, state, mut controller) = setup(100);
        state.on_fling_did_finish(Velocity::vertical(-3000.0));
        controller.on_frame(0);
        state.set_snap_enabled(false);
        assert!(!controller.on_frame(FRAME));
        assert!(!controller.is_animating());
    }
}
