use snapscaffold_foundation::{NestedScrollConnection, Velocity};

use super::SnapAreaState;

/// Observes the body's flings to drive the snapping latch.
///
/// Consumes nothing: the container's own fling proceeds untouched.
#[derive(Clone, Debug)]
pub struct SnapNestedScrollConnection {
    state: SnapAreaState,
}

impl SnapNestedScrollConnection {
    pub fn new(state: SnapAreaState) -> Self {
        Self { state }
    }
}

impl NestedScrollConnection for SnapNestedScrollConnection {
    fn on_pre_fling(&self, available: Velocity) -> Velocity {
        log::trace!("pre-fling available={:.0}", available.y);
        self.state.on_fling_will_start(available);
        Velocity::ZERO
    }

    fn on_post_fling(&self, consumed: Velocity, _available: Velocity) -> Velocity {
        log::trace!("post-fling consumed={:.0}", consumed.y);
        self.state.on_fling_did_finish(consumed);
        Velocity::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapscaffold_foundation::{NestedScrollDispatcher, ScrollState};

    #[test]
    fn fling_gate_through_dispatcher() {
        let scroll = ScrollState::new(150);
        scroll.set_max_value(1_000);
        let state = SnapAreaState::new(200.0, true, scroll);
        let mut dispatcher = NestedScrollDispatcher::new();
        dispatcher.attach(state.nested_scroll_connection());

        assert_eq!(
            dispatcher.dispatch_post_fling(Velocity::vertical(-3000.0), Velocity::ZERO),
            Velocity::ZERO
        );
        assert!(state.allow_snapping());

        assert_eq!(
            dispatcher.dispatch_pre_fling(Velocity::vertical(1000.0)),
            Velocity::ZERO
        );
        assert!(!state.allow_snapping());
    }
}
