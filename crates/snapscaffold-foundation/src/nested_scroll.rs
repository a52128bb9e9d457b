//! Nested scroll interception.
//!
//! A scrollable child offers each scroll delta and fling velocity to its
//! ancestors before and after consuming it itself. Ancestors implement
//! [`NestedScrollConnection`] to observe or take part of those values.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::{Offset, Velocity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NestedScrollSource {
    /// Direct pointer drag.
    UserInput,
    /// Fling continuation or programmatic scroll.
    SideEffect,
}

/// Hooks an ancestor installs to intercept a child's scrolling.
///
/// Every hook returns the part of the offered value the ancestor consumed.
pub trait NestedScrollConnection {
    fn on_pre_scroll(&self, _available: Offset, _source: NestedScrollSource) -> Offset {
        Offset::ZERO
    }

    fn on_post_scroll(
        &self,
        _consumed: Offset,
        _available: Offset,
        _source: NestedScrollSource,
    ) -> Offset {
        Offset::ZERO
    }

    /// Called when a fling is about to start with the release velocity.
    fn on_pre_fling(&self, _available: Velocity) -> Velocity {
        Velocity::ZERO
    }

    /// Called when a fling finished; `consumed` is what the child used.
    fn on_post_fling(&self, _consumed: Velocity, _available: Velocity) -> Velocity {
        Velocity::ZERO
    }
}

/// The chain of ancestor connections a scrollable child reports to,
/// innermost first.
#[derive(Clone, Default)]
pub struct NestedScrollDispatcher {
    connections: SmallVec<[Rc<dyn NestedScrollConnection>; 2]>,
}

impl NestedScrollDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, connection: Rc<dyn NestedScrollConnection>) {
        self.connections.push(connection);
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn dispatch_pre_scroll(&self, available: Offset, source: NestedScrollSource) -> Offset {
        let mut consumed = Offset::ZERO;
        for connection in &self.connections {
            consumed = consumed + connection.on_pre_scroll(available - consumed, source);
        }
        consumed
    }

    pub fn dispatch_post_scroll(
        &self,
        consumed: Offset,
        available: Offset,
        source: NestedScrollSource,
    ) -> Offset {
        let mut parent_consumed = Offset::ZERO;
        for connection in &self.connections {
            parent_consumed = parent_consumed
                + connection.on_post_scroll(consumed, available - parent_consumed, source);
        }
        parent_consumed
    }

    pub fn dispatch_pre_fling(&self, available: Velocity) -> Velocity {
        let mut consumed = Velocity::ZERO;
        for connection in &self.connections {
            consumed = consumed + connection.on_pre_fling(available - consumed);
        }
        consumed
    }

    pub fn dispatch_post_fling(&self, consumed: Velocity, available: Velocity) -> Velocity {
        let mut parent_consumed = Velocity::ZERO;
        for connection in &self.connections {
            parent_consumed =
                parent_consumed + connection.on_post_fling(consumed, available - parent_consumed);
        }
        parent_consumed
    }
}

impl std::fmt::Debug for NestedScrollDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NestedScrollDispatcher")
            .field("connections", &self.connections.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct HalfPreScroll;

    impl NestedScrollConnection for HalfPreScroll {
        fn on_pre_scroll(&self, available: Offset, _source: NestedScrollSource) -> Offset {
            Offset::vertical(available.y / 2.0)
        }
    }

    #[derive(Default)]
    struct FlingRecorder {
        pre: Cell<f32>,
        post: Cell<f32>,
    }

    impl NestedScrollConnection for FlingRecorder {
        fn on_pre_fling(&self, available: Velocity) -> Velocity {
            self.pre.set(available.y);
            Velocity::ZERO
        }

        fn on_post_fling(&self, consumed: Velocity, _available: Velocity) -> Velocity {
            self.post.set(consumed.y);
            Velocity::ZERO
        }
    }

    #[test]
    fn pre_scroll_offers_remaining_delta_outward() {
        let mut dispatcher = NestedScrollDispatcher::new();
        dispatcher.attach(Rc::new(HalfPreScroll));
        dispatcher.attach(Rc::new(HalfPreScroll));
        let consumed =
            dispatcher.dispatch_pre_scroll(Offset::vertical(-40.0), NestedScrollSource::UserInput);
        assert_eq!(consumed, Offset::vertical(-30.0));
    }

    #[test]
    fn fling_hooks_see_velocities() {
        let recorder = Rc::new(FlingRecorder::default());
        let mut dispatcher = NestedScrollDispatcher::new();
        dispatcher.attach(recorder.clone());

        dispatcher.dispatch_pre_fling(Velocity::vertical(-3000.0));
        dispatcher.dispatch_post_fling(Velocity::vertical(-2800.0), Velocity::vertical(-200.0));

        assert_eq!(recorder.pre.get(), -3000.0);
        assert_eq!(recorder.post.get(), -2800.0);
    }
}
