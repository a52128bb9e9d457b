//! Derived-value observation with conflate-to-latest delivery.

use std::fmt;

/// Observes a derived value and emits it when it changes.
///
/// The reader closure is evaluated on each [`poll`](SnapshotFlow::poll). Any
/// number of intermediate writes between two polls collapse into one emission
/// of the value current at poll time; intermediate values are never queued.
/// Consecutive equal values are not re-emitted.
pub struct SnapshotFlow<T> {
    read: Box<dyn Fn() -> T>,
    last: Option<T>,
}

impl<T: Clone + PartialEq> SnapshotFlow<T> {
    pub fn new(read: impl Fn() -> T + 'static) -> Self {
        Self {
            read: Box::new(read),
            last: None,
        }
    }

    /// Returns the current value if it differs from the last emission.
    pub fn poll(&mut self) -> Option<T> {
        let value = (self.read)();
        if self.last.as_ref() == Some(&value) {
            return None;
        }
        self.last = Some(value.clone());
        Some(value)
    }

    /// The most recently emitted value.
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Forgets the last emission so the next poll emits unconditionally.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl<T: fmt::Debug> fmt::Debug for SnapshotFlow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotFlow")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MutableState;

    #[test]
    fn first_poll_emits() {
        let state = MutableState::new(3);
        let reader = state.clone();
        let mut flow = SnapshotFlow::new(move || reader.get());
        assert_eq!(flow.poll(), Some(3));
        assert_eq!(flow.poll(), None);
    }

    #[test]
    fn intermediate_values_are_conflated() {
        let state = MutableState::new(0);
        let reader = state.clone();
        let mut flow = SnapshotFlow::new(move || reader.get() * 10);
        flow.poll();

        state.set(1);
        state.set(2);
        state.set(3);

        assert_eq!(flow.poll(), Some(30));
        assert_eq!(flow.poll(), None);
    }

    #[test]
    fn returning_to_last_value_is_silent() {
        let state = MutableState::new(1);
        let reader = state.clone();
        let mut flow = SnapshotFlow::new(move || reader.get());
        flow.poll();

        state.set(2);
        state.set(1);
        assert_eq!(flow.poll(), None);

        flow.reset();
        assert_eq!(flow.poll(), Some(1));
    }
}
