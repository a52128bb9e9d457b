//! Observable state cells.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

struct StateCell<T> {
    value: RefCell<T>,
    version: Cell<u64>,
}

/// A shared, observable value.
///
/// Writes that do not change the value (structural equality) are ignored, so
/// observers keyed on [`MutableState::version`] only wake for real changes.
/// Clones share the same cell.
pub struct MutableState<T> {
    inner: Rc<StateCell<T>>,
}

impl<T> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StateCell {
                value: RefCell::new(value),
                version: Cell::new(0),
            }),
        }
    }

    /// Runs `f` with a borrow of the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Monotonic counter bumped on every effective write.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Returns true if both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn bump(&self) {
        self.inner.version.set(self.inner.version.get().wrapping_add(1));
    }
}

impl<T: Clone> MutableState<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T: PartialEq> MutableState<T> {
    /// Stores `value`, returning true if it differed from the previous one.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.bump();
        true
    }

    /// Mutates the value in place; the version is bumped only if it changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool
    where
        T: Clone,
    {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .finish()
    }
}

impl<T: Default> Default for MutableState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bumps_version_only_on_change() {
        let state = MutableState::new(1);
        assert_eq!(state.version(), 0);

        assert!(!state.set(1));
        assert_eq!(state.version(), 0);

        assert!(state.set(2));
        assert_eq!(state.version(), 1);
        assert_eq!(state.get(), 2);
    }

    #[test]
    fn clones_share_the_cell() {
        let a = MutableState::new(0.0f32);
        let b = a.clone();
        b.set(4.5);
        assert_eq!(a.get(), 4.5);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn update_mutates_in_place() {
        let state = MutableState::new(vec![1, 2]);
        assert!(state.update(|v| v.push(3)));
        assert_eq!(state.with(|v| v.len()), 3);
        assert!(!state.update(|_| {}));
    }
}
