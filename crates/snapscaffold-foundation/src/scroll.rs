//! Continuous scroll position.
//!
//! [`ScrollState`] keeps the scroll position in integer pixels and carries the
//! fractional remainder of consumed deltas in an accumulator, so long runs of
//! sub-pixel deltas neither drift nor get lost.

use std::cell::RefCell;
use std::rc::Rc;

use snapscaffold_core::MutableState;

use crate::scrollable::ScrollableState;
use crate::MutableInteractionSource;

/// Internal state for ScrollState.
#[derive(Debug)]
pub struct ScrollStateData {
    /// Maximum scroll value (contentSize - viewportSize)
    max_value: i32,
    /// Size of the viewport (visible area)
    viewport_size: i32,
    /// Fractional pixel remainder of the precise position
    accumulator: f32,
    /// Whether a gesture or animation is currently scrolling
    is_scrolling: bool,
}

/// State of a plain (non-virtualized) scroll container.
#[derive(Clone, Debug)]
pub struct ScrollState {
    /// Reactive scroll value
    value: MutableState<i32>,
    /// Reactive upper bound; observers re-evaluate when content is re-measured
    max_value: MutableState<i32>,
    data: Rc<RefCell<ScrollStateData>>,
    interaction_source: MutableInteractionSource,
}

impl ScrollState {
    /// Creates a ScrollState at `initial` pixels with an unbounded extent.
    ///
    /// The extent is set by the layout via [`set_max_value`](Self::set_max_value).
    pub fn new(initial: i32) -> Self {
        Self {
            value: MutableState::new(initial.max(0)),
            max_value: MutableState::new(i32::MAX),
            data: Rc::new(RefCell::new(ScrollStateData {
                max_value: i32::MAX,
                viewport_size: 0,
                accumulator: 0.0,
                is_scrolling: false,
            })),
            interaction_source: MutableInteractionSource::new(),
        }
    }

    /// Current scroll position in pixels.
    pub fn value(&self) -> i32 {
        self.value.get()
    }

    pub fn max_value(&self) -> i32 {
        self.max_value.get()
    }

    pub fn viewport_size(&self) -> i32 {
        self.data.borrow().viewport_size
    }

    /// Observable handle of the position, for snapshot flows.
    pub fn value_state(&self) -> MutableState<i32> {
        self.value.clone()
    }

    /// Sets the maximum scroll value (called by the layout during measurement).
    pub fn set_max_value(&self, max: i32) {
        let max = max.max(0);
        self.data.borrow_mut().max_value = max;
        self.max_value.set(max);
        // Coerce current value if it exceeds the new max
        if self.value.get() > max {
            self.data.borrow_mut().accumulator = 0.0;
            self.value.set(max);
        }
    }

    /// Sets the viewport size (called by the layout during measurement).
    pub fn set_viewport_size(&self, size: i32) {
        self.data.borrow_mut().viewport_size = size.max(0);
    }

    /// Jumps to `target`, clamped to `[0, max_value]`.
    pub fn scroll_to(&self, target: i32) {
        let clamped = target.clamp(0, self.data.borrow().max_value);
        self.data.borrow_mut().accumulator = 0.0;
        self.value.set(clamped);
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl ScrollableState for ScrollState {
    /// Adds `delta` to the precise position, clamps to `[0, max_value]`, and
    /// splits the result into the integer value and fractional accumulator.
    fn consume_scroll_delta(&self, delta: f32) -> f32 {
        if !delta.is_finite() {
            return 0.0;
        }
        let (max_value, accumulator) = {
            let data = self.data.borrow();
            (data.max_value as f32, data.accumulator)
        };

        let current = self.value.get() as f32 + accumulator;
        let target = (current + delta).clamp(0.0, max_value);
        let consumed = target - current;

        let rounded = target.round();
        self.data.borrow_mut().accumulator = target - rounded;
        self.value.set(rounded as i32);

        consumed
    }

    fn is_scroll_in_progress(&self) -> bool {
        self.data.borrow().is_scrolling
    }

    fn set_scroll_in_progress(&self, in_progress: bool) {
        self.data.borrow_mut().is_scrolling = in_progress;
    }

    fn interaction_source(&self) -> &MutableInteractionSource {
        &self.interaction_source
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0)
    }
}
