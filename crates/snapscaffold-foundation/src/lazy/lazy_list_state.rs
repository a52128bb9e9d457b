//! Lazy list state management.
//!
//! Provides [`LazyListState`] for controlling and observing lazy list scroll position.

use super::LazyScrollPosition;
use crate::scrollable::ScrollableState;
use crate::MutableInteractionSource;

/// State object for lazy list scroll position tracking.
///
/// Holds the current scroll position and provides methods to programmatically
/// control scrolling.
///
/// # Example
///
/// ```rust,ignore
/// let state = LazyListState::new();
/// state.set_item_count(100);
///
/// // Scroll to item 50
/// state.scroll_to_item(50, 0.0);
/// assert_eq!(state.first_visible_item_index(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct LazyListState {
    position: LazyScrollPosition,
}

impl LazyListState {
    /// Creates a new [`LazyListState`] with default initial position.
    pub fn new() -> Self {
        Self::with_initial_position(0, 0.0)
    }

    /// Creates a new [`LazyListState`] with the specified initial position.
    pub fn with_initial_position(
        initial_first_visible_item_index: usize,
        initial_first_visible_item_scroll_offset: f32,
    ) -> Self {
        Self {
            position: LazyScrollPosition::new(
                1,
                initial_first_visible_item_index,
                initial_first_visible_item_scroll_offset,
            ),
        }
    }

    /// Returns the index of the first visible item.
    pub fn first_visible_item_index(&self) -> usize {
        self.position.index()
    }

    /// Returns the scroll offset of the first visible item.
    ///
    /// This is the amount the first item is scrolled off-screen.
    pub fn first_visible_item_scroll_offset(&self) -> f32 {
        self.position.scroll_offset()
    }

    /// Scrolls to the specified item index.
    ///
    /// # Arguments
    /// * `index` - The index of the item to scroll to
    /// * `scroll_offset` - Additional offset within the item
    pub fn scroll_to_item(&self, index: usize, scroll_offset: f32) {
        let last = self.position.item_count().saturating_sub(1);
        self.position.request_position(index.min(last), scroll_offset);
    }

    /// Dispatches a raw scroll delta and returns the consumed part.
    pub fn dispatch_scroll_delta(&self, delta: f32) -> f32 {
        self.position.consume_scroll_delta(delta)
    }

    pub fn set_item_count(&self, count: usize) {
        self.position.set_item_count(count);
    }

    pub fn set_viewport_size(&self, size: f32) {
        self.position.set_viewport_size(size);
    }

    /// Caches the measured size of an item for scroll estimation.
    pub fn cache_item_size(&self, index: usize, size: f32) {
        self.position.cache_item_size(index, size);
    }

    /// Gets a cached item size if available.
    pub fn get_cached_size(&self, index: usize) -> Option<f32> {
        self.position.cached_line_size(index)
    }

    /// Returns the running average of measured item sizes.
    pub fn average_item_size(&self) -> f32 {
        self.position.average_line_size()
    }

    /// Returns whether we can scroll forward (more items below/right).
    pub fn can_scroll_forward(&self) -> bool {
        self.position.can_scroll_forward()
    }

    /// Returns whether we can scroll backward (more items above/left).
    pub fn can_scroll_backward(&self) -> bool {
        self.position.can_scroll_backward()
    }

    pub fn position(&self) -> &LazyScrollPosition {
        &self.position
    }
}

impl ScrollableState for LazyListState {
    fn consume_scroll_delta(&self, delta: f32) -> f32 {
        self.position.consume_scroll_delta(delta)
    }

    fn is_scroll_in_progress(&self) -> bool {
        self.position.is_scrolling()
    }

    fn set_scroll_in_progress(&self, in_progress: bool) {
        self.position.set_scrolling(in_progress);
    }

    fn interaction_source(&self) -> &MutableInteractionSource {
        self.position.interaction_source()
    }
}

impl Default for LazyListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = LazyListState::new();
        assert_eq!(state.first_visible_item_index(), 0);
        assert_eq!(state.first_visible_item_scroll_offset(), 0.0);
    }

    #[test]
    fn test_scroll_to_item_clamps_to_count() {
        let state = LazyListState::new();
        state.set_item_count(20);
        state.scroll_to_item(50, 5.0);
        assert_eq!(state.first_visible_item_index(), 19);
        assert_eq!(state.first_visible_item_scroll_offset(), 5.0);
    }

    #[test]
    fn test_scroll_delta() {
        let state = LazyListState::new();
        state.set_item_count(10);
        state.set_viewport_size(100.0);
        for i in 0..10 {
            state.cache_item_size(i, 50.0);
        }
        assert_eq!(state.dispatch_scroll_delta(75.0), 75.0);
        assert_eq!(state.first_visible_item_index(), 1);
        assert_eq!(state.first_visible_item_scroll_offset(), 25.0);
        assert!(state.can_scroll_backward());
        assert!(state.can_scroll_forward());
    }
}
