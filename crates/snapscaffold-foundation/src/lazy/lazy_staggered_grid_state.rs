//! Lazy staggered grid state.

use super::LazyScrollPosition;
use crate::scrollable::ScrollableState;
use crate::MutableInteractionSource;

/// Scroll position of a staggered grid.
///
/// Lanes are advanced together: a line holds one item per lane and is as
/// tall as its tallest item. This keeps the index + offset contract of the
/// other lazy containers at the price of ignoring per-lane stagger.
#[derive(Clone, Debug)]
pub struct LazyStaggeredGridState {
    position: LazyScrollPosition,
}

impl LazyStaggeredGridState {
    pub fn new(lanes: usize) -> Self {
        Self {
            position: LazyScrollPosition::new(lanes, 0, 0.0),
        }
    }

    pub fn lanes(&self) -> usize {
        self.position.items_per_line()
    }

    pub fn first_visible_item_index(&self) -> usize {
        self.position.index()
    }

    pub fn first_visible_item_scroll_offset(&self) -> f32 {
        self.position.scroll_offset()
    }

    pub fn set_item_count(&self, count: usize) {
        self.position.set_item_count(count);
    }

    pub fn set_viewport_size(&self, size: f32) {
        self.position.set_viewport_size(size);
    }

    pub fn cache_item_size(&self, index: usize, size: f32) {
        self.position.cache_item_size(index, size);
    }

    /// Records an item spanning every lane of `line`, replacing the line's
    /// previous size.
    pub fn cache_full_line_size(&self, line: usize, size: f32) {
        self.position.cache_full_line_size(line, size);
    }

    pub fn position(&self) -> &LazyScrollPosition {
        &self.position
    }
}

impl ScrollableState for LazyStaggeredGridState {
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
