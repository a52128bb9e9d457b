//! Lazy grid state.

use super::LazyScrollPosition;
use crate::scrollable::ScrollableState;
use crate::MutableInteractionSource;

/// Scroll position of a vertically scrolling grid with fixed columns.
///
/// The first visible item index is always the first item of a row.
#[derive(Clone, Debug)]
pub struct LazyGridState {
    position: LazyScrollPosition,
}

impl LazyGridState {
    pub fn new(columns: usize) -> Self {
        Self::with_initial_position(columns, 0, 0.0)
    }

    pub fn with_initial_position(columns: usize, index: usize, scroll_offset: f32) -> Self {
        Self {
            position: LazyScrollPosition::new(columns, index, scroll_offset),
        }
    }

    pub fn columns(&self) -> usize {
        self.position.items_per_line()
    }

    pub fn first_visible_item_index(&self) -> usize {
        self.position.index()
    }

    pub fn first_visible_item_scroll_offset(&self) -> f32 {
        self.position.scroll_offset()
    }

    pub fn scroll_to_item(&self, index: usize, scroll_offset: f32) {
        let last = self.position.item_count().saturating_sub(1);
        self.position.request_position(index.min(last), scroll_offset);
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

    /// Records an item spanning every column of `line`, replacing the line's
    /// previous size.
    pub fn cache_full_line_size(&self, line: usize, size: f32) {
        self.position.cache_full_line_size(line, size);
    }

    pub fn position(&self) -> &LazyScrollPosition {
        &self.position
    }
}

impl ScrollableState for LazyGridState {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_snaps_to_row_start() {
        let state = LazyGridState::with_initial_position(4, 6, 0.0);
        assert_eq!(state.first_visible_item_index(), 4);
        assert_eq!(state.columns(), 4);
    }
}
