//! The scrollable containers a snap area can follow.

use std::any::{type_name, Any};

use snapscaffold_animation::SpringSpec;
use snapscaffold_core::ChildJob;
use snapscaffold_foundation::{
    LazyGridState, LazyListState, LazyStaggeredGridState, MutableInteractionSource,
    ScrollAnimation, ScrollState, ScrollableState,
};

use super::ScrollPosition;
use crate::error::{Result, SnapScaffoldError};

/// Closed set of containers the snap logic understands.
///
/// Holds a shared handle to the host's state; the container's lifecycle stays
/// with the host.
#[derive(Clone, Debug)]
pub enum ScrollableSource {
    Scroll(ScrollState),
    LazyList(LazyListState),
    LazyGrid(LazyGridState),
    LazyStaggeredGrid(LazyStaggeredGridState),
}

impl ScrollableSource {
    /// Resolves a type-erased container handle, failing fast on anything
    /// outside the supported kinds.
    pub fn try_from_state<S: Any>(state: &S) -> Result<Self> {
        let state: &dyn Any = state;
        if let Some(source) = state.downcast_ref::<ScrollableSource>() {
            return Ok(source.clone());
        }
        if let Some(scroll) = state.downcast_ref::<ScrollState>() {
            return Ok(Self::Scroll(scroll.clone()));
        }
        if let Some(list) = state.downcast_ref::<LazyListState>() {
            return Ok(Self::LazyList(list.clone()));
        }
        if let Some(grid) = state.downcast_ref::<LazyGridState>() {
            return Ok(Self::LazyGrid(grid.clone()));
        }
        if let Some(grid) = state.downcast_ref::<LazyStaggeredGridState>() {
            return Ok(Self::LazyStaggeredGrid(grid.clone()));
        }
        Err(SnapScaffoldError::UnsupportedScrollSource {
            type_name: type_name::<S>(),
        })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ScrollableSource::Scroll(_) => "ScrollState",
            ScrollableSource::LazyList(_) => "LazyListState",
            ScrollableSource::LazyGrid(_) => "LazyGridState",
            ScrollableSource::LazyStaggeredGrid(_) => "LazyStaggeredGridState",
        }
    }

    pub fn is_lazy(&self) -> bool {
        !matches!(self, ScrollableSource::Scroll(_))
    }

    pub fn position(&self) -> ScrollPosition {
        match self {
            ScrollableSource::Scroll(state) => ScrollPosition::Continuous {
                value: state.value() as f32,
                max_value: state.max_value() as f32,
            },
            ScrollableSource::LazyList(state) => ScrollPosition::Indexed {
                index: state.first_visible_item_index(),
                scroll_offset: state.first_visible_item_scroll_offset(),
            },
            ScrollableSource::LazyGrid(state) => ScrollPosition::Indexed {
                index: state.first_visible_item_index(),
                scroll_offset: state.first_visible_item_scroll_offset(),
            },
            ScrollableSource::LazyStaggeredGrid(state) => ScrollPosition::Indexed {
                index: state.first_visible_item_index(),
                scroll_offset: state.first_visible_item_scroll_offset(),
            },
        }
    }

    /// First visible item and offset; a plain scroll container is one item.
    pub fn current_index_and_offset(&self) -> (usize, f32) {
        self.position().index_and_offset()
    }

    pub fn is_dragged(&self) -> bool {
        self.interaction_source().is_dragged()
    }

    pub fn interaction_source(&self) -> &MutableInteractionSource {
        self.scrollable().interaction_source()
    }

    pub fn scrollable(&self) -> &dyn ScrollableState {
        match self {
            ScrollableSource::Scroll(state) => state,
            ScrollableSource::LazyList(state) => state,
            ScrollableSource::LazyGrid(state) => state,
            ScrollableSource::LazyStaggeredGrid(state) => state,
        }
    }

    /// Starts an `animate_scroll_by` of `delta` under `job`. The caller steps
    /// the returned animation once per frame.
    pub fn animate_by(&self, delta: f32, spec: SpringSpec, job: ChildJob) -> ScrollAnimation {
        self.scrollable().set_scroll_in_progress(true);
        ScrollAnimation::new(delta, spec, job)
    }

    /// Records the measured size of item `index` for index+offset
    /// containers; plain scroll containers measure their content directly.
    pub fn record_item_size(&self, index: usize, size: f32) {
        match self {
            ScrollableSource::Scroll(_) => {}
            ScrollableSource::LazyList(state) => state.cache_item_size(index, size),
            ScrollableSource::LazyGrid(state) => state.cache_item_size(index, size),
            ScrollableSource::LazyStaggeredGrid(state) => state.cache_item_size(index, size),
        }
    }

    /// Items sharing one line of the container: grid columns or staggered
    /// lanes, 1 otherwise.
    pub fn items_per_line(&self) -> usize {
        match self {
            ScrollableSource::Scroll(_) | ScrollableSource::LazyList(_) => 1,
            ScrollableSource::LazyGrid(state) => state.columns(),
            ScrollableSource::LazyStaggeredGrid(state) => state.lanes(),
        }
    }

    /// Records the size of an item spanning the whole of `line`. Unlike
    /// [`record_item_size`](Self::record_item_size) on grids, the new size
    /// replaces the old one.
    pub fn record_full_line_size(&self, line: usize, size: f32) {
        match self {
            ScrollableSource::Scroll(_) => {}
            ScrollableSource::LazyList(state) => state.cache_item_size(line, size),
            ScrollableSource::LazyGrid(state) => state.cache_full_line_size(line, size),
            ScrollableSource::LazyStaggeredGrid(state) => state.cache_full_line_size(line, size),
        }
    }
}

impl From<ScrollState> for ScrollableSource {
    fn from(state: ScrollState) -> Self {
        ScrollableSource::Scroll(state)
    }
}

impl From<LazyListState> for ScrollableSource {
    fn from(state: LazyListState) -> Self {
        ScrollableSource::LazyList(state)
    }
}

impl From<LazyGridState> for ScrollableSource {
    fn from(state: LazyGridState) -> Self {
        ScrollableSource::LazyGrid(state)
    }
}

impl From<LazyStaggeredGridState> for ScrollableSource {
    fn from(state: LazyStaggeredGridState) -> Self {
        ScrollableSource::LazyStaggeredGrid(state)
    }
}
