//! Virtualized scroll positions.
//!
//! Lists, grids and staggered grids describe their position as the index of
//! the first visible item plus the pixel offset scrolled into it. All three
//! share [`LazyScrollPosition`], which walks scroll deltas across lines of
//! items using measured sizes where known and a running average elsewhere.
//!
//! - [`LazyListState`] - one item per line
//! - [`LazyGridState`] - fixed number of columns per line
//! - [`LazyStaggeredGridState`] - lanes advanced together line by line

mod lazy_grid_state;
mod lazy_list_state;
mod lazy_staggered_grid_state;
mod scroll_position;

pub use lazy_grid_state::LazyGridState;
pub use lazy_list_state::LazyListState;
pub use lazy_staggered_grid_state::LazyStaggeredGridState;
pub use scroll_position::LazyScrollPosition;

/// Size assumed for lines that have not been measured yet.
pub const DEFAULT_ITEM_SIZE_ESTIMATE: f32 = 48.0;
