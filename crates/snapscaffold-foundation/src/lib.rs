//! Host-side scroll plumbing consumed by the snap scaffold.
//!
//! - [`ScrollState`] - continuous scroll position with a max extent
//! - [`lazy`] - index + offset positions of virtualized lists and grids
//! - [`MutableInteractionSource`] - drag interactions and `is_dragged`
//! - [`NestedScrollConnection`] - scroll/fling interception between parent and child
//! - [`ScrollAnimation`] - cancellable programmatic `animate_scroll_by`

mod geometry;
mod gesture_constants;
mod interaction;
pub mod lazy;
mod nested_scroll;
pub mod scroll;
mod scroll_animation;
mod scrollable;

pub use geometry::{Offset, Velocity};
pub use gesture_constants::MAX_FLING_VELOCITY;
pub use interaction::{DragInteraction, Interaction, InteractionId, MutableInteractionSource};
pub use lazy::{LazyGridState, LazyListState, LazyScrollPosition, LazyStaggeredGridState};
pub use nested_scroll::{NestedScrollConnection, NestedScrollDispatcher, NestedScrollSource};
pub use scroll::ScrollState;
pub use scroll_animation::{AnimationStatus, ScrollAnimation};
pub use scrollable::ScrollableState;
