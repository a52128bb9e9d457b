//! Collapsible snap scaffold.
//!
//! A page layout with a top bar, a collapsible snap area, a sticky header, a
//! scrolling body and a bottom bar. The snap area collapses as the body
//! scrolls and, after a fast fling, settles to fully expanded or fully
//! collapsed.
//!
//! # Architecture
//!
//! - [`compute_fraction`] maps a raw scroll position to a `[0, 1]` collapse fraction
//! - [`ScrollDirectionTracker`] classifies the latest scroll movement
//! - [`SnapStateMachine`] decides `Collapsed`/`Expanded`/`Neutral`, gated by fling velocity
//! - [`SnapDriver`] animates the scroll position to the resting point
//! - [`SnapController`] runs the per-frame observation loops tying these together
//! - [`CollapsibleSnapScaffold`] positions the five regions from the current fraction
//!
//! # Example
//!
//! ```rust,ignore
//! let list = LazyListState::new();
//! let state = SnapAreaState::new(200.0, true, list.clone());
//! let mut controller = SnapController::new(state.clone());
//!
//! // per frame
//! let layout = CollapsibleSnapScaffold::new(state.clone()).layout(&mut scope, constraints);
//! let needs_frame = controller.on_frame(clock.frame_time_nanos());
//! ```

pub mod error;
pub mod scaffold;
pub mod snap;

pub use error::{Result, SnapScaffoldError};
pub use scaffold::{
    snap_area_spacer_height, snap_area_spacer_span, with_snap_area_spacer, BodyItem, BodyPadding,
    CollapsibleSnapScaffold, ScaffoldLayout, ScaffoldMeasureScope, ScaffoldMeasurement,
    ScaffoldSlot,
};
pub use snap::{
    compute_fraction, CollapsibleAreaValue, ScrollDirection, ScrollDirectionTracker,
    ScrollPosition, ScrollableSource, SnapAreaState, SnapConfig, SnapController, SnapDriver,
    SnapInputs, SnapNestedScrollConnection, SnapStateMachine,
};

pub mod prelude {
    pub use crate::scaffold::{
        with_snap_area_spacer, BodyItem, BodyPadding, CollapsibleSnapScaffold,
        ScaffoldMeasureScope, ScaffoldSlot,
    };
    pub use crate::snap::{
        CollapsibleAreaValue, ScrollDirection, ScrollableSource, SnapAreaState, SnapConfig,
        SnapController,
    };
    pub use snapscaffold_foundation::{
        LazyGridState, LazyListState, LazyStaggeredGridState, ScrollState,
    };
    pub use snapscaffold_ui_layout::{Constraints, Size};
}
