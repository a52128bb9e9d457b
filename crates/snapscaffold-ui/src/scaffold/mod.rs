//! Region compositor of the collapsible snap scaffold.

mod body;
mod layout;

pub use body::{
    record_snap_area_spacer, snap_area_spacer_height, snap_area_spacer_span, with_snap_area_spacer,
    BodyItem,
};
pub use layout::{
    BodyPadding, CollapsibleSnapScaffold, ScaffoldLayout, ScaffoldMeasureScope,
    ScaffoldMeasurement, ScaffoldSlot,
};
