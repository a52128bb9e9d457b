//! Five-region layout.
//!
//! ```text
//! +----------------------+ y = 0
//! | top bar              |
//! +----------------------+ y = top
//! | snap area            |   body starts at top + sticky and scrolls
//! |                      |   underneath, led by a spacer as tall as
//! +----------------------+   the snap area
//! | sticky header        | y = top + round(area * (1 - |fraction|))
//! +----------------------+
//! | body ...             |
//! +----------------------+ y = height - bottom
//! | bottom bar           |
//! +----------------------+
//! ```

use snapscaffold_ui_layout::{Constraints, MeasureResult, Placement, Size};

use super::body::record_snap_area_spacer;
use crate::snap::SnapAreaState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaffoldSlot {
    TopBar,
    SnapArea,
    Body,
    StickyHeader,
    BottomBar,
}

impl ScaffoldSlot {
    /// Placement order; later slots draw on top.
    pub const ALL: [ScaffoldSlot; 5] = [
        ScaffoldSlot::TopBar,
        ScaffoldSlot::SnapArea,
        ScaffoldSlot::Body,
        ScaffoldSlot::StickyHeader,
        ScaffoldSlot::BottomBar,
    ];

    fn ordinal(self) -> usize {
        match self {
            ScaffoldSlot::TopBar => 0,
            ScaffoldSlot::SnapArea => 1,
            ScaffoldSlot::Body => 2,
            ScaffoldSlot::StickyHeader => 3,
            ScaffoldSlot::BottomBar => 4,
        }
    }
}

/// Insets handed to the body so its content can clear the bottom bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyPadding {
    pub bottom: f32,
}

/// Host-side measurement of the scaffold's slot content.
pub trait ScaffoldMeasureScope {
    /// Measures the content of a non-body slot. `None` when the slot is empty.
    fn measure(&mut self, slot: ScaffoldSlot, constraints: Constraints) -> Option<Size>;

    /// Measures the body with the bottom inset it should reserve.
    fn measure_body(&mut self, constraints: Constraints, padding: BodyPadding) -> Option<Size>;
}

/// Measured region heights; independent of the collapse fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaffoldMeasurement {
    pub size: Size,
    pub top_bar_height: f32,
    pub snap_area_height: f32,
    pub sticky_header_height: f32,
    pub bottom_bar_height: f32,
    present: [bool; 5],
}

impl ScaffoldMeasurement {
    pub fn has(&self, slot: ScaffoldSlot) -> bool {
        self.present[slot.ordinal()]
    }

    pub fn sticky_header_y(&self, fraction: f32) -> f32 {
        let visible = self.snap_area_height * (1.0 - fraction.abs());
        self.top_bar_height + visible.round()
    }

    fn slot_y(&self, slot: ScaffoldSlot, fraction: f32) -> f32 {
        match slot {
            ScaffoldSlot::TopBar => 0.0,
            ScaffoldSlot::SnapArea => self.top_bar_height,
            ScaffoldSlot::Body => self.top_bar_height + self.sticky_header_height,
            ScaffoldSlot::StickyHeader => self.sticky_header_y(fraction),
            ScaffoldSlot::BottomBar => self.size.height - self.bottom_bar_height,
        }
    }

    /// Positions every present region for `fraction`.
    pub fn place(&self, fraction: f32) -> MeasureResult<ScaffoldSlot> {
        let placements = ScaffoldSlot::ALL
            .into_iter()
            .filter(|slot| self.has(*slot))
            .map(|slot| Placement::new(slot, 0.0, self.slot_y(slot, fraction), slot.ordinal()));
        MeasureResult::new(self.size, placements)
    }
}

/// Placed scaffold for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaffoldLayout {
    pub result: MeasureResult<ScaffoldSlot>,
    pub fraction: f32,
    /// Opacity of the snap area content; fades out as it collapses.
    pub snap_area_alpha: f32,
    pub body_padding: BodyPadding,
}

impl ScaffoldLayout {
    pub fn y_of(&self, slot: ScaffoldSlot) -> Option<f32> {
        self.result.placement_of(&slot).map(|placement| placement.y)
    }
}

/// The scaffold layout entry point.
#[derive(Clone, Debug)]
pub struct CollapsibleSnapScaffold {
    state: SnapAreaState,
}

impl CollapsibleSnapScaffold {
    pub fn new(state: SnapAreaState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SnapAreaState {
        &self.state
    }

    /// Measures all regions and reports the snap area height to the state.
    ///
    /// Every region is measured loose; the body's height ceiling excludes the
    /// top bar and sticky header.
    pub fn measure(
        &self,
        scope: &mut impl ScaffoldMeasureScope,
        constraints: Constraints,
    ) -> ScaffoldMeasurement {
        let loose = constraints.loosen();
        let mut present = [false; 5];
        let mut measure = |slot: ScaffoldSlot| {
            let size = scope.measure(slot, loose);
            present[slot.ordinal()] = size.is_some();
            size.unwrap_or(Size::ZERO)
        };
        let top_bar = measure(ScaffoldSlot::TopBar);
        let bottom_bar = measure(ScaffoldSlot::BottomBar);
        let snap_area = measure(ScaffoldSlot::SnapArea);
        let sticky_header = measure(ScaffoldSlot::StickyHeader);

        self.state.on_snap_area_measured(snap_area);
        record_snap_area_spacer(&self.state);

        let bounded = constraints.has_bounded_height();
        let body_ceiling = if bounded {
            constraints.max_height - top_bar.height - sticky_header.height
        } else {
            f32::INFINITY
        };
        let padding = BodyPadding {
            bottom: bottom_bar.height,
        };
        let body = scope.measure_body(loose.with_max_height(body_ceiling), padding);
        present[ScaffoldSlot::Body.ordinal()] = body.is_some();
        let body = body.unwrap_or(Size::ZERO);

        let height = if bounded {
            constraints.max_height
        } else {
            top_bar.height + sticky_header.height + body.height
        };
        let width = if constraints.max_width.is_finite() {
            constraints.max_width
        } else {
            [top_bar, bottom_bar, snap_area, sticky_header, body]
                .iter()
                .fold(0.0f32, |width, size| width.max(size.width))
        };

        ScaffoldMeasurement {
            size: constraints.constrain(Size::new(width, height)),
            top_bar_height: top_bar.height,
            snap_area_height: snap_area.height,
            sticky_header_height: sticky_header.height,
            bottom_bar_height: bottom_bar.height,
            present,
        }
    }

    /// Places a measurement using the fraction current at placement time.
    pub fn place(&self, measurement: &ScaffoldMeasurement) -> ScaffoldLayout {
        let fraction = self.state.scroll_offset();
        ScaffoldLayout {
            result: measurement.place(fraction),
            fraction,
            snap_area_alpha: (1.0 - fraction).clamp(0.0, 1.0),
            body_padding: BodyPadding {
                bottom: measurement.bottom_bar_height,
            },
        }
    }

    pub fn layout(
        &self,
        scope: &mut impl ScaffoldMeasureScope,
        constraints: Constraints,
    ) -> ScaffoldLayout {
        let measurement = self.measure(scope, constraints);
        self.place(&measurement)
    }
}
