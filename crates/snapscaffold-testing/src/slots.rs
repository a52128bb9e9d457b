use snapscaffold_ui::{BodyPadding, ScaffoldMeasureScope, ScaffoldSlot};
use snapscaffold_ui_layout::{Constraints, Size};

/// Slot content of fixed heights. The body fills the height it is offered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedSlots {
    pub top_bar: Option<f32>,
    pub snap_area: Option<f32>,
    pub sticky_header: Option<f32>,
    pub bottom_bar: Option<f32>,
    pub has_body: bool,
    /// Constraints the body was last measured with.
    pub last_body_constraints: Option<Constraints>,
    pub last_body_padding: Option<BodyPadding>,
}

impl FixedSlots {
    pub fn new() -> Self {
        Self {
            has_body: true,
            ..Self::default()
        }
    }

    pub fn top_bar(mut self, height: f32) -> Self {
        self.top_bar = Some(height);
        self
    }

    pub fn snap_area(mut self, height: f32) -> Self {
        self.snap_area = Some(height);
        self
    }

    pub fn sticky_header(mut self, height: f32) -> Self {
        self.sticky_header = Some(height);
        self
    }

    pub fn bottom_bar(mut self, height: f32) -> Self {
        self.bottom_bar = Some(height);
        self
    }

    pub fn without_body(mut self) -> Self {
        self.has_body = false;
        self
    }
}

impl ScaffoldMeasureScope for FixedSlots {
    fn measure(&mut self, slot: ScaffoldSlot, constraints: Constraints) -> Option<Size> {
        let height = match slot {
            ScaffoldSlot::TopBar => self.top_bar,
            ScaffoldSlot::SnapArea => self.snap_area,
            ScaffoldSlot::StickyHeader => self.sticky_header,
            ScaffoldSlot::BottomBar => self.bottom_bar,
            ScaffoldSlot::Body => None,
        }?;
        Some(constraints.constrain(Size::new(constraints.max_width, height)))
    }

    fn measure_body(&mut self, constraints: Constraints, padding: BodyPadding) -> Option<Size> {
        self.last_body_constraints = Some(constraints);
        self.last_body_padding = Some(padding);
        if !self.has_body {
            return None;
        }
        let height = if constraints.has_bounded_height() {
            constraints.max_height
        } else {
            0.0
        };
        Some(Size::new(constraints.max_width, height))
    }
}
