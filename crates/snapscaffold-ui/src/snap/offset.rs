//! Scroll position to collapse fraction.

/// Raw position of the scrollable container backing the scaffold body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollPosition {
    /// Pixel offset into a plain scroll container plus its max extent.
    Continuous { value: f32, max_value: f32 },
    /// First visible item and the pixels scrolled into it.
    Indexed { index: usize, scroll_offset: f32 },
}

impl ScrollPosition {
    /// `(index, offset)` pair ordered along the scroll axis.
    ///
    /// Continuous positions report index 0, so the pair compares
    /// lexicographically for both kinds.
    pub fn index_and_offset(&self) -> (usize, f32) {
        match *self {
            ScrollPosition::Continuous { value, .. } => (0, value),
            ScrollPosition::Indexed {
                index,
                scroll_offset,
            } => (index, scroll_offset),
        }
    }

    /// Pixels scrolled into the snap area, or `None` once an index+offset
    /// container has moved past its first item.
    pub fn offset_within_snap_area(&self) -> Option<f32> {
        match *self {
            ScrollPosition::Continuous { value, .. } => Some(value),
            ScrollPosition::Indexed {
                index: 0,
                scroll_offset,
            } => Some(scroll_offset),
            ScrollPosition::Indexed { .. } => None,
        }
    }
}

/// Collapse fraction in `[0, 1]` for `position`: 0 when the snap area is
/// fully shown, 1 when it is scrolled away.
pub fn compute_fraction(position: ScrollPosition, snap_area_height: f32) -> f32 {
    if !(snap_area_height > 0.0) {
        return 0.0;
    }
    match position {
        ScrollPosition::Continuous { value, max_value } => {
            if !(max_value > 0.0) {
                return 0.0;
            }
            let ratio = snap_area_height / max_value;
            let offset = value / max_value;
            remap_clamped(offset, (0.0, ratio), (0.0, 1.0))
        }
        ScrollPosition::Indexed { index, .. } if index > 0 => 1.0,
        ScrollPosition::Indexed { scroll_offset, .. } => {
            remap_clamped(scroll_offset, (0.0, snap_area_height), (0.0, 1.0))
        }
    }
}

/// Linearly maps `value` from `from` onto `to`, clamped to `to`.
///
/// NaN, either from the input or a degenerate `from` range, yields the lower
/// bound of `to`.
pub fn remap_clamped(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let (lower, upper) = if to.0 <= to.1 { to } else { (to.1, to.0) };
    let t = (value - from.0) / (from.1 - from.0);
    let mapped = to.0 + t * (to.1 - to.0);
    if mapped.is_nan() {
        return lower;
    }
    mapped.clamp(lower, upper)
}
