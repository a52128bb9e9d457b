//! Body decoration.
//!
//! The body scrolls underneath the snap area, so its first item is a spacer
//! as tall as the area. Scrolling that spacer away is what collapses the
//! area, which is why index+offset sources read the offset of item 0.
//! On grids the spacer fills the whole first line, so body items start at
//! index [`snap_area_spacer_span`].

use crate::snap::SnapAreaState;

/// An entry of the decorated body.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyItem<T> {
    /// Leading spacer matching the snap area height, spanning `span` items
    /// of the first line.
    SnapAreaSpacer { height: f32, span: usize },
    Item(T),
}

impl<T> BodyItem<T> {
    pub fn as_item(&self) -> Option<&T> {
        match self {
            BodyItem::Item(item) => Some(item),
            BodyItem::SnapAreaSpacer { .. } => None,
        }
    }
}

pub fn snap_area_spacer_height(state: &SnapAreaState) -> f32 {
    state.snap_area_height_px()
}

/// Container indices the spacer occupies: one full line.
pub fn snap_area_spacer_span(state: &SnapAreaState) -> usize {
    state.source().items_per_line()
}

/// Prepends the snap area spacer to `items`.
pub fn with_snap_area_spacer<I>(
    state: &SnapAreaState,
    items: I,
) -> impl Iterator<Item = BodyItem<I::Item>>
where
    I: IntoIterator,
{
    let spacer = BodyItem::SnapAreaSpacer {
        height: snap_area_spacer_height(state),
        span: snap_area_spacer_span(state),
    };
    std::iter::once(spacer).chain(items.into_iter().map(BodyItem::Item))
}

/// Reports the spacer's measured size to an index+offset source, so its
/// line scrolls over exactly the current snap area height.
pub fn record_snap_area_spacer(state: &SnapAreaState) {
    state
        .source()
        .record_full_line_size(0, snap_area_spacer_height(state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapscaffold_foundation::{LazyGridState, LazyListState};

    #[test]
    fn spacer_leads_items() {
        let state = SnapAreaState::new(180.0, true, LazyListState::new());
        let items: Vec<_> = with_snap_area_spacer(&state, ["a", "b"]).collect();
        assert_eq!(
            items,
            vec![
                BodyItem::SnapAreaSpacer {
                    height: 180.0,
                    span: 1,
                },
                BodyItem::Item("a"),
                BodyItem::Item("b"),
            ]
        );
        assert_eq!(items[1].as_item(), Some(&"a"));
        assert_eq!(items[0].as_item(), None);
    }

    #[test]
    fn spacer_size_reaches_lazy_source() {
        let list = LazyListState::new();
        let state = SnapAreaState::new(180.0, true, list.clone());
        record_snap_area_spacer(&state);
        assert_eq!(list.get_cached_size(0), Some(180.0));
    }

    #[test]
    fn spacer_claims_first_grid_row() {
        let grid = LazyGridState::new(3);
        let state = SnapAreaState::new(300.0, true, grid.clone());
        let items: Vec<_> = with_snap_area_spacer(&state, 0..4).collect();
        assert_eq!(
            items[0],
            BodyItem::SnapAreaSpacer {
                height: 300.0,
                span: 3,
            }
        );
        assert_eq!(snap_area_spacer_span(&state), 3);

        grid.cache_item_size(1, 500.0);
        record_snap_area_spacer(&state);
        state.set_snap_area_height_px(200.0);
        record_snap_area_spacer(&state);
        assert_eq!(grid.position().cached_line_size(0), Some(200.0));
    }
}
