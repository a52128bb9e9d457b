use snapscaffold_foundation::{LazyGridState, LazyListState, LazyStaggeredGridState};
use snapscaffold_testing::{FixedSlots, ScaffoldTestRule};
use snapscaffold_ui::{CollapsibleAreaValue, SnapAreaState, SnapScaffoldError};
use snapscaffold_ui_layout::Constraints;

fn slots() -> FixedSlots {
    FixedSlots::new()
        .top_bar(50.0)
        .snap_area(200.0)
        .sticky_header(100.0)
}

fn constraints() -> Constraints {
    Constraints::fixed(360.0, 800.0)
}

#[test]
fn list_collapses_over_spacer_item() {
    let list = LazyListState::new();
    list.set_item_count(51);
    list.set_viewport_size(650.0);
    for index in 1..51 {
        list.cache_item_size(index, 100.0);
    }
    let state = SnapAreaState::new(200.0, true, list.clone());
    let mut rule = ScaffoldTestRule::new(state, slots(), constraints());
    assert_eq!(list.get_cached_size(0), Some(200.0));

    rule.perform_scroll_input(|scope| {
        scope.move_by(-150.0);
    });
    assert_eq!(list.first_visible_item_index(), 0);
    assert_eq!(list.first_visible_item_scroll_offset(), 150.0);
    assert_eq!(rule.state().scroll_offset(), 0.75);

    rule.report_fling(-3_000.0);
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Collapsed);
    rule.await_idle();
    assert!(rule.state().scroll_offset() > 0.999);
    assert_eq!(rule.sticky_header_y(), 50.0);
}

#[test]
fn list_direction_overrides_expand() {
    let list = LazyListState::new();
    list.set_item_count(51);
    list.set_viewport_size(650.0);
    for index in 1..51 {
        list.cache_item_size(index, 100.0);
    }
    let state = SnapAreaState::new(200.0, true, list.clone());
    let mut rule = ScaffoldTestRule::new(state, slots(), constraints());

    rule.perform_scroll_input(|scope| {
        scope.move_by(-30.0);
    });
    assert_eq!(rule.state().scroll_offset(), 0.15);

    // still moving forward: the expand is overruled
    rule.report_fling(-3_000.0);
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Collapsed);
    rule.await_idle();
    assert!(rule.state().scroll_offset() > 0.999);
}

#[test]
fn grid_springs_back_open() {
    let grid = LazyGridState::new(2);
    grid.set_item_count(42);
    grid.set_viewport_size(650.0);
    for index in 2..42 {
        grid.cache_item_size(index, 100.0);
    }
    let state = SnapAreaState::new(200.0, true, grid.clone());
    let mut rule = ScaffoldTestRule::new(state, slots(), constraints());

    rule.perform_scroll_input(|scope| {
        scope.move_by(-100.0);
        scope.move_by(70.0);
    });
    assert_eq!(grid.first_visible_item_index(), 0);
    assert_eq!(grid.first_visible_item_scroll_offset(), 30.0);

    rule.report_fling(3_000.0);
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Expanded);
    rule.await_idle();
    assert!(grid.first_visible_item_scroll_offset() < 0.01);
    assert_eq!(rule.sticky_header_y(), 250.0);
}

#[test]
fn type_erased_sources_resolve_or_fail_fast() {
    let staggered = LazyStaggeredGridState::new(3);
    let state = SnapAreaState::try_new(200.0, true, &staggered).unwrap();
    assert_eq!(state.source().kind_name(), "LazyStaggeredGridState");

    struct CarouselState;
    let err = SnapAreaState::try_new(200.0, true, &CarouselState).unwrap_err();
    let SnapScaffoldError::UnsupportedScrollSource { type_name } = err;
    assert!(type_name.contains("CarouselState"));
}

#[test]
fn staggered_grid_follows_shrunk_snap_area() {
    let grid = LazyStaggeredGridState::new(2);
    grid.set_item_count(42);
    grid.set_viewport_size(650.0);
    for index in 2..42 {
        grid.cache_item_size(index, 100.0);
    }
    let state = SnapAreaState::new(300.0, true, grid.clone());
    let slots = FixedSlots::new()
        .top_bar(50.0)
        .snap_area(300.0)
        .sticky_header(100.0);
    let mut rule = ScaffoldTestRule::new(state, slots, constraints());
    assert_eq!(grid.position().cached_line_size(0), Some(300.0));

    rule.slots_mut().snap_area = Some(200.0);
    rule.frame();
    assert_eq!(rule.state().snap_area_height_px(), 200.0);
    assert_eq!(grid.position().cached_line_size(0), Some(200.0));

    rule.perform_scroll_input(|scope| {
        scope.move_by(-150.0);
    });
    assert_eq!(grid.first_visible_item_scroll_offset(), 150.0);
    assert_eq!(rule.state().scroll_offset(), 0.75);

    rule.report_fling(-3_000.0);
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Collapsed);
    rule.await_idle();
    assert!(rule.state().scroll_offset() > 0.999);
    assert_eq!(rule.sticky_header_y(), 50.0);

    // the first body row follows right after the collapsed area
    rule.perform_scroll_input(|scope| {
        scope.move_by(-10.0);
    });
    assert_eq!(grid.first_visible_item_index(), 2);
    let offset = grid.first_visible_item_scroll_offset();
    assert!((9.9..10.1).contains(&offset), "{offset}");
}
